//! resterm binary entry point
//!
//! Builds the model from the built-in catalog, applies the CLI-driven
//! messages through `update`, and prints the rendered walkthrough.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use resterm::catalog::builtin_demos;
use resterm::cli::CliArgs;
use resterm::messages::Msg;
use resterm::model::{BlockId, CodeTab, HttpMethod};
use resterm::theme::{list_available_themes, load_theme, ThemeSource};
use resterm::update::update;
use resterm::{AppConfig, AppModel, Theme};

fn main() -> Result<()> {
    resterm::tracing::init();

    let args = CliArgs::parse();

    if args.list_themes {
        for info in list_available_themes() {
            let source = match info.source {
                ThemeSource::User => "user",
                ThemeSource::Builtin => "builtin",
            };
            println!("{:<20} {} ({})", info.id, info.name, source);
        }
        return Ok(());
    }

    let config = AppConfig::load();
    let theme_id = args.theme.clone().unwrap_or_else(|| config.theme.clone());
    let theme = load_theme(&theme_id).unwrap_or_else(|e| {
        tracing::warn!("Failed to load theme '{}': {}; using default", theme_id, e);
        Theme::default()
    });

    let mut model = AppModel::new(builtin_demos(), theme, config);

    let selected: Vec<usize> = match args.method {
        Some(method) => {
            let method: HttpMethod = method.into();
            model.demo_index_by_method(method).into_iter().collect()
        }
        None => (0..model.demos.len()).collect(),
    };

    let tab: CodeTab = args.tab.into();
    let now = Instant::now();
    for &demo in &selected {
        update(&mut model, Msg::SelectTab { demo, tab });
        if args.try_it {
            update(&mut model, Msg::TryIt { demo, now });
        }
        if args.copy {
            let block = match tab {
                CodeTab::Frontend => BlockId::Frontend,
                CodeTab::Backend => BlockId::Backend,
            };
            update(&mut model, Msg::CopyCode { demo, block, now });
        }
    }

    if args.method.is_none() {
        println!("{}", resterm::view::render_overview(&model.theme));
    }
    for &index in &selected {
        if let Some((demo, state)) = model.demo(index) {
            println!("{}", resterm::view::render_demo(demo, state, &model.theme, now));
        }
    }

    Ok(())
}
