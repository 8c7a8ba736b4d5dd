//! Command-line argument parsing
//!
//! Supports:
//! - Selecting a demo card by HTTP method
//! - Choosing the frontend/backend code tab
//! - Simulating the call ("Try it") and copying snippets
//! - Theme selection and listing

use clap::{Parser, ValueEnum};

use crate::model::{CodeTab, HttpMethod};

/// Interactive REST API walkthrough for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "resterm",
    version,
    about = "Learn RESTful API patterns from annotated, highlighted examples"
)]
pub struct CliArgs {
    /// Show only the demo for this HTTP method (default: all)
    #[arg(value_enum, value_name = "METHOD")]
    pub method: Option<MethodArg>,

    /// Code tab to display
    #[arg(long, value_enum, default_value_t = TabArg::Frontend)]
    pub tab: TabArg,

    /// Simulate the API call and reveal the mock response
    #[arg(long)]
    pub try_it: bool,

    /// Copy the displayed snippet to the system clipboard
    #[arg(long)]
    pub copy: bool,

    /// Theme id to use for this run (overrides the config file)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    Get,
    Post,
    Put,
    Delete,
}

impl From<MethodArg> for HttpMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Get => HttpMethod::Get,
            MethodArg::Post => HttpMethod::Post,
            MethodArg::Put => HttpMethod::Put,
            MethodArg::Delete => HttpMethod::Delete,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabArg {
    Frontend,
    Backend,
}

impl From<TabArg> for CodeTab {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Frontend => CodeTab::Frontend,
            TabArg::Backend => CodeTab::Backend,
        }
    }
}
