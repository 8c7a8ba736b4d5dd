//! View rendering - model to styled terminal text
//!
//! Pure functions from model state to ANSI-styled strings. Nothing here
//! mutates the model; the caller decides when to print.

use std::time::Instant;

use crate::highlight::{highlight, Category};
use crate::model::{ApiDemo, BlockId, CodeTab, DemoState, HttpMethod, SourceSnippet};
use crate::theme::{Color, Theme};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Render a complete demo card: badge, code block for the active tab,
/// explanation list, and the mock-response panel while revealed.
pub fn render_demo(demo: &ApiDemo, state: &DemoState, theme: &Theme, now: Instant) -> String {
    let mut out = String::new();

    render_header(&mut out, demo, theme);
    out.push('\n');

    let (snippet, block) = match state.active_tab {
        CodeTab::Frontend => (&demo.frontend, BlockId::Frontend),
        CodeTab::Backend => (&demo.backend, BlockId::Backend),
    };
    out.push_str(&format!(
        "{}{}{}\n",
        theme.ui.muted.ansi_fg(),
        state.active_tab.label(),
        RESET
    ));
    out.push_str(&render_code_block(
        snippet,
        theme,
        state.copied(block).is_active(now),
    ));

    render_explanation(&mut out, demo, theme);

    // Shown only while the reveal window is open and a payload exists
    if state.reveal.is_active(now) {
        if let Some(mock) = demo.mock_response_snippet() {
            out.push('\n');
            out.push_str(&format!(
                "{}{}Response received!{}\n",
                theme.ui.success.ansi_fg(),
                BOLD,
                RESET
            ));
            out.push_str(&render_code_block(
                &mock,
                theme,
                state.copied(BlockId::MockResponse).is_active(now),
            ));
        }
    }

    out
}

/// Render a titled code block with highlighted spans
pub fn render_code_block(snippet: &SourceSnippet, theme: &Theme, copied: bool) -> String {
    let mut out = String::new();
    let border = theme.ui.border.ansi_fg();

    if let Some(title) = &snippet.title {
        let indicator = if copied { "  Copied!" } else { "" };
        out.push_str(&format!(
            "{}── {}{}{} ──{}\n",
            border,
            theme.ui.muted.ansi_fg(),
            title,
            indicator,
            RESET
        ));
    }

    let highlighted = highlight(&snippet.code, snippet.language);
    for span in &highlighted.spans {
        let color = theme.syntax.color_for(span.category);
        if span.category == Category::Text {
            out.push_str(&format!("{}{}", color.ansi_fg(), span.text));
        } else {
            out.push_str(&format!("{}{}{}", color.ansi_fg(), span.text, RESET));
        }
    }
    out.push_str(RESET);
    out.push('\n');
    out
}

fn render_header(out: &mut String, demo: &ApiDemo, theme: &Theme) {
    let badge = badge_color(demo.method, theme);
    out.push_str(&format!(
        "{}{} {} {} {}{}{}\n",
        badge.ansi_bg(),
        BOLD,
        demo.method.as_str(),
        RESET,
        theme.ui.heading.ansi_fg(),
        demo.endpoint,
        RESET
    ));
    out.push_str(&format!(
        "{}{}{}\n",
        theme.ui.muted.ansi_fg(),
        demo.description,
        RESET
    ));
}

fn render_explanation(out: &mut String, demo: &ApiDemo, theme: &Theme) {
    if demo.explanation.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(&format!(
        "{}{}Code Explanation{}\n",
        theme.ui.heading.ansi_fg(),
        BOLD,
        RESET
    ));
    for (index, line) in demo.explanation.iter().enumerate() {
        out.push_str(&format!(
            "{}{:>3}.{} {}\n",
            theme.ui.muted.ansi_fg(),
            index + 1,
            RESET,
            line
        ));
    }
}

/// Render the page header: title plus the HTTP methods overview
pub fn render_overview(theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}{}Master RESTful APIs with Spring Boot{}\n",
        theme.ui.heading.ansi_fg(),
        BOLD,
        RESET
    ));
    out.push_str(&format!(
        "{}Learn REST API concepts through interactive examples, complete with React\n\
         frontend and Spring Boot backend code explanations.{}\n\n",
        theme.ui.muted.ansi_fg(),
        RESET
    ));

    let overview: [(HttpMethod, &str); 4] = [
        (HttpMethod::Get, "Retrieve data"),
        (HttpMethod::Post, "Create new data"),
        (HttpMethod::Put, "Update existing data"),
        (HttpMethod::Delete, "Remove data"),
    ];
    for (method, blurb) in overview {
        out.push_str(&format!(
            "{}{} {:<6} {}{}{}{}\n",
            badge_color(method, theme).ansi_bg(),
            BOLD,
            method.as_str(),
            RESET,
            theme.ui.muted.ansi_fg(),
            blurb,
            RESET
        ));
    }
    out
}

/// Badge color per method, mirroring the page's badge palette
pub fn badge_color(method: HttpMethod, theme: &Theme) -> Color {
    match method {
        HttpMethod::Get => theme.ui.success,
        HttpMethod::Post => theme.ui.info,
        HttpMethod::Put => theme.ui.warning,
        HttpMethod::Delete => theme.ui.danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_demos;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_code_block_contains_original_text() {
        let theme = Theme::default();
        let demos = builtin_demos();
        let rendered = strip_ansi(&render_code_block(&demos[0].frontend, &theme, false));
        assert!(rendered.contains("const fetchUsers = async () => {"));
        assert!(rendered.contains("Frontend Implementation"));
        assert!(!rendered.contains("Copied!"));
    }

    #[test]
    fn test_copied_indicator_in_title_bar() {
        let theme = Theme::default();
        let demos = builtin_demos();
        let rendered = strip_ansi(&render_code_block(&demos[0].backend, &theme, true));
        assert!(rendered.contains("Copied!"));
    }

    #[test]
    fn test_mock_response_hidden_until_revealed() {
        let theme = Theme::default();
        let demos = builtin_demos();
        let now = Instant::now();
        let mut state = DemoState::default();

        let before = strip_ansi(&render_demo(&demos[0], &state, &theme, now));
        assert!(!before.contains("Response received!"));

        state.reveal.trigger(now, std::time::Duration::from_secs(3));
        let during = strip_ansi(&render_demo(&demos[0], &state, &theme, now));
        assert!(during.contains("Response received!"));
        assert!(during.contains("john@example.com"));
    }

    #[test]
    fn test_backend_tab_renders_java_snippet() {
        let theme = Theme::default();
        let demos = builtin_demos();
        let mut state = DemoState::default();
        state.active_tab = CodeTab::Backend;
        let rendered = strip_ansi(&render_demo(&demos[0], &state, &theme, Instant::now()));
        assert!(rendered.contains("@GetMapping(\"/users\")"));
        assert!(!rendered.contains("fetchUsers"));
    }
}
