//! Demo card model - snippets, methods, and per-card ephemeral state

use std::time::Instant;

use serde_json::Value;

use crate::highlight::LanguageId;

use super::timed::TimedFlag;

/// The four HTTP methods covered by the walkthrough
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Uppercase wire name, as shown on the method badge
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Parse a method name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }
}

/// An immutable source-code snippet shown in a code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSnippet {
    pub code: String,
    pub language: LanguageId,
    pub title: Option<String>,
}

impl SourceSnippet {
    pub fn new(code: impl Into<String>, language: LanguageId) -> Self {
        Self {
            code: code.into(),
            language,
            title: None,
        }
    }

    /// Set the title bar text (builder pattern)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Which code tab is shown for a demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTab {
    #[default]
    Frontend,
    Backend,
}

impl CodeTab {
    pub fn label(&self) -> &'static str {
        match self {
            CodeTab::Frontend => "React Frontend",
            CodeTab::Backend => "Spring Boot Backend",
        }
    }
}

/// Identifies a copyable code block within a demo card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    Frontend,
    Backend,
    MockResponse,
}

/// One API walkthrough card: method, endpoint, code for both sides, and an
/// optional canned response payload
#[derive(Debug, Clone)]
pub struct ApiDemo {
    pub method: HttpMethod,
    pub endpoint: String,
    pub description: String,
    pub frontend: SourceSnippet,
    pub backend: SourceSnippet,
    /// Line-by-line explanation shown under the code
    pub explanation: Vec<String>,
    /// Canned payload revealed by "Try it"; None means nothing to show
    pub mock_response: Option<Value>,
}

impl ApiDemo {
    /// The snippet behind a given block, if the demo has one
    pub fn snippet_for(&self, block: BlockId) -> Option<SourceSnippet> {
        match block {
            BlockId::Frontend => Some(self.frontend.clone()),
            BlockId::Backend => Some(self.backend.clone()),
            BlockId::MockResponse => self.mock_response_snippet(),
        }
    }

    /// The mock response rendered as a pretty-printed JSON snippet
    pub fn mock_response_snippet(&self) -> Option<SourceSnippet> {
        let payload = self.mock_response.as_ref()?;
        let pretty = serde_json::to_string_pretty(payload).ok()?;
        Some(SourceSnippet::new(pretty, LanguageId::Json).with_title("Mock Response"))
    }
}

/// Ephemeral per-card state: tab selection plus the auto-expiring flags
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoState {
    pub active_tab: CodeTab,
    /// "Response received" panel visibility (3s window)
    pub reveal: TimedFlag,
    copied_frontend: TimedFlag,
    copied_backend: TimedFlag,
    copied_response: TimedFlag,
}

impl DemoState {
    pub fn copied(&self, block: BlockId) -> &TimedFlag {
        match block {
            BlockId::Frontend => &self.copied_frontend,
            BlockId::Backend => &self.copied_backend,
            BlockId::MockResponse => &self.copied_response,
        }
    }

    pub fn copied_mut(&mut self, block: BlockId) -> &mut TimedFlag {
        match block {
            BlockId::Frontend => &mut self.copied_frontend,
            BlockId::Backend => &mut self.copied_backend,
            BlockId::MockResponse => &mut self.copied_response,
        }
    }

    /// Collapse every elapsed flag; true if anything visible changed
    pub fn expire_flags(&mut self, now: Instant) -> bool {
        let mut changed = self.reveal.expire(now);
        changed |= self.copied_frontend.expire(now);
        changed |= self.copied_backend.expire(now);
        changed |= self.copied_response.expire(now);
        changed
    }
}
