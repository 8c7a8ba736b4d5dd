//! Highlighted span data structures
//!
//! The highlighter output is an ordered list of categorized spans rather
//! than a marked-up string, so rendering never has to trust raw markup.

/// Lexical category of a span, for display styling only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    String,
    Comment,
    Number,
    /// Uncategorized text (no pass claimed it)
    Text,
}

/// A contiguous piece of the source with a single category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub category: Category,
}

impl Span {
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Create an uncategorized span
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Category::Text)
    }
}

/// Highlighter output: the input split into categorized spans, in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    pub spans: Vec<Span>,
}

impl Highlighted {
    /// Wrap raw text as a single uncategorized span
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![Span::text(text)],
        }
    }

    /// Reassemble the original input (the split is lossless)
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// True if no span carries a category
    pub fn is_plain(&self) -> bool {
        self.spans.iter().all(|s| s.category == Category::Text)
    }

    /// Iterate spans of a given category, in document order
    pub fn spans_of(&self, category: Category) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.category == category)
    }
}
