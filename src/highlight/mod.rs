//! Syntax highlighting module
//!
//! Provides best-effort, pass-based syntax highlighting for the demo
//! snippets:
//! - Language detection from snippet tags
//! - An ordered pipeline of lexical passes (keywords, strings, comments,
//!   numbers) that splits text into categorized spans
//! - Theme-independent output: rendering maps each category to a color
//!
//! This is intentionally not a real lexer. Each pass only subdivides text
//! that no earlier pass claimed, so pass order is significant and fixed per
//! language. Good enough for hard-coded teaching snippets; do not point it
//! at arbitrary source files and expect correct tokenization.

mod languages;
mod rules;
mod spans;

pub use languages::LanguageId;
pub use rules::highlight;
pub use spans::{Category, Highlighted, Span};
