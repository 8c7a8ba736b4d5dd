//! resterm - REST API walkthrough for the terminal
//!
//! This crate provides the core types and logic for an educational demo
//! that renders annotated, syntax-highlighted REST API examples, following
//! the Elm Architecture pattern.

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod highlight;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use highlight::{highlight, Category, Highlighted, LanguageId, Span};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
