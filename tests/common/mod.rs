//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use resterm::catalog::builtin_demos;
use resterm::{AppConfig, AppModel, Theme};

/// Create a model over the built-in catalog with default config and theme
pub fn test_model() -> AppModel {
    AppModel::new(builtin_demos(), Theme::default(), AppConfig::default())
}

/// A clipboard stub that always succeeds
pub fn ok_clipboard(_text: &str) -> anyhow::Result<()> {
    Ok(())
}

/// A clipboard stub that always fails
pub fn failing_clipboard(_text: &str) -> anyhow::Result<()> {
    anyhow::bail!("clipboard unavailable")
}
