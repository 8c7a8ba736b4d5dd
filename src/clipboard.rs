//! System clipboard access
//!
//! One outbound call: write a snippet's original text to the clipboard.
//! Failures are non-fatal; callers log and move on.

use anyhow::{Context, Result};

/// Write `text` to the system clipboard
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text)
        .context("failed to write clipboard")?;
    Ok(())
}
