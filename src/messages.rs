//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::Instant;

use crate::model::{BlockId, CodeTab};

/// Messages driving the demo state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Switch the code tab of a demo card (frontend/backend)
    SelectTab { demo: usize, tab: CodeTab },
    /// "Try this API call" - reveal the mock response for the reveal window
    TryIt { demo: usize, now: Instant },
    /// Copy a code block's original text to the system clipboard
    CopyCode {
        demo: usize,
        block: BlockId,
        now: Instant,
    },
    /// Clock tick - collapse expired flags
    Tick { now: Instant },
}
