//! Command types for the Elm-style architecture
//!
//! Commands represent side effects already performed or requested by an
//! update, surfaced so the caller can react (re-render, schedule a tick).

use std::time::Instant;

/// Side-effect outcomes returned from `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Visible state changed; re-render the affected card
    Redraw,
    /// A flag was armed; a tick at this instant will observe its expiry
    ScheduleTick(Instant),
}
