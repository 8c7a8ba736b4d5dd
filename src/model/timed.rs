//! Auto-expiring boolean flags
//!
//! The "copied" indicator and the mock-response reveal both follow the same
//! pattern: flip on, then flip back off after a fixed window, where a repeat
//! trigger replaces the deadline instead of stacking a second one.

use std::time::{Duration, Instant};

/// A boolean that arms for a window and then expires.
///
/// States are {Idle, Active(deadline)}. Triggering while active re-arms with
/// a fresh deadline (cancel-and-reschedule, last write wins). Observations
/// take an explicit `now` so the state machine is deterministic under test.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedFlag {
    deadline: Option<Instant>,
}

impl TimedFlag {
    /// Arm (or re-arm) the flag for `window` starting at `now`
    pub fn trigger(&mut self, now: Instant, window: Duration) {
        self.deadline = Some(now + window);
    }

    /// True while armed and the deadline has not passed
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now < d)
    }

    /// Collapse an elapsed deadline back to idle.
    ///
    /// Returns true if the flag transitioned from active to idle on this
    /// call, i.e. something visible changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// The moment this flag will expire, if armed
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
