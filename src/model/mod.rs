//! Application model - the complete state of the walkthrough
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod demo;
pub mod timed;

pub use demo::{ApiDemo, BlockId, CodeTab, DemoState, HttpMethod, SourceSnippet};
pub use timed::TimedFlag;

use std::time::Instant;

use crate::config::AppConfig;
use crate::theme::Theme;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The walkthrough cards, in page order
    pub demos: Vec<ApiDemo>,
    /// Ephemeral per-card state, index-aligned with `demos`
    pub states: Vec<DemoState>,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted configuration (theme id, flag windows)
    pub config: AppConfig,
}

impl AppModel {
    /// Create a model over a set of demos
    pub fn new(demos: Vec<ApiDemo>, theme: Theme, config: AppConfig) -> Self {
        let states = vec![DemoState::default(); demos.len()];
        Self {
            demos,
            states,
            theme,
            config,
        }
    }

    /// Demo and its state by index
    pub fn demo(&self, index: usize) -> Option<(&ApiDemo, &DemoState)> {
        Some((self.demos.get(index)?, self.states.get(index)?))
    }

    /// Find a demo index by HTTP method (the CLI selects cards this way)
    pub fn demo_index_by_method(&self, method: HttpMethod) -> Option<usize> {
        self.demos.iter().position(|d| d.method == method)
    }

    /// Collapse every elapsed flag across all cards; true if anything changed
    pub fn expire_flags(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for state in &mut self.states {
            changed |= state.expire_flags(now);
        }
        changed
    }
}
