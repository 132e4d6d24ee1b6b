//! Application-level configuration.
//!
//! This module provides configuration types that control how the agent
//! behaves, independent of where the values were loaded from.

use hal_domain::DEFAULT_LOCATION;

/// Agent behavior configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Location reported before any `relocate` command.
    pub initial_location: String,
    /// Fixed seed for response selection. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            initial_location: DEFAULT_LOCATION.to_string(),
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.initial_location = location.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
