//! Agent configuration from TOML (`[agent]` section)

use hal_application::AgentConfig;
use hal_domain::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// initial_location = "pod bay"
/// seed = 2001                  # fixed response selection
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Location reported before any `relocate`
    pub initial_location: String,
    /// Seed for response selection (random when unset)
    pub seed: Option<u64>,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            initial_location: DEFAULT_LOCATION.to_string(),
            seed: None,
        }
    }
}

impl FileAgentConfig {
    pub fn to_agent_config(&self) -> AgentConfig {
        AgentConfig {
            initial_location: self.initial_location.clone(),
            seed: self.seed,
        }
    }
}
