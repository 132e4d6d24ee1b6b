//! Session configuration from TOML (`[session]` and `[transcript]` sections)

use super::ConfigIssue;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Interval of the agent's periodic update, in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl FileSessionConfig {
    pub fn tick_interval(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.tick_interval_ms == 0 {
            let issue = ConfigIssue::warning(
                "session.tick_interval_ms",
                format!(
                    "session.tick_interval_ms: must be positive, falling back to {}",
                    DEFAULT_TICK_INTERVAL_MS
                ),
            );
            (Duration::from_millis(DEFAULT_TICK_INTERVAL_MS), vec![issue])
        } else {
            (Duration::from_millis(self.tick_interval_ms), vec![])
        }
    }
}

/// Raw transcript configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// JSONL file receiving every log line and speech request
    pub path: Option<String>,
}
