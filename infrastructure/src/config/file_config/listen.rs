//! Startup listen configuration from TOML (`[listen]` section)

use super::ConfigIssue;
use hal_domain::ListenSettings;
use hal_domain::audio::phrase::DEFAULT_ENERGY_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw listen configuration from TOML
///
/// # Example
///
/// ```toml
/// [listen]
/// enabled = true
/// energy_threshold = 2500.0     # 1000–4000 depending on room noise
/// pause_ms = 800
/// timeout_secs = 15
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileListenConfig {
    /// Listen for one phrase before the chat starts
    pub enabled: bool,
    /// Energy threshold on the 16-bit sample scale
    pub energy_threshold: f32,
    /// Quiet time that ends a phrase, in milliseconds
    pub pause_ms: u64,
    /// Give up waiting for a phrase after this many seconds
    pub timeout_secs: u64,
    /// Cut a phrase off after this many seconds
    pub max_phrase_secs: Option<u64>,
}

impl Default for FileListenConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            energy_threshold: DEFAULT_ENERGY_THRESHOLD,
            pause_ms: 800,
            timeout_secs: 30,
            max_phrase_secs: None,
        }
    }
}

impl FileListenConfig {
    /// Detector settings, replacing a non-positive threshold with the default.
    pub fn to_listen_settings(&self) -> (ListenSettings, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let energy_threshold = if self.energy_threshold > 0.0 {
            self.energy_threshold
        } else {
            issues.push(ConfigIssue::warning(
                "listen.energy_threshold",
                format!(
                    "listen.energy_threshold: must be positive, falling back to {}",
                    DEFAULT_ENERGY_THRESHOLD
                ),
            ));
            DEFAULT_ENERGY_THRESHOLD
        };

        let settings = ListenSettings {
            energy_threshold,
            pause: Duration::from_millis(self.pause_ms),
            max_phrase: self.max_phrase_secs.map(Duration::from_secs),
        };
        (settings, issues)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
