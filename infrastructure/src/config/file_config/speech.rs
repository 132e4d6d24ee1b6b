//! Speech output configuration from TOML (`[speech]` section)

use super::ConfigIssue;
use crate::speech::SpeechCommand;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw speech configuration from TOML
///
/// The speech program is invoked as `<program> <voice_flag> <voice> <text>`,
/// or `<program> <text>` when no voice is set.
///
/// # Example
///
/// ```toml
/// [speech]
/// program = "espeak"
/// voice_flag = "-v"
/// voice = "en-gb"
/// timeout_secs = 20
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    /// Speak replies at all
    pub enabled: bool,
    /// Text-to-speech program
    pub program: String,
    /// Flag that introduces the voice argument
    pub voice_flag: String,
    /// Voice name passed to the program
    pub voice: Option<String>,
    /// Kill the program after this many seconds
    pub timeout_secs: u64,
}

pub const DEFAULT_SPEECH_TIMEOUT_SECS: u64 = 30;

impl Default for FileSpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "say".to_string(),
            voice_flag: "-v".to_string(),
            voice: Some("Victoria".to_string()),
            timeout_secs: DEFAULT_SPEECH_TIMEOUT_SECS,
        }
    }
}

impl FileSpeechConfig {
    /// Timeout with the zero value replaced by the default.
    pub fn timeout(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.timeout_secs == 0 {
            let issue = ConfigIssue::warning(
                "speech.timeout_secs",
                format!(
                    "speech.timeout_secs: must be positive, falling back to {}",
                    DEFAULT_SPEECH_TIMEOUT_SECS
                ),
            );
            (Duration::from_secs(DEFAULT_SPEECH_TIMEOUT_SECS), vec![issue])
        } else {
            (Duration::from_secs(self.timeout_secs), vec![])
        }
    }

    pub fn to_speech_command(&self) -> SpeechCommand {
        SpeechCommand {
            program: self.program.clone(),
            voice_flag: self.voice_flag.clone(),
            voice: self.voice.clone().filter(|v| !v.is_empty()),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.timeout().1;
        if self.enabled && self.program.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "speech.program",
                "speech.program: empty program name, speech will fail",
            ));
        }
        issues
    }
}
