//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application and domain
//! types, reporting any values that had to be replaced.

mod agent;
mod listen;
mod repl;
mod session;
mod speech;

pub use agent::FileAgentConfig;
pub use listen::FileListenConfig;
pub use repl::FileReplConfig;
pub use session::{FileSessionConfig, FileTranscriptConfig};
pub use speech::FileSpeechConfig;

use serde::{Deserialize, Serialize};

/// A configuration value that was rejected and replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field (e.g. `session.tick_interval_ms`)
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent settings
    pub agent: FileAgentConfig,
    /// Speech output settings
    pub speech: FileSpeechConfig,
    /// Startup listen settings
    pub listen: FileListenConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Session loop settings
    pub session: FileSessionConfig,
    /// Transcript settings
    pub transcript: FileTranscriptConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.speech.validate());
        issues.extend(self.listen.to_listen_settings().1);
        issues.extend(self.session.tick_interval().1);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[agent]
initial_location = "pod bay"
seed = 2001

[speech]
program = "espeak"
voice = "en-gb"
timeout_secs = 10

[listen]
enabled = true
energy_threshold = 2500.0

[repl]
prompt = "dave> "
color = false

[session]
tick_interval_ms = 500

[transcript]
path = "hal.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.initial_location, "pod bay");
        assert_eq!(config.agent.seed, Some(2001));
        assert_eq!(config.speech.program, "espeak");
        assert_eq!(config.speech.voice_flag, "-v");
        assert!(config.listen.enabled);
        assert_eq!(config.listen.pause_ms, 800);
        assert_eq!(config.repl.prompt, "dave> ");
        assert!(!config.repl.color);
        assert_eq!(config.session.tick_interval_ms, 500);
        assert_eq!(config.transcript.path.as_deref(), Some("hal.jsonl"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[speech]
timeout_secs = 0

[session]
tick_interval_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let fields: Vec<String> = config.validate().into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["speech.timeout_secs", "session.tick_interval_ms"]);
    }
}
