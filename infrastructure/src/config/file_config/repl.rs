//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Prompt shown before input
    pub prompt: String,
    /// Path to history file
    pub history_file: Option<String>,
    /// Enable colored output
    pub color: bool,
    /// Line width used for center/right alignment (terminal width when unset)
    pub width: Option<usize>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_file: None,
            color: true,
            width: None,
        }
    }
}
