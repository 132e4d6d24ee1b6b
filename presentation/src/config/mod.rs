//! Presentation-level configuration
//!
//! Settings for the line editor, resolved by the binary
//! from the file configuration and command-line flags.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Line editor prompt
    pub prompt: String,
    /// Where line history is persisted; `None` keeps it in memory only
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_file: None,
        }
    }
}
