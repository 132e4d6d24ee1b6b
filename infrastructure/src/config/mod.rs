//! Configuration file loading for hal9000
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./hal.toml` or `./.hal.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/hal9000/config.toml`
//! 4. Default values
//!
//! Command-line flags are applied on top of the merged result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileAgentConfig, FileConfig, FileListenConfig, FileReplConfig,
    FileSessionConfig, FileSpeechConfig, FileTranscriptConfig,
};
pub use loader::ConfigLoader;
