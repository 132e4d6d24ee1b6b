//! Infrastructure layer for hal9000
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: speech output through an external program,
//! microphone capture, JSONL transcripts and configuration file loading.

pub mod audio;
pub mod config;
pub mod logging;
pub mod speech;

// Re-export commonly used types
pub use audio::Microphone;
pub use config::{
    ConfigIssue, ConfigLoader, FileAgentConfig, FileConfig, FileListenConfig, FileReplConfig,
    FileSessionConfig, FileSpeechConfig, FileTranscriptConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use speech::{ProcessSpeechOutput, SpeechCommand};
