//! Presentation layer for hal9000
//!
//! This crate contains the CLI definition, the console terminal
//! and the interactive chat session.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::{ChatSession, LineReader, SessionEnd, TerminalEvent, TerminalEvents};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleTerminal;
