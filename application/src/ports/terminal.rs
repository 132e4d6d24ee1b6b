//! Terminal port
//!
//! The chat window the agent writes to. Implementations decide how alignment
//! and color are rendered.

use hal_domain::LogEntry;

/// Output side of the chat window.
pub trait TerminalPort: Send + Sync {
    /// Append a line. Lines are never modified once logged.
    fn log(&self, entry: LogEntry);
}

