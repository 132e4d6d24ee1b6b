//! What the chat window shows.

pub mod log_entry;

pub use log_entry::{Align, Color, LogEntry};
