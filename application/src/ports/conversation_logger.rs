//! Port for structured conversation transcripts.
//!
//! Defines the [`ConversationLogger`] trait for recording what the agent
//! showed and said (log lines, speech requests, commands) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript in a
//! machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event.
///
/// Each event has a type string and a JSON payload with event-specific
/// fields. Timestamps are added by the logger.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "log_line", "speech", "command").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and non-fallible; write failures are ignored so the
/// conversation never stalls on the transcript.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when no transcript is requested.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
