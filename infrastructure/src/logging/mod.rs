//! Logging infrastructure — structured conversation transcripts.
//!
//! Provides [`JsonlTranscriptLogger`], a JSONL file writer that implements
//! the [`ConversationLogger`](hal_application::ConversationLogger) port.

mod transcript;

pub use transcript::JsonlTranscriptLogger;
