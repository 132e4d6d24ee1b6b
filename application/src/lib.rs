//! Application layer for hal9000
//!
//! This crate contains the agent use case, port definitions, and application
//! configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AgentConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    speech_input::{ListenError, SpeechInputPort},
    speech_output::{SilentSpeech, SpeechError, SpeechOutputPort},
    terminal::TerminalPort,
};
pub use use_cases::agent::{
    Agent, AgentSignal, GREETING, GREETING_SPOKEN, LOCATION_QUERY, REFUSAL, location_reply,
};
pub use use_cases::startup_listen::StartupListenUseCase;
