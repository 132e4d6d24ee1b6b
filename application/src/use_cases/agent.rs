//! The HAL agent: event handlers driving the scripted conversation.
//!
//! The agent reacts to two event streams from the terminal:
//!
//! ```text
//! user_input(text)    → greeting | location reply | rule-based reply
//! user_command(text)  → quit | open | close | relocate | unknown
//! ```
//!
//! Every reply is written to the terminal and spoken. Speech failures are
//! logged and otherwise ignored.

use crate::config::AgentConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::speech_output::SpeechOutputPort;
use crate::ports::terminal::TerminalPort;
use hal_domain::{
    Color, Command, LogEntry, ReflectionTable, ResponseEngine, Rule, SessionState,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Shown on the first input of a session.
pub const GREETING: &str = "Hello! This is HAL.";
/// Spoken form of [`GREETING`]; lowercase so engines say the name, not the letters.
pub const GREETING_SPOKEN: &str = "Hello! This is hal.";
/// Exact input that asks for the current location.
pub const LOCATION_QUERY: &str = "Where am I?";
/// Reply to any unrecognised command.
pub const REFUSAL: &str = "I'm afraid I can't do that.";

/// What the host loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSignal {
    Continue,
    Quit,
}

impl AgentSignal {
    pub fn is_quit(&self) -> bool {
        matches!(self, AgentSignal::Quit)
    }
}

pub fn location_reply(location: &str) -> String {
    format!("You are in the {}.", location)
}

/// Scripted chat agent.
pub struct Agent<T: TerminalPort + 'static, S: SpeechOutputPort + 'static> {
    terminal: Arc<T>,
    speech: Arc<S>,
    conversation_logger: Arc<dyn ConversationLogger>,
    engine: ResponseEngine,
    state: SessionState,
}

impl<T: TerminalPort + 'static, S: SpeechOutputPort + 'static> Agent<T, S> {
    /// Create an agent with the HAL rule set.
    pub fn new(terminal: Arc<T>, speech: Arc<S>, config: &AgentConfig) -> Self {
        let rules = Rule::hal_defaults();
        let reflections = ReflectionTable::default();
        let engine = match config.seed {
            Some(seed) => ResponseEngine::with_seed(rules, reflections, seed),
            None => ResponseEngine::new(rules, reflections),
        };

        Self {
            terminal,
            speech,
            conversation_logger: Arc::new(NoConversationLogger),
            engine,
            state: SessionState::with_location(config.initial_location.clone()),
        }
    }

    /// Replace the response engine (custom rules, fixed seed).
    pub fn with_engine(mut self, engine: ResponseEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Record the conversation through `logger`.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle free text typed by the operator.
    pub fn on_input(&mut self, text: &str) {
        debug!(phase = %self.state.phase(), "Input received: {}", text);
        self.record("input", json!({ "text": text, "phase": self.state.phase().as_str() }));

        if self.state.finish_greeting() {
            // The first input only ever gets the greeting.
            self.log(LogEntry::right(GREETING, Color::AGENT));
            self.speak(GREETING_SPOKEN);
        } else if text == LOCATION_QUERY {
            let reply = location_reply(self.state.location());
            self.log(LogEntry::left(reply.clone(), Color::REPLY));
            self.speak(&reply);
        } else {
            let reply = self.engine.respond(text);
            self.log(LogEntry::left(reply.clone(), Color::REPLY));
            self.speak(&reply);
        }
    }

    /// Handle an operator command (marker already stripped).
    pub fn on_command(&mut self, text: &str) -> AgentSignal {
        let command = Command::parse(text);
        debug!("Command received: {} -> {:?}", text, command);
        self.record("command", json!({ "text": text, "command": command.name() }));

        match command {
            Command::Quit => {
                info!("Quit requested");
                return AgentSignal::Quit;
            }
            Command::Open(target) => {
                self.divider(format!("\u{2014} Opening {}. \u{2014}", target));
            }
            Command::Close(target) => {
                self.divider(format!("\u{2014} Closing {}. \u{2014}", target));
            }
            Command::Relocate(target) => {
                self.divider(format!("\u{2014} Now in the {}. \u{2014}", target));
                info!("Relocated from '{}' to '{}'", self.state.location(), target);
                self.state.relocate(target);
            }
            Command::Unknown(raw) => {
                self.log(LogEntry::left(
                    format!("Command `{}` unknown.", raw),
                    Color::REPLY,
                ));
                self.log(LogEntry::right(REFUSAL, Color::AGENT));
                self.speak(REFUSAL);
            }
        }

        AgentSignal::Continue
    }

    /// Periodic tick from the host timer. Reserved; does nothing yet.
    pub fn update(&self, tick: Instant) {
        trace!(?tick, "Agent tick");
    }

    /// Speak `text`, blocking until the speech program finishes.
    pub fn speak(&self, text: &str) {
        let result = self.speech.speak(text);
        if let Err(e) = &result {
            // Already reported once at startup; the transcript keeps the detail.
            debug!("Speech failed: {}", e);
        }
        self.record(
            "speech",
            json!({
                "text": text,
                "ok": result.is_ok(),
                "error": result.err().map(|e| e.to_string()),
            }),
        );
    }

    fn divider(&self, text: String) {
        self.log(LogEntry::spacer());
        self.log(LogEntry::center(text, Color::DIVIDER));
    }

    fn log(&self, entry: LogEntry) {
        self.record(
            "log_line",
            json!({
                "text": entry.text,
                "align": entry.align,
                "color": entry.color,
            }),
        );
        self.terminal.log(entry);
    }

    fn record(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }
}
