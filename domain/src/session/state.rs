//! Conversation state owned by the agent

/// Location reported before any `relocate` command.
pub const DEFAULT_LOCATION: &str = "unknown";

/// Where the conversation is in its (very short) lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationPhase {
    /// No input has been handled yet; the next input triggers the greeting.
    AwaitingFirstInput,
    /// Greeting done. Terminal for the session.
    Conversing,
}

impl ConversationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationPhase::AwaitingFirstInput => "awaiting_first_input",
            ConversationPhase::Conversing => "conversing",
        }
    }
}

impl std::fmt::Display for ConversationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable per-session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    location: String,
    first_time: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::with_location(DEFAULT_LOCATION)
    }

    /// Start the session somewhere other than [`DEFAULT_LOCATION`].
    pub fn with_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            first_time: true,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn relocate(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn is_first_time(&self) -> bool {
        self.first_time
    }

    /// Leave [`ConversationPhase::AwaitingFirstInput`].
    ///
    /// Returns `true` only on the call that performed the transition.
    pub fn finish_greeting(&mut self) -> bool {
        std::mem::replace(&mut self.first_time, false)
    }

    pub fn phase(&self) -> ConversationPhase {
        if self.first_time {
            ConversationPhase::AwaitingFirstInput
        } else {
            ConversationPhase::Conversing
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
