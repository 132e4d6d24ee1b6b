//! Operator commands
//!
//! Commands arrive with the UI marker already stripped. `quit` must match
//! exactly; the other keywords are recognised by prefix and take the rest of
//! the line, trimmed, as their argument. A missing argument is the empty
//! string.

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session
    Quit,
    /// Announce opening something
    Open(String),
    /// Announce closing something
    Close(String),
    /// Move the agent to a new location
    Relocate(String),
    /// Anything else, kept verbatim for the error message
    Unknown(String),
}

impl Command {
    pub const QUIT: &'static str = "quit";
    pub const OPEN: &'static str = "open";
    pub const CLOSE: &'static str = "close";
    pub const RELOCATE: &'static str = "relocate";

    /// Parse raw command text. Never fails: unrecognised text becomes
    /// [`Command::Unknown`].
    pub fn parse(text: &str) -> Self {
        if text == Self::QUIT {
            return Command::Quit;
        }
        if let Some(rest) = text.strip_prefix(Self::OPEN) {
            return Command::Open(argument(rest));
        }
        if let Some(rest) = text.strip_prefix(Self::CLOSE) {
            return Command::Close(argument(rest));
        }
        if let Some(rest) = text.strip_prefix(Self::RELOCATE) {
            return Command::Relocate(argument(rest));
        }
        Command::Unknown(text.to_string())
    }

    /// Keyword used in logs and transcripts.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => Self::QUIT,
            Command::Open(_) => Self::OPEN,
            Command::Close(_) => Self::CLOSE,
            Command::Relocate(_) => Self::RELOCATE,
            Command::Unknown(_) => "unknown",
        }
    }
}

fn argument(rest: &str) -> String {
    rest.trim().to_string()
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Command::parse(text)
    }
}
