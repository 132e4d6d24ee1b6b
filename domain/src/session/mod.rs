//! Session state and the operator command language.

pub mod command;
pub mod state;

pub use command::Command;
pub use state::{ConversationPhase, DEFAULT_LOCATION, SessionState};
