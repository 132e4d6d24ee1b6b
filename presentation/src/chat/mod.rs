//! Interactive chat module
//!
//! A readline-based prompt feeding a serial event loop that drives the agent.

mod repl;
mod session;

pub use repl::{LineReader, TerminalEvent, TerminalEvents};
pub use session::{AGENT_JOINED, ChatSession, OPERATOR_JOINED, SessionEnd};
