//! The chat session: terminal events and a periodic tick driving the agent

use super::repl::{LineReader, TerminalEvent, TerminalEvents};
use crate::config::ReplConfig;
use hal_application::{Agent, SpeechOutputPort, TerminalPort};
use hal_domain::{Color, LogEntry};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Shown before anything else, on the operator's side.
pub const OPERATOR_JOINED: &str = "Operator started the chat.";
/// Shown before anything else, on HAL's side.
pub const AGENT_JOINED: &str = "HAL9000 joined.";

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator issued `quit`
    Quit,
    /// End of input
    Closed,
    /// The cancellation token fired
    Cancelled,
}

/// Serial dispatcher between the terminal and the agent.
pub struct ChatSession<T: TerminalPort + 'static, S: SpeechOutputPort + 'static> {
    agent: Agent<T, S>,
    terminal: Arc<T>,
    tick_interval: Duration,
    cancel: CancellationToken,
}

impl<T: TerminalPort + 'static, S: SpeechOutputPort + 'static> ChatSession<T, S> {
    pub fn new(agent: Agent<T, S>, terminal: Arc<T>, tick_interval: Duration) -> Self {
        Self {
            agent,
            terminal,
            tick_interval,
            cancel: CancellationToken::new(),
        }
    }

    /// Share a cancellation token with the adapters. Quitting cancels it.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn agent(&self) -> &Agent<T, S> {
        &self.agent
    }

    /// Log the two join lines that open every session.
    pub fn announce(&self) {
        self.terminal.log(LogEntry::left(OPERATOR_JOINED, Color::SYSTEM));
        self.terminal.log(LogEntry::right(AGENT_JOINED, Color::SYSTEM));
    }

    /// Run with an interactive line editor until quit or end of input.
    pub async fn run_interactive(&mut self, config: &ReplConfig) -> std::io::Result<SessionEnd> {
        let events = LineReader::new(config).spawn()?;
        Ok(self.run(events).await)
    }

    /// Dispatch events until the session ends.
    pub async fn run(&mut self, mut events: TerminalEvents) -> SessionEnd {
        let start = time::Instant::now() + self.tick_interval;
        let mut ticker = time::interval_at(start, self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Chat session started");
        let end = loop {
            tokio::select! {
                biased;

                _ = self.cancel.cancelled() => break SessionEnd::Cancelled,

                event = events.recv() => {
                    let Some(event) = event else {
                        break SessionEnd::Closed;
                    };
                    if let Some(end) = self.dispatch(event) {
                        break end;
                    }
                    events.handled();
                }

                tick = ticker.tick() => self.agent.update(tick.into_std()),
            }
        };

        if end == SessionEnd::Quit {
            self.cancel.cancel();
        }
        info!(?end, "Chat session ended");
        end
    }

    fn dispatch(&mut self, event: TerminalEvent) -> Option<SessionEnd> {
        match event {
            TerminalEvent::Input(text) => self.agent.on_input(&text),
            TerminalEvent::Command(text) => {
                if self.agent.on_command(&text).is_quit() {
                    return Some(SessionEnd::Quit);
                }
            }
            TerminalEvent::Interrupted => debug!("Interrupted at the prompt"),
            TerminalEvent::Closed => return Some(SessionEnd::Closed),
        }
        None
    }
}
