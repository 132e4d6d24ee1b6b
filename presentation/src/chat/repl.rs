//! Line reader feeding terminal events to the chat session
//!
//! `rustyline` blocks, so it runs on its own thread and forwards what the
//! operator types over a channel. After each forwarded line it waits until
//! the session has handled it, so replies are printed before the next prompt.

use crate::config::ReplConfig;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What the operator did at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Free text
    Input(String),
    /// A `/`-prefixed line, marker stripped
    Command(String),
    /// Ctrl-C at the prompt
    Interrupted,
    /// End of input (Ctrl-D) or a broken terminal
    Closed,
}

impl TerminalEvent {
    /// Classify a typed line. Blank lines produce no event.
    ///
    /// Free text is forwarded exactly as typed; only command text is trimmed.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(match trimmed.strip_prefix('/') {
            Some(command) => TerminalEvent::Command(command.trim_start().to_string()),
            None => TerminalEvent::Input(line.to_string()),
        })
    }
}

/// Receiving end of the terminal event stream.
pub struct TerminalEvents {
    rx: mpsc::UnboundedReceiver<TerminalEvent>,
    handled: Option<std_mpsc::Sender<()>>,
}

impl TerminalEvents {
    /// An event stream fed by hand, without a line editor behind it.
    pub fn channel() -> (mpsc::UnboundedSender<TerminalEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx, handled: None })
    }

    pub async fn recv(&mut self) -> Option<TerminalEvent> {
        self.rx.recv().await
    }

    /// Tell the reader the last event has been dealt with.
    pub fn handled(&self) {
        if let Some(handled) = &self.handled {
            let _ = handled.send(());
        }
    }
}

/// Blocking `rustyline` prompt loop.
pub struct LineReader {
    prompt: String,
    history_file: Option<PathBuf>,
}

impl LineReader {
    pub fn new(config: &ReplConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            history_file: config.history_file.clone(),
        }
    }

    /// Start the reader thread.
    pub fn spawn(self) -> std::io::Result<TerminalEvents> {
        let (tx, rx) = mpsc::unbounded_channel();
        let (handled_tx, handled_rx) = std_mpsc::channel();

        std::thread::Builder::new()
            .name("hal-readline".to_string())
            .spawn(move || self.run(tx, handled_rx))?;

        Ok(TerminalEvents {
            rx,
            handled: Some(handled_tx),
        })
    }

    fn run(self, tx: mpsc::UnboundedSender<TerminalEvent>, handled: std_mpsc::Receiver<()>) {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                warn!("Could not start the line editor: {}", e);
                let _ = tx.send(TerminalEvent::Closed);
                return;
            }
        };

        if let Some(path) = &self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        loop {
            let event = match rl.readline(&self.prompt) {
                Ok(line) => {
                    let Some(event) = TerminalEvent::from_line(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());
                    if let Some(path) = &self.history_file
                        && let Err(e) = rl.save_history(path)
                    {
                        debug!("Could not save history to {}: {}", path.display(), e);
                    }
                    event
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    TerminalEvent::Interrupted
                }
                Err(ReadlineError::Eof) => TerminalEvent::Closed,
                Err(err) => {
                    warn!("Line editor error: {:?}", err);
                    TerminalEvent::Closed
                }
            };

            let closed = event == TerminalEvent::Closed;
            if tx.send(event).is_err() || closed {
                break;
            }
            if handled.recv().is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(TerminalEvent::from_line(""), None);
        assert_eq!(TerminalEvent::from_line("   \t"), None);
    }

    #[test]
    fn test_free_text_is_forwarded_verbatim() {
        assert_eq!(
            TerminalEvent::from_line("Where am I? "),
            Some(TerminalEvent::Input("Where am I? ".to_string()))
        );
        assert_eq!(
            TerminalEvent::from_line("Where am I?"),
            Some(TerminalEvent::Input("Where am I?".to_string()))
        );
    }

    #[test]
    fn test_slash_marks_a_command() {
        assert_eq!(
            TerminalEvent::from_line("/open the pod bay doors"),
            Some(TerminalEvent::Command("open the pod bay doors".to_string()))
        );
        assert_eq!(
            TerminalEvent::from_line("/ quit"),
            Some(TerminalEvent::Command("quit".to_string()))
        );
        assert_eq!(
            TerminalEvent::from_line("/"),
            Some(TerminalEvent::Command(String::new()))
        );
    }

    #[tokio::test]
    async fn test_manual_channel_delivers_in_order() {
        let (tx, mut events) = TerminalEvents::channel();
        tx.send(TerminalEvent::Input("hi".to_string())).unwrap();
        tx.send(TerminalEvent::Closed).unwrap();
        drop(tx);

        assert_eq!(
            events.recv().await,
            Some(TerminalEvent::Input("hi".to_string()))
        );
        events.handled();
        assert_eq!(events.recv().await, Some(TerminalEvent::Closed));
        assert_eq!(events.recv().await, None);
    }
}
