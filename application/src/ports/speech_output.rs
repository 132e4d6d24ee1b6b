//! Text-to-speech port

use std::time::Duration;
use thiserror::Error;

/// Why a speech request did not complete.
///
/// The agent treats every variant as non-fatal.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Failed to start speech program `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Speech did not finish within {0:?}")]
    Timeout(Duration),

    #[error("Speech cancelled")]
    Cancelled,

    #[error("Failed to wait for speech program: {0}")]
    Wait(#[source] std::io::Error),
}

/// Synchronous text-to-speech.
///
/// `speak` blocks until the utterance finishes, fails, times out or is
/// cancelled.
pub trait SpeechOutputPort: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Speech output that stays silent (`--mute`, tests).
pub struct SilentSpeech;

impl SpeechOutputPort for SilentSpeech {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}
