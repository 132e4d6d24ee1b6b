//! Speech capture port (startup listen)

use hal_domain::AudioClip;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

#[derive(Error, Debug)]
pub enum ListenError {
    #[error("No audio input device available")]
    NoDevice,

    #[error("Audio input device error: {0}")]
    Device(String),

    #[error("No phrase heard within {0:?}")]
    Timeout(Duration),

    #[error("Listening cancelled")]
    Cancelled,

    #[error("This build has no microphone support (rebuild with the `microphone` feature)")]
    Unsupported,
}

impl ListenError {
    /// Errors that mean the audio source itself is unusable.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            ListenError::NoDevice | ListenError::Device(_) | ListenError::Unsupported
        )
    }
}

/// Blocking capture of a single spoken phrase.
pub trait SpeechInputPort: Send + Sync {
    fn listen(&self, cancel: &CancellationToken) -> Result<AudioClip, ListenError>;
}
