//! One-shot listen performed when the session starts.
//!
//! The captured phrase is not fed into the conversation; it is reported and
//! dropped. A missing or broken audio source is fatal for the session when
//! listening was requested.

use crate::ports::speech_input::{ListenError, SpeechInputPort};
use hal_domain::AudioClip;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct StartupListenUseCase<I: SpeechInputPort + 'static> {
    input: Arc<I>,
}

impl<I: SpeechInputPort + 'static> StartupListenUseCase<I> {
    pub fn new(input: Arc<I>) -> Self {
        Self { input }
    }

    /// Listen for a single phrase.
    ///
    /// Returns `Ok(None)` when nothing was captured for a non-fatal reason
    /// (timeout, cancellation), and `Err` when the audio source is unusable.
    pub fn execute(&self, cancel: &CancellationToken) -> Result<Option<AudioClip>, ListenError> {
        info!("Listening for a phrase");
        match self.input.listen(cancel) {
            Ok(clip) => {
                info!(
                    samples = clip.samples.len(),
                    sample_rate = clip.sample_rate,
                    "Captured {:.2}s of audio",
                    clip.duration().as_secs_f64()
                );
                Ok(Some(clip))
            }
            Err(e) if e.is_source_unavailable() => Err(e),
            Err(e) => {
                warn!("Startup listen ended without a phrase: {}", e);
                Ok(None)
            }
        }
    }
}
