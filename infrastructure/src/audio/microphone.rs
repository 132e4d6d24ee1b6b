//! Default-input-device capture for the startup listen.
//!
//! Capture itself needs the `microphone` feature (cpal). Without it the
//! adapter still exists but reports [`ListenError::Unsupported`].

use hal_application::{ListenError, SpeechInputPort};
use hal_domain::{AudioClip, DetectorStatus, ListenSettings, PhraseDetector};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// [`SpeechInputPort`] reading one phrase from the default microphone.
pub struct Microphone {
    settings: ListenSettings,
    timeout: Duration,
}

impl Microphone {
    pub fn new(settings: ListenSettings, timeout: Duration) -> Self {
        Self { settings, timeout }
    }

    pub fn settings(&self) -> &ListenSettings {
        &self.settings
    }
}

/// Drive `detector` with mono frames from `frames` until a phrase completes.
///
/// Gives up with [`ListenError::Timeout`] when no complete phrase arrives in
/// time and with [`ListenError::Device`] when the sender goes away first.
pub fn collect_phrase(
    frames: &Receiver<Vec<f32>>,
    mut detector: PhraseDetector,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<AudioClip, ListenError> {
    let deadline = Instant::now() + timeout;
    let mut announced = false;

    loop {
        if cancel.is_cancelled() {
            return Err(ListenError::Cancelled);
        }
        if Instant::now() >= deadline {
            return Err(ListenError::Timeout(timeout));
        }

        match frames.recv_timeout(POLL_INTERVAL) {
            Ok(frame) => match detector.push(&frame) {
                DetectorStatus::Complete => return Ok(detector.finish()),
                DetectorStatus::Recording if !announced => {
                    debug!("Speech detected, recording phrase");
                    announced = true;
                }
                _ => {}
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(ListenError::Device("audio stream closed".to_string()));
            }
        }
    }
}

#[cfg(feature = "microphone")]
mod capture {
    use super::*;
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use cpal::{FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};
    use std::sync::mpsc::{self, Sender};
    use tracing::warn;

    fn build_stream<T>(
        device: &cpal::Device,
        config: &StreamConfig,
        tx: Sender<Vec<f32>>,
    ) -> Result<Stream, ListenError>
    where
        T: SizedSample,
        f32: FromSample<T>,
    {
        let channels = config.channels.max(1) as usize;
        device
            .build_input_stream(
                config,
                move |data: &[T], _: &cpal::InputCallbackInfo| {
                    let mono = data
                        .chunks(channels)
                        .map(|frame| {
                            frame.iter().map(|&s| s.to_sample::<f32>()).sum::<f32>()
                                / channels as f32
                        })
                        .collect();
                    let _ = tx.send(mono);
                },
                |e| warn!("Input stream error: {}", e),
                None,
            )
            .map_err(|e| ListenError::Device(format!("Failed to build input stream: {e}")))
    }

    pub(super) fn listen(
        settings: &ListenSettings,
        timeout: Duration,
        cancel: &CancellationToken,
    ) -> Result<AudioClip, ListenError> {
        let host = cpal::default_host();
        let device = host.default_input_device().ok_or(ListenError::NoDevice)?;
        let supported = device
            .default_input_config()
            .map_err(|e| ListenError::Device(format!("Failed to get input config: {e}")))?;

        let sample_rate = supported.sample_rate().0;
        let config: StreamConfig = supported.config();
        let (tx, rx) = mpsc::channel();

        let stream = match supported.sample_format() {
            SampleFormat::F32 => build_stream::<f32>(&device, &config, tx)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config, tx)?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config, tx)?,
            other => {
                return Err(ListenError::Device(format!(
                    "Unsupported input sample format: {other:?}"
                )));
            }
        };
        stream
            .play()
            .map_err(|e| ListenError::Device(format!("Failed to start capture: {e}")))?;

        debug!(
            "Capturing from {} at {} Hz",
            device.name().unwrap_or_else(|_| "unknown device".to_string()),
            sample_rate
        );

        let detector = PhraseDetector::new(settings.clone(), sample_rate);
        collect_phrase(&rx, detector, timeout, cancel)
    }
}

impl SpeechInputPort for Microphone {
    #[cfg(feature = "microphone")]
    fn listen(&self, cancel: &CancellationToken) -> Result<AudioClip, ListenError> {
        info!("Listening on the default microphone");
        capture::listen(&self.settings, self.timeout, cancel)
    }

    #[cfg(not(feature = "microphone"))]
    fn listen(&self, _cancel: &CancellationToken) -> Result<AudioClip, ListenError> {
        info!("Microphone requested but capture support is not compiled in");
        Err(ListenError::Unsupported)
    }
}
