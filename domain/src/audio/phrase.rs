//! Energy-based phrase detection for the startup listen
//!
//! Audio frames are fed in as mono `f32` samples in `[-1.0, 1.0]`. The
//! detector waits for a frame whose RMS energy (on the 16-bit scale) crosses
//! the threshold, records from there, and completes once the speaker has been
//! quiet for the configured pause or the phrase hits its length limit.

use std::time::Duration;

/// Energy threshold on the 16-bit sample scale. Typical rooms need 1000–4000.
pub const DEFAULT_ENERGY_THRESHOLD: f32 = 1000.0;

/// Seconds of quiet that end a phrase.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq)]
pub struct ListenSettings {
    pub energy_threshold: f32,
    pub pause: Duration,
    /// Hard cap on phrase length; `None` records until a pause.
    pub max_phrase: Option<Duration>,
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            energy_threshold: DEFAULT_ENERGY_THRESHOLD,
            pause: DEFAULT_PAUSE,
            max_phrase: None,
        }
    }
}

/// A captured mono phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / self.sample_rate as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Where the detector is after the latest frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorStatus {
    /// Still waiting for speech
    Waiting,
    /// Speech started; recording
    Recording,
    /// Phrase finished; call [`PhraseDetector::finish`]
    Complete,
}

/// Root-mean-square energy of a frame on the 16-bit sample scale.
pub fn frame_energy(frame: &[f32]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }
    let sum: f32 = frame.iter().map(|s| s * s).sum();
    (sum / frame.len() as f32).sqrt() * i16::MAX as f32
}

#[derive(Debug)]
pub struct PhraseDetector {
    settings: ListenSettings,
    sample_rate: u32,
    samples: Vec<f32>,
    silent_samples: usize,
    status: DetectorStatus,
}

impl PhraseDetector {
    pub fn new(settings: ListenSettings, sample_rate: u32) -> Self {
        Self {
            settings,
            sample_rate,
            samples: Vec::new(),
            silent_samples: 0,
            status: DetectorStatus::Waiting,
        }
    }

    pub fn status(&self) -> DetectorStatus {
        self.status
    }

    fn samples_for(&self, duration: Duration) -> usize {
        (duration.as_nanos() * self.sample_rate as u128).div_ceil(1_000_000_000) as usize
    }

    /// Feed one frame and report the resulting status.
    pub fn push(&mut self, frame: &[f32]) -> DetectorStatus {
        if self.status == DetectorStatus::Complete {
            return self.status;
        }

        let loud = frame_energy(frame) > self.settings.energy_threshold;

        match self.status {
            DetectorStatus::Waiting if !loud => return self.status,
            DetectorStatus::Waiting => self.status = DetectorStatus::Recording,
            _ => {}
        }

        self.samples.extend_from_slice(frame);
        if loud {
            self.silent_samples = 0;
        } else {
            self.silent_samples += frame.len();
        }

        let paused = self.silent_samples >= self.samples_for(self.settings.pause);
        let too_long = self
            .settings
            .max_phrase
            .is_some_and(|limit| self.samples.len() >= self.samples_for(limit));
        if paused || too_long {
            self.status = DetectorStatus::Complete;
        }

        self.status
    }

    /// Consume the detector, returning whatever was recorded.
    pub fn finish(self) -> AudioClip {
        AudioClip {
            samples: self.samples,
            sample_rate: self.sample_rate,
        }
    }
}
