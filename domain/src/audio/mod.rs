//! Audio concepts for the startup listen.

pub mod phrase;

pub use phrase::{AudioClip, DetectorStatus, ListenSettings, PhraseDetector, frame_energy};
