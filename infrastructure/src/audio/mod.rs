//! Audio capture adapters

mod microphone;

pub use microphone::{Microphone, collect_phrase};
