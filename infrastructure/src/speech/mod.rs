//! Speech output adapters

mod process;

pub use process::{ProcessSpeechOutput, SpeechCommand};
