//! Scripted chat: rules, reflections and the response engine.
//!
//! - [`rule::Rule`] — a pattern with its response templates
//! - [`reflection::ReflectionTable`] — pronoun swaps for captured text
//! - [`engine::ResponseEngine`] — first-match scan and substitution

pub mod engine;
pub mod reflection;
pub mod rule;

pub use engine::{NO_MATCH_RESPONSE, ResponseEngine};
pub use reflection::ReflectionTable;
pub use rule::Rule;
