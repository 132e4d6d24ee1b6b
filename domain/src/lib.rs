//! Domain layer for hal9000
//!
//! This crate contains the scripted conversation logic: rules, reflections,
//! the response engine, session state and the command language.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Rules
//!
//! A [`Rule`] is a case-insensitive pattern anchored at the start of the
//! input, plus response templates with `%N` capture placeholders. The
//! [`ResponseEngine`] tries rules in order and the first match wins; the
//! default set ends with an empty catch-all pattern.
//!
//! ## Session
//!
//! [`SessionState`] holds the agent's location and whether the greeting has
//! been given. Operator [`Command`]s are parsed from raw command text.

pub mod audio;
pub mod chat;
pub mod core;
pub mod display;
pub mod session;

// Re-export commonly used types
pub use audio::{AudioClip, DetectorStatus, ListenSettings, PhraseDetector};
pub use chat::{NO_MATCH_RESPONSE, ReflectionTable, ResponseEngine, Rule};
pub use core::error::DomainError;
pub use display::{Align, Color, LogEntry};
pub use session::{Command, ConversationPhase, DEFAULT_LOCATION, SessionState};
