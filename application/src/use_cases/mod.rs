//! Use cases (application services)
//!
//! - [`agent::Agent`] — the scripted conversation and command handling
//! - [`startup_listen::StartupListenUseCase`] — the one-shot listen at startup

pub mod agent;
pub mod startup_listen;
