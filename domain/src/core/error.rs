//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Rule `{0}` has no response templates")]
    EmptyRule(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl DomainError {
    /// Check if this error was raised while compiling a rule set
    pub fn is_rule_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidPattern { .. } | DomainError::EmptyRule(_)
        )
    }
}
