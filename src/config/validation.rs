//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject values that would corrupt the one-record-per-line format
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - The level is never validated; any value already maps to a threshold

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("logger name must not be empty")]
    EmptyName,

    #[error("logger name {0:?} contains a tab or line break")]
    NameBreaksLineFormat(String),
}

pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(name) = &config.name {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyName);
        }
        if name.contains(['\t', '\n', '\r']) {
            errors.push(ValidationError::NameBreaksLineFormat(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
