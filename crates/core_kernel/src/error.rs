//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Duplicate type declaration: {0}")]
    DuplicateType(String),

    #[error("Generic definition {definition} expects {expected} type argument(s), got {actual}")]
    GenericArity {
        definition: String,
        expected: usize,
        actual: usize,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn unknown_type(name: impl std::fmt::Display) -> Self {
        CoreError::UnknownType(name.to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
