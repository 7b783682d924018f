//! Shared Error Types
//!
//! This module defines error types that are not tied to HTTP. A
//! `ValidationError` describes bad input (registration, profile edits) and is
//! mapped to 400 by `backend::error`.
//!
//! # Usage
//!
//! ```rust
//! use pagegate::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
