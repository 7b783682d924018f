/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and the
 * guard. Each variant knows its status code and the message that is safe to
 * show a client.
 *
 * # Status Code Mapping
 *
 * - Unknown user and wrong password both map to 401 with one shared message,
 *   so the login endpoints cannot be used to learn which usernames exist.
 * - Token failures map to 401.
 * - Validation failures map to 400, handler errors carry their own status.
 * - Store, hashing and signing failures map to 500 and never
 *   expose their details.
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::auth::error::AuthError;
use crate::shared::SharedError;

/// Message shared by both credential failures
pub const BAD_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status (e.g. conflict, not found)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication or token failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Input validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error outside the auth core
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) if err.is_rejection() => StatusCode::UNAUTHORIZED,
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(AuthError::NotFound | AuthError::InvalidCredentials) => {
                BAD_CREDENTIALS_MESSAGE.to_string()
            }
            Self::Auth(AuthError::InvalidToken(_) | AuthError::MissingSubject) => {
                "Token is invalid".to_string()
            }
            Self::Auth(AuthError::Unauthenticated(reason)) => reason.clone(),
            Self::SharedError(err) => err.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
