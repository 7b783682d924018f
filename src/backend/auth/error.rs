/**
 * Authentication Errors
 *
 * Failure kinds produced by the auth core. They stay distinct all the way to
 * the HTTP boundary, where `BackendError` decides the status code.
 */

use thiserror::Error;

/// Authentication and token failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with the given username
    #[error("user not found")]
    NotFound,

    /// Password does not match the stored hash
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bad signature, malformed structure, or expired token
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token decoded but carries no subject
    #[error("token has no subject")]
    MissingSubject,

    /// No usable token presented, or its subject no longer exists
    #[error("not authenticated: {0}")]
    Unauthenticated(String),

    /// Credential store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failed to produce a hash
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Token could not be signed
    #[error("token issue failed: {0}")]
    TokenIssue(String),
}

impl AuthError {
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        Self::Unauthenticated(reason.into())
    }

    /// True for failures caused by the caller rather than the server
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Self::Database(_) | Self::Hashing(_) | Self::TokenIssue(_)
        )
    }
}
