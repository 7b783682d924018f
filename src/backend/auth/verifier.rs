/**
 * Token Verification
 *
 * Turns a presented bearer token into a verified `Identity`. Extraction looks
 * at the `Authorization` header first and the `access-token` cookie second.
 * A token that decodes is still rejected if its subject has been deleted.
 */

use axum::http::{header::AUTHORIZATION, HeaderMap};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::extract_auth_token;
use crate::backend::auth::error::AuthError;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::get_user_by_username;

/// A token together with where it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerToken {
    Header(String),
    Cookie(String),
}

impl BearerToken {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Header(token) | Self::Cookie(token) => token,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Self::Header(_) => "header",
            Self::Cookie(_) => "cookie",
        }
    }
}

/// The caller behind a verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
}

/// Pull the bearer token out of a request
///
/// An `Authorization` header wins over the cookie. A header that is present
/// but not `Bearer <token>` is rejected outright rather than falling back.
pub fn extract_token(headers: &HeaderMap) -> Result<BearerToken, AuthError> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| AuthError::unauthenticated("Authorization header is not valid text"))?;
        let value = value.trim();
        let (scheme, param) = value
            .split_once(|c: char| c.is_ascii_whitespace())
            .unwrap_or((value, ""));
        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AuthError::unauthenticated("Authorization scheme is not Bearer"));
        }
        let token = param.trim();
        if token.is_empty() {
            return Err(AuthError::unauthenticated("Bearer token is empty"));
        }
        return Ok(BearerToken::Header(token.to_string()));
    }

    extract_auth_token(headers)
        .map(BearerToken::Cookie)
        .ok_or_else(|| AuthError::unauthenticated("Could not find token"))
}

/// Decode `token` and re-resolve its subject against the store
pub async fn verify(
    pool: &SqlitePool,
    codec: &TokenCodec,
    token: &str,
) -> Result<Identity, AuthError> {
    let claims = match codec.decode(token) {
        Ok(claims) => claims,
        Err(e @ (AuthError::InvalidToken(_) | AuthError::MissingSubject)) => {
            tracing::warn!("Rejected token: {}", e);
            return Err(AuthError::unauthenticated("Token is invalid"));
        }
        Err(e) => return Err(e),
    };

    let username = claims
        .subject()
        .ok_or_else(|| AuthError::unauthenticated("Token is invalid"))?;

    let user = get_user_by_username(pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject no longer exists: {}", username);
            AuthError::unauthenticated("Could not find user")
        })?;

    Ok(Identity {
        user_id: user.id,
        username: user.username,
    })
}

/// Extract and verify in one step
pub async fn verify_request(
    pool: &SqlitePool,
    codec: &TokenCodec,
    headers: &HeaderMap,
) -> Result<Identity, AuthError> {
    let token = extract_token(headers)?;
    tracing::debug!("Verifying token from {}", token.source());
    verify(pool, codec, token.as_str()).await
}
