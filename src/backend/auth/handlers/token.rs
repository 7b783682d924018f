/**
 * Token Handler
 *
 * This module implements the OAuth2 password-grant endpoint, `POST /token`.
 *
 * # Process
 *
 * 1. Authenticate the posted username and password
 * 2. Issue a token whose subject is the username
 * 3. Return it as `{"access_token": ..., "token_type": "bearer"}`
 *
 * # Security
 *
 * - An unknown username and a wrong password produce the same 401 response;
 *   only the server log tells them apart
 * - Passwords and issued tokens are never logged
 */

use std::sync::Arc;

use axum::{extract::State, response::Json, Form};
use sqlx::SqlitePool;

use crate::backend::auth::authenticator::authenticate;
use crate::backend::auth::handlers::types::{TokenForm, TokenResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// Authenticate the form credentials and issue a token with the default TTL
///
/// Shared by `/token` and `/login`.
pub(crate) async fn token_for_credentials(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    codec: &TokenCodec,
    form: &TokenForm,
) -> Result<String, BackendError> {
    let user = authenticate(pool, hasher, &form.username, &form.password).await?;
    let token = codec.issue(&user.username, None)?;
    tracing::info!("Issued token for user: {}", user.username);
    Ok(token)
}

/// Token handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(hasher)` - Password hasher
/// * `State(codec)` - Token codec
/// * `Form(form)` - `application/x-www-form-urlencoded` credentials
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `500 Internal Server Error` - Store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /token HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// grant_type=password&username=alice&password=secret1
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "token_type": "bearer"
/// }
/// ```
pub async fn issue_token(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(codec): State<Arc<TokenCodec>>,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>, BackendError> {
    tracing::info!("Token request for: {}", form.username);

    let token = token_for_credentials(&pool, &hasher, &codec, &form).await?;
    Ok(Json(TokenResponse::bearer(token)))
}
