/**
 * Authentication Middleware
 *
 * This module guards routes that require a logged-in user. It extracts the
 * bearer token (header first, then cookie), verifies it against the codec and
 * the credential store, and attaches the resulting `Identity` to the request
 * for handlers to pick up with `AuthUser`.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::backend::auth::error::AuthError;
use crate::backend::auth::verifier::{verify_request, Identity};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from `Authorization: Bearer` or the `access-token` cookie
/// 2. Verifies signature, expiry and subject
/// 3. Attaches the `Identity` to request extensions
///
/// Returns 401 Unauthorized (with `WWW-Authenticate: Bearer`) otherwise.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let identity = verify_request(
        &app_state.db_pool,
        &app_state.token_codec,
        request.headers(),
    )
    .await?;

    tracing::debug!("Authenticated request for user: {}", identity.username);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Extractor for the identity attached by `auth_middleware`
///
/// # Example
///
/// ```rust,no_run
/// use pagegate::backend::middleware::AuthUser;
///
/// async fn handler(AuthUser(identity): AuthUser) -> String {
///     format!("Hello {}", identity.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::warn!("Identity not found in request extensions");
            AuthError::unauthenticated("Not authenticated")
        })?;

        Ok(AuthUser(identity))
    }
}
