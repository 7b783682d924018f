/**
 * Login Handler
 *
 * This module implements browser login for POST /login.
 *
 * # Authentication Process
 *
 * 1. Authenticate the posted form exactly like `/token`
 * 2. Put the token into the HttpOnly `access-token` cookie
 * 3. Redirect (303) to the success page
 *
 * The token is also echoed in an `Authorization: Bearer` response header for
 * scripted clients that follow the redirect themselves.
 */

use std::sync::Arc;

use axum::{
    extract::State,
    http::header::{AUTHORIZATION, SET_COOKIE},
    response::{IntoResponse, Redirect},
    Form,
};
use sqlx::SqlitePool;

use crate::backend::auth::cookies::{create_auth_cookie, CookieConfig};
use crate::backend::auth::handlers::token::token_for_credentials;
use crate::backend::auth::handlers::types::TokenForm;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::BackendError;

/// Where a successful login lands
pub const LOGIN_REDIRECT: &str = "/suc_oauth";

/// Login handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(hasher)` - Password hasher
/// * `State(codec)` - Token codec
/// * `State(cookie_config)` - Attributes for the auth cookie
/// * `Form(form)` - Posted credentials
///
/// # Returns
///
/// `303 See Other` to `/suc_oauth` with the auth cookie set
///
/// # Errors
///
/// * `401 Unauthorized` - Unknown user or wrong password (same body for both)
/// * `500 Internal Server Error` - Store or signing failure
pub async fn login(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    State(codec): State<Arc<TokenCodec>>,
    State(cookie_config): State<CookieConfig>,
    Form(form): Form<TokenForm>,
) -> Result<impl IntoResponse, BackendError> {
    tracing::info!("Login request for: {}", form.username);

    let token = token_for_credentials(&pool, &hasher, &codec, &form).await?;
    let cookie = create_auth_cookie(&token, codec.default_ttl(), &cookie_config);

    Ok((
        [
            (SET_COOKIE, cookie.to_string()),
            (AUTHORIZATION, format!("Bearer {}", token)),
        ],
        Redirect::to(LOGIN_REDIRECT),
    ))
}
