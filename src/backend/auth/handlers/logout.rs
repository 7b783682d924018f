/**
 * Logout Handler
 *
 * POST /logout overwrites the `access-token` cookie with an empty, already
 * expired one and redirects to the index page. Tokens are stateless, so a
 * copy of the token held elsewhere stays valid until it expires.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
};

use crate::backend::auth::cookies::{create_logout_cookie, CookieConfig};

/// Logout handler
pub async fn logout(State(cookie_config): State<CookieConfig>) -> impl IntoResponse {
    tracing::debug!("Clearing auth cookie");
    let cookie = create_logout_cookie(&cookie_config);
    ([(SET_COOKIE, cookie.to_string())], Redirect::to("/"))
}
