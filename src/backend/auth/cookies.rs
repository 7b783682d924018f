// Cookie handling for the HttpOnly access-token cookie
//
// Browsers receive the token through `POST /login` and send it back on every
// request; `POST /logout` overwrites it with an expired, empty cookie.

use axum::http::{header::COOKIE, HeaderMap};
use cookie::time::{Duration as CookieDuration, OffsetDateTime};
use cookie::{Cookie, SameSite};

/// Cookie name for the access token
pub const AUTH_COOKIE_NAME: &str = "access-token";

/// Configuration for the auth cookie
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Whether to set the Secure flag (disable only for plain-HTTP development)
    pub secure: bool,
    /// Cookie path (default: "/")
    pub path: String,
    /// SameSite policy; Lax so the cookie survives the post-login redirect
    pub same_site: SameSite,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            path: "/".to_string(),
            same_site: SameSite::Lax,
        }
    }
}

impl CookieConfig {
    pub fn with_secure(secure: bool) -> Self {
        Self {
            secure,
            ..Default::default()
        }
    }
}

/// Create the HttpOnly cookie carrying `token`, living as long as the token
pub fn create_auth_cookie(
    token: &str,
    expires_in: chrono::Duration,
    config: &CookieConfig,
) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, token.to_string()))
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .max_age(CookieDuration::seconds(expires_in.num_seconds()))
        .build()
}

/// Create a cookie that clears the auth cookie in the browser
pub fn create_logout_cookie(config: &CookieConfig) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE_NAME, ""))
        .path(config.path.clone())
        .http_only(true)
        .secure(config.secure)
        .same_site(config.same_site)
        .max_age(CookieDuration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Extract the access token from the request's `Cookie` headers
///
/// Returns `None` when the cookie is absent or empty.
pub fn extract_auth_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == AUTH_COOKIE_NAME && !c.value().is_empty())
        .map(|c| c.value().to_string())
}
