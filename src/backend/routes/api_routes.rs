/**
 * API Route Handlers
 *
 * This module wires the authentication handlers into the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /token` - Token for API clients
 * - `POST /login` - Token in a cookie, then redirect
 * - `POST /logout` - Clear the cookie
 * - `POST /reg` - User registration
 *
 * ## Guarded
 * - `GET /users/me` - Current user
 * - `PATCH /users/me` - Update profile fields
 * - `DELETE /users/me` - Delete the account
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{
    delete_me, get_me, issue_token, login, logout, register, update_me,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth guard
///
/// # Authentication
///
/// `/users/me` sits behind `auth_middleware`; a request without a valid token
/// never reaches the handlers. The guard is a `route_layer`, so unknown
/// methods on the path still get 405 rather than 401.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/me", get(get_me).patch(update_me).delete(delete_me))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/token", post(issue_token))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/reg", post(register))
        .merge(protected)
}
