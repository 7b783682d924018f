/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Page routes (`/`, `GET /login`, `/suc_oauth`, `/bonus`)
 * 2. API routes (`/token`, `POST /login`, `/logout`, `/reg`, `/users/me`)
 * 3. Static files under `/static`
 * 4. Fallback handler (404)
 *
 * `GET /login` and `POST /login` share a path; axum merges the two method
 * routers because they are added to the same router.
 */

use axum::{http::StatusCode, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (pool, token codec, hasher, cookie settings)
/// * `static_dir` - Directory served under `/static`
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, static_dir: &str) -> Router<()> {
    let router = Router::new();

    let router = configure_page_routes(router, &app_state);
    let router = configure_api_routes(router, &app_state);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new(static_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "Not found")
    });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
