/**
 * Page Routes
 *
 * The HTML pages. `/bonus` is the only guarded page; a browser that logged in
 * through `/login` reaches it with the `access-token` cookie.
 */

use axum::{middleware, routing::get, Router};

use crate::backend::middleware::auth_middleware;
use crate::backend::pages;
use crate::backend::server::state::AppState;

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/bonus", get(pages::bonus))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/", get(pages::index))
        .route("/login", get(pages::login_form))
        .route("/suc_oauth", get(pages::login_success))
        .merge(protected)
}
