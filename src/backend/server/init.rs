/**
 * Server Initialization
 *
 * Opens the credential store, builds `AppState` and assembles the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Build the auth components from configuration
 * 3. Create the router with all routes and middleware
 *
 * Unlike configuration, a database that cannot be opened is fatal: every
 * route except the static pages depends on it.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing pagegate server");

    let db_pool = load_database(&config.database_url).await?;
    Ok(create_app_with_pool(config, db_pool))
}

/// Create the application around an already-open pool
pub fn create_app_with_pool(config: &AppConfig, db_pool: SqlitePool) -> Router<()> {
    let app_state = AppState::new(config, db_pool);
    let app = create_router(app_state, &config.static_dir);

    tracing::info!(
        "Router configured (token ttl {} min, secure cookie {})",
        config.access_token_expire_minutes,
        config.cookie_secure
    );

    app
}
