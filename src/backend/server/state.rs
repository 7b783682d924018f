/**
 * Application State Management
 *
 * `AppState` holds everything handlers need: the credential store pool and
 * the auth components built once from `AppConfig`. Nothing in it is mutated
 * after startup, so it is cloned freely into every request.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for exactly the piece they
 * use, e.g. `State<SqlitePool>` or `State<Arc<TokenCodec>>`, instead of the
 * whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::cookies::CookieConfig;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenCodec;
use crate::shared::config::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Credential store pool; each query checks out its own connection
    pub db_pool: SqlitePool,

    /// Token signing/decoding with the configured key material
    pub token_codec: Arc<TokenCodec>,

    /// bcrypt hasher with the configured cost
    pub password_hasher: PasswordHasher,

    /// Attributes of the `access-token` cookie
    pub cookie_config: CookieConfig,
}

impl AppState {
    /// Build the state from configuration and an open pool
    pub fn new(config: &AppConfig, db_pool: SqlitePool) -> Self {
        Self {
            db_pool,
            token_codec: Arc::new(TokenCodec::from_config(config)),
            password_hasher: PasswordHasher::new(config.bcrypt_cost),
            cookie_config: CookieConfig::with_secure(config.cookie_secure),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenCodec> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_codec.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.password_hasher
    }
}

impl FromRef<AppState> for CookieConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookie_config.clone()
    }
}
