/**
 * Server Configuration
 *
 * Loads the process-wide `AppConfig` and opens the credential store.
 *
 * # Configuration Sources
 *
 * 1. `.env` in the working directory (via `dotenv`), if present
 * 2. the TOML file named by `PAGEGATE_CONFIG`, if set
 * 3. process environment variables
 *
 * A missing `SECRET_KEY` is fatal: the server refuses to start rather than
 * sign tokens with a guessable key.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::shared::config::{AppConfig, ConfigError};

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_VAR: &str = "PAGEGATE_CONFIG";

/// Load configuration from `.env`, the optional config file and the environment
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenv::dotenv().ok();

    let mut builder = AppConfig::builder();
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        tracing::info!("Reading configuration file {}", path);
        let contents = std::fs::read_to_string(&path)?;
        builder = builder.apply_toml(&contents)?;
    }

    let config = builder
        .apply_env(|key| std::env::var(key).ok())?
        .build()?;

    tracing::info!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Open the SQLite pool and run migrations
///
/// In-memory databases exist per connection, so they get a single
/// connection that is never recycled.
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
