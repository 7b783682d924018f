//! Application test fixture
//!
//! Each `TestApp` owns a private in-memory SQLite database with migrations
//! applied, so tests never share users.

use axum_test::TestServer;
use sqlx::SqlitePool;
use pagegate::backend::auth::sessions::TokenCodec;
use pagegate::backend::server::config::load_database;
use pagegate::backend::server::create_app_with_pool;
use pagegate::shared::config::AppConfig;

/// Signing secret for tests; production secrets come from the environment
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a configuration suitable for tests (fast bcrypt, in-memory store)
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .secret_key(TEST_SECRET.to_string())
        .bcrypt_cost(4)
        .database_url("sqlite::memory:".to_string())
        .build()
        .expect("test configuration is valid")
}

/// Test application fixture
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new fixture with the default test configuration
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a new fixture around `config`
    pub async fn with_config(config: AppConfig) -> Self {
        let pool = load_database(&config.database_url)
            .await
            .expect("Failed to open test database");
        let app = create_app_with_pool(&config, pool.clone());
        let server = TestServer::new(app).expect("Failed to start test server");
        Self {
            server,
            pool,
            config,
        }
    }

    /// A codec with the same keys the app uses
    pub fn codec(&self) -> TokenCodec {
        TokenCodec::from_config(&self.config)
    }
}
