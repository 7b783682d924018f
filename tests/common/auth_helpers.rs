//! Authentication test helpers
//!
//! Provides utilities for creating test users, obtaining tokens,
//! and building credential headers.

use axum::http::HeaderValue;
use axum_test::TestServer;
use sqlx::SqlitePool;
use uuid::Uuid;
use pagegate::backend::auth::handlers::TokenResponse;
use pagegate::backend::auth::password::PasswordHasher;
use pagegate::backend::auth::users::{create_user, Profile, User};

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> User {
    let hashed = PasswordHasher::new(4)
        .hash(password)
        .expect("Failed to hash test password");
    create_user(pool, username, &hashed, &Profile::default())
        .await
        .expect("Failed to create test user")
}

/// Create a test user with a unique username
pub async fn create_unique_test_user(pool: &SqlitePool, password: &str) -> User {
    let username = format!("user_{}", Uuid::new_v4().simple());
    create_test_user(pool, &username, password).await
}

/// Obtain a token through `POST /token`
pub async fn obtain_token(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/token")
        .form(&[("username", username), ("password", password)])
        .await;
    response.assert_status_ok();
    response.json::<TokenResponse>().access_token
}

/// `Authorization` header value for `token`
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).expect("token is header-safe")
}

/// `Cookie` header value carrying `token` as the auth cookie
pub fn auth_cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("access-token={}", token)).expect("token is header-safe")
}
