//! Authentication API integration tests
//!
//! Tests for `/token`, `/login`, `/logout` and `/reg`.

use axum::http::{
    header::{AUTHORIZATION, LOCATION, SET_COOKIE},
    StatusCode,
};
use pretty_assertions::assert_eq;
use pagegate::backend::auth::handlers::{TokenResponse, UserResponse};

use crate::common::{create_test_user, TestApp};

#[tokio::test]
async fn test_token_success() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .post("/token")
        .form(&[
            ("grant_type", "password"),
            ("username", "alice"),
            ("password", "secret1"),
        ])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: TokenResponse = response.json();
    assert_eq!(body.token_type, "bearer");
    assert!(!body.access_token.is_empty());

    let claims = app.codec().decode(&body.access_token).unwrap();
    assert_eq!(claims.subject(), Some("alice"));
}

#[tokio::test]
async fn test_token_wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let wrong = app
        .server
        .post("/token")
        .form(&[("username", "alice"), ("password", "wrong")])
        .await;
    let unknown = app
        .server
        .post("/token")
        .form(&[("username", "bob"), ("password", "x")])
        .await;

    crate::assert_unauthorized!(wrong);
    crate::assert_unauthorized!(unknown);
    assert_eq!(wrong.text(), unknown.text());
}

#[tokio::test]
async fn test_token_missing_field_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/token")
        .form(&[("username", "alice")])
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .post("/login")
        .form(&[("username", "alice"), ("password", "secret1")])
        .await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header(LOCATION), "/suc_oauth");

    let set_cookie = response.header(SET_COOKIE);
    let set_cookie = set_cookie.to_str().unwrap();
    crate::assert_contains!(set_cookie, "access-token=");
    crate::assert_contains!(set_cookie, "HttpOnly");
    crate::assert_contains!(set_cookie, "Secure");
    crate::assert_contains!(set_cookie, "SameSite=Lax");
    crate::assert_contains!(set_cookie, "Path=/");
    crate::assert_contains!(set_cookie, "Max-Age=1800");

    let authorization = response.header(AUTHORIZATION);
    assert!(authorization.to_str().unwrap().starts_with("Bearer "));
}

#[tokio::test]
async fn test_login_cookie_secure_can_be_disabled() {
    let config = pagegate::shared::config::AppConfig::builder()
        .secret_key(crate::common::TEST_SECRET.to_string())
        .bcrypt_cost(4)
        .database_url("sqlite::memory:".to_string())
        .cookie_secure(false)
        .build()
        .unwrap();
    let app = TestApp::with_config(config).await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .post("/login")
        .form(&[("username", "alice"), ("password", "secret1")])
        .await;

    let set_cookie = response.header(SET_COOKIE);
    assert!(!set_cookie.to_str().unwrap().contains("Secure"));
}

#[tokio::test]
async fn test_login_bad_credentials() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .post("/login")
        .form(&[("username", "alice"), ("password", "nope")])
        .await;

    crate::assert_unauthorized!(response);
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app.server.post("/logout").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header(LOCATION), "/");
    let set_cookie = response.header(SET_COOKIE);
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("access-token=;"));
    crate::assert_contains!(set_cookie, "Max-Age=0");
}

#[tokio::test]
async fn test_register_then_token() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/reg")
        .json(&serde_json::json!({
            "username": "carol",
            "password": "hunter22",
            "personal_username": "Carol"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let user: UserResponse = response.json();
    assert_eq!(user.username, "carol");
    assert_eq!(user.personal_username.as_deref(), Some("Carol"));
    assert!(!response.text().contains("hunter22"));
    assert!(!response.text().contains("hashed_password"));

    let token = crate::common::obtain_token(&app.server, "carol", "hunter22").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_is_conflict() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .post("/reg")
        .json(&serde_json::json!({"username": "alice", "password": "another1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_register_validation() {
    let app = TestApp::new().await;

    let short_password = app
        .server
        .post("/reg")
        .json(&serde_json::json!({"username": "dave", "password": "12345"}))
        .await;
    assert_eq!(short_password.status_code(), StatusCode::BAD_REQUEST);

    let bad_username = app
        .server
        .post("/reg")
        .json(&serde_json::json!({"username": "two words", "password": "123456"}))
        .await;
    assert_eq!(bad_username.status_code(), StatusCode::BAD_REQUEST);

    let empty_username = app
        .server
        .post("/reg")
        .json(&serde_json::json!({"username": "", "password": "123456"}))
        .await;
    assert_eq!(empty_username.status_code(), StatusCode::BAD_REQUEST);

    let long_password = format!("{}x", "A".repeat(72));
    let overlong = app
        .server
        .post("/reg")
        .json(&serde_json::json!({"username": "erin", "password": long_password}))
        .await;
    assert_eq!(overlong.status_code(), StatusCode::BAD_REQUEST);
}
