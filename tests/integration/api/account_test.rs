//! Guarded account API integration tests
//!
//! Tests for `/users/me` and the token extraction rules in front of it.

use axum::http::{
    header::{AUTHORIZATION, COOKIE, SET_COOKIE},
    HeaderValue, StatusCode,
};
use chrono::Duration;
use pretty_assertions::assert_eq;
use pagegate::backend::auth::handlers::UserResponse;
use pagegate::backend::auth::sessions::TokenCodec;

use crate::common::{
    auth_cookie, bearer, create_test_user, create_unique_test_user, obtain_token, TestApp,
};

#[tokio::test]
async fn test_me_with_bearer_header() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let token = obtain_token(&app.server, "alice", "secret1").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let user: UserResponse = response.json();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_me_with_cookie() {
    let app = TestApp::new().await;
    let user = create_unique_test_user(&app.pool, "secret1").await;
    let token = obtain_token(&app.server, &user.username, "secret1").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(COOKIE, auth_cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<UserResponse>().username, user.username);
}

#[tokio::test]
async fn test_header_wins_over_cookie() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    create_test_user(&app.pool, "bob", "secret2").await;
    let alice = obtain_token(&app.server, "alice", "secret1").await;
    let bob = obtain_token(&app.server, "bob", "secret2").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&alice))
        .add_header(COOKIE, auth_cookie(&bob))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<UserResponse>().username, "alice");
}

#[tokio::test]
async fn test_bad_header_does_not_fall_back_to_cookie() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let token = obtain_token(&app.server, "alice", "secret1").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic YWxpY2U6c2VjcmV0MQ=="))
        .add_header(COOKIE, auth_cookie(&token))
        .await;

    crate::assert_unauthorized!(response);
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/users/me").await;

    crate::assert_unauthorized!(response);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let expired = app
        .codec()
        .issue("alice", Some(Duration::minutes(-5)))
        .unwrap();

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&expired))
        .await;

    crate::assert_unauthorized!(response);
}

#[tokio::test]
async fn test_foreign_secret_rejected() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let forged = TokenCodec::new(
        b"some-other-secret",
        app.config.algorithm,
        Duration::minutes(30),
    )
    .issue("alice", None)
    .unwrap();

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&forged))
        .await;

    crate::assert_unauthorized!(response);
}

#[tokio::test]
async fn test_patch_me_updates_profile_only() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let token = obtain_token(&app.server, "alice", "secret1").await;

    let response = app
        .server
        .patch("/users/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({
            "mail": "alice@example.com",
            "sympathy": "cats",
            "username": "mallory"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let user: UserResponse = response.json();
    assert_eq!(user.username, "alice");
    assert_eq!(user.mail.as_deref(), Some("alice@example.com"));
    assert_eq!(user.sympathy.as_deref(), Some("cats"));
}

#[tokio::test]
async fn test_delete_me_invalidates_existing_tokens() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;
    let token = obtain_token(&app.server, "alice", "secret1").await;

    let response = app
        .server
        .delete("/users/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    crate::assert_contains!(response.header(SET_COOKIE).to_str().unwrap(), "Max-Age=0");

    let again = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    crate::assert_unauthorized!(again);
}

#[tokio::test]
async fn test_previous_secret_still_accepted() {
    let old = TestApp::new().await;
    create_test_user(&old.pool, "alice", "secret1").await;
    let token = obtain_token(&old.server, "alice", "secret1").await;

    let rotated = pagegate::shared::config::AppConfig::builder()
        .secret_key("rotated-secret".to_string())
        .previous_secret_key(crate::common::TEST_SECRET.to_string())
        .bcrypt_cost(4)
        .database_url("sqlite::memory:".to_string())
        .build()
        .unwrap();
    let app = TestApp::with_config(rotated).await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let response = app
        .server
        .get("/users/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
