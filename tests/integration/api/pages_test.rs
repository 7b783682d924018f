//! Page integration tests
//!
//! Tests for the HTML pages, the guarded bonus page and static files.

use axum::http::{
    header::{AUTHORIZATION, COOKIE, SET_COOKIE},
    HeaderValue, StatusCode,
};
use pagegate::backend::auth::users::delete_user;

use crate::common::{bearer, create_test_user, obtain_token, TestApp};

#[tokio::test]
async fn test_get_index() {
    let app = TestApp::new().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    crate::assert_contains!(response.text(), "<!doctype html>");
}

#[tokio::test]
async fn test_login_page_and_success_page() {
    let app = TestApp::new().await;

    let form = app.server.get("/login").await;
    assert_eq!(form.status_code(), StatusCode::OK);
    crate::assert_contains!(form.text(), "action=\"/login\"");

    let success = app.server.get("/suc_oauth").await;
    assert_eq!(success.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_bonus_requires_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/bonus").await;

    crate::assert_unauthorized!(response);
}

#[tokio::test]
async fn test_browser_login_flow_reaches_bonus() {
    let app = TestApp::new().await;
    create_test_user(&app.pool, "alice", "secret1").await;

    let login = app
        .server
        .post("/login")
        .form(&[("username", "alice"), ("password", "secret1")])
        .await;
    assert_eq!(login.status_code(), StatusCode::SEE_OTHER);

    // Send back only the name=value pair, as a browser would
    let set_cookie = login.header(SET_COOKIE);
    let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();

    let bonus = app
        .server
        .get("/bonus")
        .add_header(COOKIE, HeaderValue::from_str(&pair).unwrap())
        .await;

    assert_eq!(bonus.status_code(), StatusCode::OK);
    crate::assert_contains!(bonus.text(), "Hello, alice!");
}

#[tokio::test]
async fn test_deleted_user_rejected_on_bonus() {
    let app = TestApp::new().await;
    let user = create_test_user(&app.pool, "alice", "secret1").await;
    let token = obtain_token(&app.server, "alice", "secret1").await;

    assert!(delete_user(&app.pool, user.id).await.unwrap());

    let response = app
        .server
        .get("/bonus")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    crate::assert_unauthorized!(response);
    crate::assert_contains!(response.text(), "Could not find user");
}

#[tokio::test]
async fn test_static_files_served() {
    let app = TestApp::new().await;

    let response = app.server.get("/static/style.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    crate::assert_contains!(response.text(), "font-family");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/no-such-page").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
