//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - The guard in front of protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use pagegate::backend::middleware::auth_middleware;
//! use pagegate::backend::server::AppState;
//!
//! # fn example(app_state: AppState) -> Router<AppState> {
//! Router::new()
//!     .route("/bonus", get(|| async { "bonus" }))
//!     .route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, AuthUser};
