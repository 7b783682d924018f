//! pagegate - Main Library
//!
//! pagegate is a small web application that serves a handful of HTML pages
//! and protects some of them behind a username/password login. Logged-in
//! clients hold a signed JWT, either in an `Authorization: Bearer` header or
//! in the HttpOnly `access-token` cookie.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that are not tied to HTTP
//!   - Configuration (`AppConfig`) and its loading rules
//!   - Validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server, routes and pages
//!   - Password hashing, token codec, authenticator and verifier
//!   - SQLite credential store
//!
//! # Usage
//!
//! ```rust,no_run
//! use pagegate::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::ConfigError` for configuration problems (fatal at startup)
//! - `backend::auth::AuthError` for credential and token failures
//! - `backend::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
