//! Backend Module
//!
//! This module contains all server-side code for pagegate: an Axum HTTP
//! server that serves a few HTML pages and guards some of them behind a
//! JWT-based login.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Password hashing and token issuance/verification
//! - The auth guard in front of protected routes
//! - Credential store persistence (SQLite)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`middleware`** - The auth guard and `AuthUser` extractor
//! - **`pages`** - Server-rendered HTML pages
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── pages.rs        - HTML pages
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the token codec, the password hasher and
//! the cookie settings. All of it is built once at startup and never mutated,
//! so there are no locks; each database query checks out its own pooled
//! connection.
//!
//! # Error Handling
//!
//! Handlers and the guard return `BackendError`, which renders as
//! `{"error": ..., "status": ...}` JSON. Every 401 carries
//! `WWW-Authenticate: Bearer`.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagegate::backend::server::{config::load_config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// HTML pages
pub mod pages;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
