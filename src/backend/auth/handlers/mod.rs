//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── token.rs     - OAuth2 password-grant token handler
//! ├── login.rs     - Browser login (cookie + redirect)
//! ├── logout.rs    - Cookie removal
//! ├── register.rs  - User registration handler
//! └── me.rs        - Current user handlers
//! ```
//!
//! # Handlers
//!
//! - **`issue_token`** - POST /token - Token for API clients
//! - **`login`** - POST /login - Token in an HttpOnly cookie, then 303
//! - **`logout`** - POST /logout - Clear the cookie, then 303
//! - **`register`** - POST /reg - User registration
//! - **`get_me`** / **`update_me`** / **`delete_me`** - /users/me (guarded)
//!
//! # Example
//!
//! ```rust,no_run
//! use pagegate::backend::auth::handlers::{issue_token, login};
//! use pagegate::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/token", post(issue_token))
//!     .route("/login", post(login))
//! # }
//! ```

/// Request and response types
pub mod types;

/// Token handler
pub mod token;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Registration handler
pub mod register;

/// Current user handlers
pub mod me;

// Re-export commonly used types
pub use types::{RegisterRequest, TokenForm, TokenResponse, UserResponse};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::{delete_me, get_me, update_me};
pub use register::register;
pub use token::issue_token;
