//! Authentication Module
//!
//! This module handles password hashing, token issuance and verification, and
//! the HTTP endpoints built on them.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - Credential store (the `users` table)
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT encoding and decoding
//! - **`authenticator`** - Username/password to user
//! - **`verifier`** - Bearer token to verified identity
//! - **`cookies`** - The `access-token` cookie
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs           - Module exports and documentation
//! ├── error.rs         - AuthError
//! ├── users.rs         - User model and database operations
//! ├── password.rs      - PasswordHasher
//! ├── sessions.rs      - Claims and TokenCodec
//! ├── authenticator.rs - authenticate()
//! ├── verifier.rs      - BearerToken, Identity, verify()
//! ├── cookies.rs       - Cookie construction and parsing
//! └── handlers/        - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Token**: form credentials → authenticated → `{"access_token", "token_type"}`
//! 2. **Login**: form credentials → authenticated → HttpOnly cookie → 303 `/suc_oauth`
//! 3. **Guarded request**: header or cookie token → decoded → subject re-resolved → handler
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed with the configured HMAC key and expire after the
//!   configured TTL
//! - Invalid credentials return 401 with one message for both causes

/// Authentication error type
pub mod error;

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Credential authentication
pub mod authenticator;

/// Token verification
pub mod verifier;

/// Auth cookie helpers
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use authenticator::authenticate;
pub use error::AuthError;
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenCodec};
pub use verifier::{BearerToken, Identity};
