//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Token, login and account endpoints
//! └── page_routes.rs  - HTML pages
//! ```
//!
//! # Route Types
//!
//! ## API Routes
//!
//! - `POST /token` - OAuth2 password grant
//! - `POST /login` - Cookie login, 303 to `/suc_oauth`
//! - `POST /logout` - Clear the cookie, 303 to `/`
//! - `POST /reg` - User registration
//! - `GET|PATCH|DELETE /users/me` - Current user (guarded)
//!
//! ## Page Routes
//!
//! - `GET /` - Index
//! - `GET /login` - Login form
//! - `GET /suc_oauth` - Login success page
//! - `GET /bonus` - Bonus page (guarded)
//!
//! ## Static Files
//!
//! - `/static/*` - Served from `STATIC_DIR`

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// HTML page routes
pub mod page_routes;

// Re-export commonly used functions
pub use router::create_router;
