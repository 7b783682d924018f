//! Shared Module
//!
//! This module contains types that are used across the backend regardless of
//! transport: validation errors and the process-wide application
//! configuration.
//!
//! # Overview
//!
//! - **`error`** - `SharedError` for input validation
//! - **`config`** - `AppConfig`, its builder, and `ConfigError`

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
