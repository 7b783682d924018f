//! Application configuration module
//!
//! Provides the process-wide configuration: signing secret and algorithm,
//! token lifetime, cookie and hashing policy, and server wiring. It is built
//! once at startup and never mutated afterwards.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. built-in defaults (never for `SECRET_KEY`)
//! 2. an optional TOML file
//! 3. environment variables
//!
//! ```rust
//! use pagegate::shared::config::AppConfig;
//!
//! let config = AppConfig::builder()
//!     .secret_key("from-the-environment".to_string())
//!     .access_token_expire_minutes(15)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.access_token_expire_minutes, 15);
//! ```

use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_ALGORITHM: &str = "HS256";
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
/// One year.
pub const MAX_TOKEN_TTL_MINUTES: i64 = 365 * 24 * 60;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static_files";

/// bcrypt accepts work factors in this range.
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Key used to sign new tokens
    pub secret_key: String,
    /// Key retired by the last rotation; still accepted when decoding
    pub previous_secret_key: Option<String>,
    /// HMAC signing algorithm
    pub algorithm: Algorithm,
    /// Default access token lifetime
    pub access_token_expire_minutes: i64,
    /// Whether the auth cookie carries the `Secure` attribute
    pub cookie_secure: bool,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// SQLite connection string
    pub database_url: String,
    /// HTTP listen port
    pub server_port: u16,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if !matches!(
            self.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ConfigError::UnsupportedAlgorithm(format!("{:?}", self.algorithm)));
        }
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.access_token_expire_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                message: format!("must be between 1 and {} minutes", MAX_TOKEN_TTL_MINUTES),
            });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("must be between {} and {}", MIN_BCRYPT_COST, MAX_BCRYPT_COST),
            });
        }
        Ok(())
    }
}

// Secrets stay out of logs.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field(
                "previous_secret_key",
                &self.previous_secret_key.as_ref().map(|_| "<redacted>"),
            )
            .field("algorithm", &self.algorithm)
            .field("access_token_expire_minutes", &self.access_token_expire_minutes)
            .field("cookie_secure", &self.cookie_secure)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("database_url", &self.database_url)
            .field("server_port", &self.server_port)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}

/// Optional on-disk configuration. Every key is optional so a file may
/// carry only the settings an operator wants to pin.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub secret_key: Option<String>,
    pub previous_secret_key: Option<String>,
    pub algorithm: Option<String>,
    pub access_token_expire_minutes: Option<i64>,
    pub cookie_secure: Option<bool>,
    pub bcrypt_cost: Option<u32>,
    pub database_url: Option<String>,
    pub server_port: Option<u16>,
    pub static_dir: Option<String>,
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    secret_key: Option<String>,
    previous_secret_key: Option<String>,
    algorithm: Option<String>,
    access_token_expire_minutes: Option<i64>,
    cookie_secure: Option<bool>,
    bcrypt_cost: Option<u32>,
    database_url: Option<String>,
    server_port: Option<u16>,
    static_dir: Option<String>,
}

impl AppConfigBuilder {
    /// Set the signing secret
    pub fn secret_key(mut self, secret: String) -> Self {
        self.secret_key = Some(secret);
        self
    }

    /// Set the previous signing secret (decode only)
    pub fn previous_secret_key(mut self, secret: String) -> Self {
        self.previous_secret_key = Some(secret);
        self
    }

    /// Set the signing algorithm by name, e.g. `HS256`
    pub fn algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    /// Set the default token lifetime
    pub fn access_token_expire_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = Some(minutes);
        self
    }

    /// Set whether the auth cookie is `Secure`
    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = Some(secure);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the database URL
    pub fn database_url(mut self, url: String) -> Self {
        self.database_url = Some(url);
        self
    }

    /// Set the listen port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the static files directory
    pub fn static_dir(mut self, dir: String) -> Self {
        self.static_dir = Some(dir);
        self
    }

    /// Layer values from a TOML document over the current ones
    pub fn apply_toml(mut self, contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;

        macro_rules! layer {
            ($($field:ident),*) => {
                $( if file.$field.is_some() { self.$field = file.$field; } )*
            };
        }
        layer!(
            secret_key,
            previous_secret_key,
            algorithm,
            access_token_expire_minutes,
            cookie_secure,
            bcrypt_cost,
            database_url,
            server_port,
            static_dir
        );
        Ok(self)
    }

    /// Layer values from environment-style variables over the current ones
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`; tests pass a map.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("SECRET_KEY") {
            self.secret_key = Some(value);
        }
        if let Some(value) = lookup("PREVIOUS_SECRET_KEY").filter(|v| !v.is_empty()) {
            self.previous_secret_key = Some(value);
        }
        if let Some(value) = lookup("ALGORITHM") {
            self.algorithm = Some(value);
        }
        if let Some(value) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            self.access_token_expire_minutes =
                Some(parse_value("ACCESS_TOKEN_EXPIRE_MINUTES", &value)?);
        }
        if let Some(value) = lookup("COOKIE_SECURE") {
            self.cookie_secure = Some(parse_value("COOKIE_SECURE", &value)?);
        }
        if let Some(value) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = Some(parse_value("BCRYPT_COST", &value)?);
        }
        if let Some(value) = lookup("DATABASE_URL") {
            self.database_url = Some(value);
        }
        if let Some(value) = lookup("SERVER_PORT") {
            self.server_port = Some(parse_value("SERVER_PORT", &value)?);
        }
        if let Some(value) = lookup("STATIC_DIR") {
            self.static_dir = Some(value);
        }
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let secret_key = self.secret_key.ok_or(ConfigError::MissingValue("SECRET_KEY"))?;
        let algorithm_name = self
            .algorithm
            .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());
        let algorithm = Algorithm::from_str(algorithm_name.trim())
            .map_err(|_| ConfigError::UnsupportedAlgorithm(algorithm_name.clone()))?;

        let config = AppConfig {
            secret_key,
            previous_secret_key: self.previous_secret_key,
            algorithm,
            access_token_expire_minutes: self
                .access_token_expire_minutes
                .unwrap_or(DEFAULT_TOKEN_TTL_MINUTES),
            cookie_secure: self.cookie_secure.unwrap_or(true),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            server_port: self.server_port.unwrap_or(DEFAULT_SERVER_PORT),
            static_dir: self
                .static_dir
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        message: format!("could not parse '{}'", raw),
    })
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("unsupported signing algorithm '{0}' (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),
    #[error("invalid config file: {0}")]
    File(#[from] toml::de::Error),
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
}
