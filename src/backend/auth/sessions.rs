/**
 * Session Tokens
 *
 * This module handles JWT issuance and decoding. Tokens are stateless: the
 * server keeps no session table, so a token is valid purely on signature and
 * expiry (the verifier adds the user-still-exists check).
 *
 * # Key rotation
 *
 * New tokens are always signed with `SECRET_KEY`. When `PREVIOUS_SECRET_KEY`
 * is set, tokens signed with it still decode until they expire; dropping the
 * variable on a later restart retires the old key completely.
 */

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::backend::auth::error::AuthError;
use crate::shared::config::{AppConfig, DEFAULT_TOKEN_TTL_MINUTES};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// The subject, if present and non-empty
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }
}

/// Signs and decodes access tokens with the process-wide key material
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_keys: Vec<DecodingKey>,
    default_ttl: Duration,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &self.algorithm)
            .field("decoding_keys", &self.decoding_keys.len())
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(secret: &[u8], algorithm: Algorithm, default_ttl: Duration) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_keys: vec![DecodingKey::from_secret(secret)],
            default_ttl,
        }
    }

    /// Also accept tokens signed with `secret` when decoding
    pub fn with_previous_secret(mut self, secret: &[u8]) -> Self {
        self.decoding_keys.push(DecodingKey::from_secret(secret));
        self
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let codec = Self::new(
            config.secret_key.as_bytes(),
            config.algorithm,
            Duration::try_minutes(config.access_token_expire_minutes)
                .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES)),
        );
        match &config.previous_secret_key {
            Some(previous) => codec.with_previous_secret(previous.as_bytes()),
            None => codec,
        }
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a signed token for `subject`
    ///
    /// `ttl` falls back to the configured default.
    pub fn issue(&self, subject: &str, ttl: Option<Duration>) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl.unwrap_or(self.default_ttl))
            .ok_or_else(|| AuthError::TokenIssue("token lifetime out of range".to_string()))?;

        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }

    /// Verify signature and expiry, then return the claims
    ///
    /// A token is live only while the current second is strictly before `exp`.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let mut last_error = None;
        for key in &self.decoding_keys {
            match decode::<Claims>(token, key, &validation) {
                Ok(data) => {
                    // jsonwebtoken still accepts exp == now at leeway 0.
                    if data.claims.exp <= Utc::now().timestamp() {
                        return Err(AuthError::InvalidToken("token has expired".to_string()));
                    }
                    return match data.claims.subject() {
                        Some(_) => Ok(data.claims),
                        None => Err(AuthError::MissingSubject),
                    };
                }
                // Only a signature mismatch is worth retrying with an older key.
                Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => {
                    last_error = Some(e);
                }
                Err(e) => return Err(AuthError::InvalidToken(e.to_string())),
            }
        }

        Err(AuthError::InvalidToken(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no decoding key".to_string()),
        ))
    }
}
