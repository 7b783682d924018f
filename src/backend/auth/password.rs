/**
 * Password Hashing
 *
 * Thin wrapper over bcrypt. The salt is generated inside `bcrypt::hash`, so
 * hashing the same password twice yields two different strings that both
 * verify.
 *
 * The non-truncating bcrypt entry points are used throughout: bcrypt only
 * reads the first 72 bytes of its input (terminator included), and plain
 * `bcrypt::hash` would silently drop the rest. Longer passwords fail to hash
 * and never verify.
 */

use bcrypt::{BcryptError, DEFAULT_COST};

use crate::backend::auth::error::AuthError;

/// Longest password bcrypt can hash without truncating, in bytes
pub const MAX_PASSWORD_BYTES: usize = 71;

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        bcrypt::non_truncating_hash(plaintext, self.cost)
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed hash or an over-long password verifies as `false`.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        match bcrypt::non_truncating_verify(plaintext, hashed) {
            Ok(valid) => valid,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }

    /// `hash` on the blocking pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, AuthError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
    }

    /// `verify` on the blocking pool
    pub async fn verify_blocking(&self, plaintext: String, hashed: String) -> bool {
        let hasher = *self;
        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hashed)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }
}
