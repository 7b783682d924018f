/**
 * Credential Authentication
 *
 * Resolves a username/password pair to a stored user. Unknown usernames and
 * wrong passwords come back as different errors; it is the HTTP layer that
 * decides whether to reveal the difference.
 */

use sqlx::SqlitePool;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{get_user_by_username, User};

/// Authenticate a user by username and password
///
/// # Errors
/// * `AuthError::NotFound` - no such username
/// * `AuthError::InvalidCredentials` - password does not match
/// * `AuthError::Database` - the store could not be queried
pub async fn authenticate(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = get_user_by_username(pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Authentication failed, unknown user: {}", username);
            AuthError::NotFound
        })?;

    let valid = hasher
        .verify_blocking(password.to_string(), user.hashed_password.clone())
        .await;

    if !valid {
        tracing::warn!("Authentication failed, bad password for user: {}", username);
        return Err(AuthError::InvalidCredentials);
    }

    tracing::debug!("Authenticated user: {}", username);
    Ok(user)
}
