/**
 * Registration Handler
 *
 * This module implements user registration for POST /reg.
 *
 * # Registration Process
 *
 * 1. Validate username and password
 * 2. Hash the password (bcrypt, off the async executor)
 * 3. Insert the user with any profile fields supplied
 * 4. Return the public view of the new user
 *
 * # Validation
 *
 * - Username must be 1-64 characters with no whitespace
 * - Password must be at least 6 characters
 * - Username must be unique; the insert itself enforces this, so two
 *   concurrent registrations cannot both succeed
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::password::{PasswordHasher, MAX_PASSWORD_BYTES};
use crate::backend::auth::users::{create_user, is_unique_violation};
use crate::backend::error::BackendError;
use crate::shared::SharedError;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate username format
///
/// Usernames must be:
/// - 1-64 characters long
/// - Free of whitespace
fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    len > 0 && len <= MAX_USERNAME_LEN && !username.chars().any(char::is_whitespace)
}

fn validate(request: &RegisterRequest) -> Result<(), SharedError> {
    if !is_valid_username(&request.username) {
        return Err(SharedError::validation(
            "username",
            format!(
                "Username must be 1-{} characters without whitespace",
                MAX_USERNAME_LEN
            ),
        ));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if request.password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {} bytes", MAX_PASSWORD_BYTES),
        ));
    }
    Ok(())
}

/// Registration handler
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `State(hasher)` - Password hasher
/// * `Json(request)` - Credentials plus optional profile fields
///
/// # Returns
///
/// `201 Created` with the new user (no password hash)
///
/// # Errors
///
/// * `400 Bad Request` - Invalid username, or password too short or too long
/// * `409 Conflict` - Username already taken
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /reg HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "secret1",
///   "mail": "alice@example.com"
/// }
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(hasher): State<PasswordHasher>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    tracing::info!("Registration request for username: {}", request.username);

    if let Err(e) = validate(&request) {
        tracing::warn!("Registration rejected: {}", e);
        return Err(e.into());
    }

    let RegisterRequest {
        username,
        password,
        profile,
    } = request;

    let hashed_password = hasher.hash_blocking(password).await?;

    let user = match create_user(&pool, &username, &hashed_password, &profile).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Username already exists: {}", username);
            return Err(BackendError::handler(
                StatusCode::CONFLICT,
                "Username already taken",
            ));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User created successfully: {} (id {})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(user.into())))
}
