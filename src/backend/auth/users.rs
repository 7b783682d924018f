/**
 * User Model and Database Operations
 *
 * This module is the credential store: the `users` table and the queries the
 * rest of the backend runs against it. Every function takes the pool by
 * reference and each query checks out its own connection, so no session is
 * ever shared between requests.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a row in the `users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the database
    pub id: i64,
    /// Username (unique, primary lookup key)
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Mail address
    pub mail: Option<String>,
    /// Display name
    pub personal_username: Option<String>,
    pub sex: Option<String>,
    pub birthdate: Option<NaiveDate>,
    /// Free-text field
    pub sympathy: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Optional profile fields, used both at registration and for edits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub mail: Option<String>,
    pub personal_username: Option<String>,
    pub sex: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub sympathy: Option<String>,
}

const USER_COLUMNS: &str = "id, username, hashed_password, mail, personal_username, sex, birthdate, sympathy, created_at, updated_at";

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Unique username
/// * `hashed_password` - Output of the password hasher
/// * `profile` - Optional profile fields
///
/// # Returns
/// Created user or error (a duplicate username is a unique violation)
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    hashed_password: &str,
    profile: &Profile,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (username, hashed_password, mail, personal_username, sex, birthdate, sympathy, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(username)
    .bind(hashed_password)
    .bind(&profile.mail)
    .bind(&profile.personal_username)
    .bind(&profile.sex)
    .bind(profile.birthdate)
    .bind(&profile.sympathy)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
    ))
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Update profile fields
///
/// Fields left as `None` keep their stored value.
///
/// # Returns
/// Updated user, or None if the user no longer exists
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: i64,
    profile: &Profile,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE users
        SET mail = COALESCE(?, mail),
            personal_username = COALESCE(?, personal_username),
            sex = COALESCE(?, sex),
            birthdate = COALESCE(?, birthdate),
            sympathy = COALESCE(?, sympathy),
            updated_at = ?
        WHERE id = ?
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(&profile.mail)
    .bind(&profile.personal_username)
    .bind(&profile.sex)
    .bind(profile.birthdate)
    .bind(&profile.sympathy)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Delete a user
///
/// # Returns
/// True if a row was removed
pub async fn delete_user(pool: &SqlitePool, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Whether `err` is a unique-constraint violation (duplicate username)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
