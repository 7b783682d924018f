/**
 * Authentication Handler Types
 *
 * Request and response types shared by the token, login, registration and
 * account handlers.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::backend::auth::users::{Profile, User};

/// Token type reported in every token response
pub const TOKEN_TYPE: &str = "bearer";

/// OAuth2 password-grant form posted to `/token` and `/login`
///
/// `grant_type` and `scope` are accepted for client compatibility and
/// otherwise ignored.
#[derive(Deserialize, Debug)]
pub struct TokenForm {
    pub username: String,
    /// Plaintext password; never logged
    pub password: String,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Body returned by `POST /token`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// Registration request
///
/// Profile fields sit next to the credentials in the same JSON object.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Unique username (1-64 chars, no whitespace)
    pub username: String,
    /// Plaintext password (at least 6 chars, hashed before storage)
    pub password: String,
    #[serde(flatten)]
    pub profile: Profile,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub mail: Option<String>,
    pub personal_username: Option<String>,
    pub sex: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub sympathy: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            mail: user.mail,
            personal_username: user.personal_username,
            sex: user.sex,
            birthdate: user.birthdate,
            sympathy: user.sympathy,
            created_at: user.created_at,
        }
    }
}
