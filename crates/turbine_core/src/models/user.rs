//! User account and authentication wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as returned by the API.
///
/// Serialized back out only when cached in the local session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub github_id: Option<u64>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub paste_count: u64,
    #[serde(default)]
    pub stars_received: u64,
    #[serde(default)]
    pub stars_given: u64,
    /// Only present when the queried user is the requester.
    #[serde(default)]
    pub email: Option<String>,
}

/// Payload for password login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload for account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Payload for registration through a GitHub authorization code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GithubRegistration {
    pub username: String,
    pub access_code: String,
}

/// Response to a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub token: String,
}
