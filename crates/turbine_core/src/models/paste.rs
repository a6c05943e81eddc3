//! Paste wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paste access scope.
///
/// The numeric values and their semantics are owned by the backend; this
/// client only round-trips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Visibility {
    Private,
    Protected,
    Unlisted,
    Discoverable,
}

impl From<Visibility> for u8 {
    fn from(value: Visibility) -> Self {
        match value {
            Visibility::Private => 0,
            Visibility::Protected => 1,
            Visibility::Unlisted => 2,
            Visibility::Discoverable => 3,
        }
    }
}

impl TryFrom<u8> for Visibility {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Private),
            1 => Ok(Self::Protected),
            2 => Ok(Self::Unlisted),
            3 => Ok(Self::Discoverable),
            other => Err(format!("invalid visibility value {}", other)),
        }
    }
}

/// One file inside a paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteFile {
    pub filename: String,
    pub content: String,
    /// Explicit language tag; absent means the editor infers from the
    /// filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A paste as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paste {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub files: Vec<PasteFile>,
    pub author_id: String,
    pub author_name: String,
    pub visibility: Visibility,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub stars: u64,
}

/// Payload for creating a paste.
///
/// The outbound payload names its heading `title` while inbound pastes call
/// it `name`; the asymmetry is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePaste {
    pub title: String,
    pub description: String,
    pub files: Vec<PasteFile>,
}

/// Response to a successful paste creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteCreated {
    pub id: String,
}

/// A paste summary as returned by listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastePreview {
    pub id: String,
    /// Whether the paste still exists and is visible to the requester;
    /// listings may carry tombstones for pastes that no longer are.
    #[serde(default = "default_available")]
    pub available: bool,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub visibility: Visibility,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub stars: u64,
    /// Present on starred-paste listings.
    #[serde(default)]
    pub starred: Option<bool>,
}

fn default_available() -> bool {
    true
}
