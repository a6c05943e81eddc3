//! Data models for API requests and responses.

/// Paste payloads and visibility.
pub mod paste;
/// User accounts and authentication payloads.
pub mod user;

pub use paste::{CreatePaste, Paste, PasteCreated, PasteFile, PastePreview, Visibility};
pub use user::{Credentials, GithubRegistration, LoginResponse, Registration, User};
