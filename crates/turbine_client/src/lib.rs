//! Asynchronous HTTP client for the Turbine paste API.
//!
//! The client normalizes every response into an [`ApiOutcome`] so callers
//! branch on status codes instead of exception paths, and it transparently
//! waits out rate limits using the delay the backend embeds in its 429
//! messages.

/// Request execution and retry behavior.
pub mod client;
/// Typed endpoint wrappers for the remote API.
pub mod endpoints;
/// Client error types.
pub mod error;
/// Structured response outcomes.
pub mod outcome;
/// Session context and its storage boundary.
pub mod session;

pub use client::{ApiClient, RequestOptions};
pub use error::ClientError;
pub use outcome::{ApiMessage, ApiOutcome};
pub use session::{Session, SessionError, SessionStore};

// Callers name methods through the same type the client consumes.
pub use reqwest::Method;
