//! Client error types.

use thiserror::Error;

/// Failures that cannot be expressed as a structured API outcome.
///
/// Ordinary error statuses and transport faults come back as
/// [`crate::ApiOutcome`] values; these variants cover protocol violations
/// where the client and backend disagree on response shape, plus request
/// descriptors that cannot be sent at all.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A 429 response whose message lacks the retry-delay pattern. The
    /// automatic retry cannot proceed without the wait duration, so this is
    /// escalated instead of being absorbed.
    #[error("unexpected 429 response, cannot determine retry delay: {body}")]
    UnexpectedRateLimit { body: String },

    /// A JSON body that contradicts the shape its status code promises.
    #[error("response body does not match its status contract: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request descriptor could not be turned into an HTTP request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
