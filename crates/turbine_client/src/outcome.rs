//! Structured response outcomes returned by the client.

use serde::{Deserialize, Serialize};

/// Statuses whose payload is a structured `{ message }` record.
///
/// 502 appears both as a backend status and as the synthetic status the
/// client assigns to transport failures.
pub const ERROR_STATUSES: [u16; 7] = [400, 401, 403, 404, 409, 500, 502];

/// Whether a status belongs to the structured-error partition.
pub fn is_error_status(status: u16) -> bool {
    ERROR_STATUSES.contains(&status)
}

/// Structured error payload carried by recognized error statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Outcome of one logical API request.
///
/// The status code alone decides the variant: statuses in
/// [`ERROR_STATUSES`] carry an [`ApiMessage`], everything else carries the
/// deserialized domain payload, or the raw body when a successful response
/// was not JSON. Callers branch on the variant, never on thrown errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    /// JSON payload for a status outside the error partition.
    Data { status: u16, data: T },
    /// Raw body of a successful non-JSON response.
    Text { status: u16, body: String },
    /// Structured error for a status inside the error partition, or a
    /// non-JSON failure whose shape could not be determined.
    Error { status: u16, error: ApiMessage },
}

impl<T> ApiOutcome<T> {
    /// The HTTP status this outcome was built from.
    pub fn status(&self) -> u16 {
        match self {
            ApiOutcome::Data { status, .. }
            | ApiOutcome::Text { status, .. }
            | ApiOutcome::Error { status, .. } => *status,
        }
    }

    /// Whether the outcome is an error record.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiOutcome::Error { .. })
    }

    /// The domain payload, when the outcome carries one.
    pub fn data(self) -> Option<T> {
        match self {
            ApiOutcome::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The error message, when the outcome is an error record.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiOutcome::Error { error, .. } => Some(error.message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_error_status, ApiMessage, ApiOutcome};

    #[test]
    fn error_statuses_cover_the_fixed_partition() {
        for status in [400, 401, 403, 404, 409, 500, 502] {
            assert!(is_error_status(status), "status: {status}");
        }
        for status in [200, 201, 204, 302, 418, 429, 503] {
            assert!(!is_error_status(status), "status: {status}");
        }
    }

    #[test]
    fn accessors_expose_status_and_payload() {
        let outcome: ApiOutcome<u32> = ApiOutcome::Data {
            status: 200,
            data: 7,
        };
        assert_eq!(outcome.status(), 200);
        assert!(!outcome.is_error());
        assert_eq!(outcome.data(), Some(7));

        let failure: ApiOutcome<u32> = ApiOutcome::Error {
            status: 404,
            error: ApiMessage {
                message: "missing".to_string(),
            },
        };
        assert!(failure.is_error());
        assert_eq!(failure.error_message(), Some("missing"));
        assert_eq!(failure.data(), None);
    }
}
