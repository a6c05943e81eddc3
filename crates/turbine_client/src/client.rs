//! Request execution against the remote API.

use crate::error::ClientError;
use crate::outcome::{is_error_status, ApiMessage, ApiOutcome};
use crate::session::Session;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use turbine_core::Config;

/// Fallback message for non-JSON error responses whose shape is unknown.
const UNKNOWN_ERROR_MESSAGE: &str =
    "Unknown error - please view request information to diagnose this error.";

/// Phrase bracketing the retry delay inside rate-limit messages.
const RETRY_PREFIX: &str = "Try again in ";
const RETRY_SUFFIX: &str = " seconds";

/// Per-request options: extra headers, JSON body, and auth token.
///
/// Cloneable because the rate-limit retry re-issues the identical request.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    /// Extra headers sent with the request.
    pub headers: Vec<(String, String)>,
    /// JSON body; its presence also sets the JSON content type.
    pub json: Option<Value>,
    /// Session token attached verbatim as the `Authorization` header.
    pub token: Option<String>,
}

impl RequestOptions {
    /// Options carrying the session's token, when one is present.
    pub fn with_session(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            ..Self::default()
        }
    }
}

/// HTTP client for the Turbine API.
///
/// Cheap to clone; wraps a pooled `reqwest::Client` and the configured base
/// URL (origin plus `/api` prefix). Holds no other state: every request is
/// independent, with no caching or in-flight deduplication.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Panics
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// only happens when the TLS backend fails to initialize.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client configured from the environment.
    pub fn from_env() -> Self {
        Self::new(&Config::from_env())
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform one logical request and normalize the outcome.
    ///
    /// Transport failures come back as a synthetic 502 outcome rather than
    /// an error, and rate-limited responses are retried after the delay the
    /// backend embeds in its message; the cooperative sleep is the only
    /// suspension point. Only protocol violations surface as
    /// [`ClientError`]: a 429 without a parseable delay, or a body that
    /// contradicts its status contract.
    pub async fn request<T>(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> Result<ApiOutcome<T>, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, route);
        let headers = build_headers(&options)?;

        // Retries on 429 are unbounded: the backend always names a finite
        // delay, so the request eventually lands.
        loop {
            let mut builder = self
                .http
                .request(method.clone(), url.as_str())
                .headers(headers.clone());
            if let Some(body) = &options.json {
                builder = builder.body(body.to_string());
            }

            let response = match builder.send().await {
                Ok(response) => response,
                Err(err) => return Ok(transport_failure_outcome(&url, &err)),
            };

            let status = response.status().as_u16();
            let success = response.status().is_success();
            let json = is_json_content_type(response.headers());

            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => return Ok(transport_failure_outcome(&url, &err)),
            };

            if json {
                let value: Value = serde_json::from_str(&body)?;

                if status == 429 {
                    let delay = value
                        .get("message")
                        .and_then(Value::as_str)
                        .and_then(parse_retry_delay);
                    let Some(seconds) = delay else {
                        return Err(ClientError::UnexpectedRateLimit { body });
                    };
                    tracing::info!(route, seconds, "rate limited, delaying request");
                    tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
                    continue;
                }

                if is_error_status(status) {
                    let error: ApiMessage = serde_json::from_value(value)?;
                    return Ok(ApiOutcome::Error { status, error });
                }

                let data: T = serde_json::from_value(value)?;
                return Ok(ApiOutcome::Data { status, data });
            }

            if success {
                return Ok(ApiOutcome::Text { status, body });
            }

            return Ok(ApiOutcome::Error {
                status,
                error: ApiMessage {
                    message: UNKNOWN_ERROR_MESSAGE.to_string(),
                },
            });
        }
    }
}

/// Synthetic 502 outcome for DNS/connection/timeout-level failures.
fn transport_failure_outcome<T>(url: &str, err: &reqwest::Error) -> ApiOutcome<T> {
    tracing::warn!(url, error = %err, "transport failure, synthesizing 502 outcome");
    ApiOutcome::Error {
        status: 502,
        error: ApiMessage {
            message: format!("Request failed to reach the API: {}", err),
        },
    }
}

/// Whether the response declared a JSON body, ignoring charset parameters.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Materialize the descriptor's headers.
///
/// Uses map insertion throughout, so the JSON content type and the
/// authorization token each appear exactly once even when the caller
/// supplied their own copies.
fn build_headers(options: &RequestOptions) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();

    for (name, value) in &options.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| ClientError::InvalidRequest(format!("header {:?}: {}", name, err)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|err| ClientError::InvalidRequest(format!("header {:?}: {}", name, err)))?;
        headers.insert(name, value);
    }

    if options.json.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }

    if let Some(token) = &options.token {
        let value = HeaderValue::from_str(token)
            .map_err(|err| ClientError::InvalidRequest(format!("authorization token: {}", err)))?;
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

/// Extract the wait duration from a message shaped like
/// `"... Try again in 1.5 seconds"`.
///
/// # Returns
/// The delay in seconds, or `None` when the pattern is absent or its number
/// is not a plain decimal.
fn parse_retry_delay(message: &str) -> Option<f64> {
    let start = message.find(RETRY_PREFIX)? + RETRY_PREFIX.len();
    let rest = &message[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    if !rest[end..].starts_with(RETRY_SUFFIX) {
        return None;
    }
    rest[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{build_headers, is_json_content_type, parse_retry_delay, RequestOptions};
    use crate::session::Session;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
    use serde_json::json;

    #[test]
    fn parse_retry_delay_reads_whole_and_fractional_seconds() {
        assert_eq!(
            parse_retry_delay("You are being rate limited. Try again in 20 seconds"),
            Some(20.0)
        );
        assert_eq!(parse_retry_delay("Try again in 1.5 seconds"), Some(1.5));
    }

    #[test]
    fn parse_retry_delay_rejects_messages_without_the_pattern() {
        assert_eq!(parse_retry_delay("Too many requests"), None);
        assert_eq!(parse_retry_delay("Try again in a moment"), None);
        assert_eq!(parse_retry_delay("Try again in 5 minutes"), None);
        assert_eq!(parse_retry_delay("Try again in 1.2.3 seconds"), None);
    }

    #[test]
    fn json_body_sets_the_content_type_exactly_once() {
        let options = RequestOptions {
            headers: vec![("Content-Type".to_string(), "text/plain".to_string())],
            json: Some(json!({ "a": 1 })),
            token: None,
        };
        let headers = build_headers(&options).unwrap();
        let values: Vec<&HeaderValue> = headers.get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "application/json");
    }

    #[test]
    fn session_token_becomes_the_authorization_header() {
        let session = Session {
            token: Some("User tok_123".to_string()),
            ..Session::default()
        };
        let options = RequestOptions::with_session(&session);
        let headers = build_headers(&options).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "User tok_123");
    }

    #[test]
    fn content_type_detection_ignores_charset_parameters() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(is_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        assert!(!is_json_content_type(&headers));
    }
}
