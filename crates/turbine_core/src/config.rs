//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the Turbine client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL requests are issued against, including the `/api` prefix.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: String) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = resolve_home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    }
    path
}

/// Best-effort home directory resolution across platforms.
///
/// # Returns
/// The home directory, or the current directory when no home-related
/// environment variable is set.
pub fn resolve_home_dir() -> Option<PathBuf> {
    // Prefer explicit HOME if set (Unix, some Windows shells)
    if let Ok(home) = env::var("HOME") {
        if !home.trim().is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows USERPROFILE (standard)
    if let Ok(profile) = env::var("USERPROFILE") {
        if !profile.trim().is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    // Windows legacy HOMEDRIVE + HOMEPATH
    if let (Ok(drive), Ok(path)) = (env::var("HOMEDRIVE"), env::var("HOMEPATH")) {
        if !drive.trim().is_empty() && !path.trim().is_empty() {
            return Some(PathBuf::from(format!("{}{}", drive, path)));
        }
    }

    // Fallback to current directory if available
    std::env::current_dir().ok()
}

/// Strip trailing slashes so routes can be appended verbatim.
fn normalize_base_url(url: String) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TURBINE_API_URL` overrides the base URL and `TURBINE_REQUEST_TIMEOUT`
    /// the per-request timeout.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("TURBINE_API_URL")
                .map(normalize_base_url)
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("TURBINE_REQUEST_TIMEOUT")
                .ok()
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;
    use crate::constants::DEFAULT_API_BASE_URL;

    #[test]
    fn normalize_base_url_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://example.com/api///".to_string()),
            "https://example.com/api"
        );
        assert_eq!(
            normalize_base_url("https://example.com/api".to_string()),
            "https://example.com/api"
        );
    }

    #[test]
    fn normalize_base_url_falls_back_on_blank() {
        assert_eq!(normalize_base_url("   ".to_string()), DEFAULT_API_BASE_URL);
    }
}
