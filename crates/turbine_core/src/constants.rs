//! Shared constants used across Turbine crates.

/// Default base URL for the remote paste API, including the `/api` prefix.
pub const DEFAULT_API_BASE_URL: &str = "https://pastebackend.bobobot.cf/api";

/// Default request timeout for API clients, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Editor mode used when no registry entry matches a file.
pub const PLAIN_TEXT_MODE: &str = "text";

/// Directory under the user's config root that holds client state.
pub const SESSION_DIR_NAME: &str = "turbine";

/// File name of the persisted session inside [`SESSION_DIR_NAME`].
pub const SESSION_FILE_NAME: &str = "session.json";
