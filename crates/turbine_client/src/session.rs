//! Session context and its file-backed storage boundary.
//!
//! The session (token plus cached user profile) is an explicit value passed
//! into requests, never ambient state. All I/O lives in [`SessionStore`];
//! only the composition root is expected to touch it.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use turbine_core::config;
use turbine_core::constants::{SESSION_DIR_NAME, SESSION_FILE_NAME};
use turbine_core::models::User;

/// Length of the CSRF state issued for an OAuth round-trip.
const OAUTH_STATE_LEN: usize = 32;

/// Signed-in context passed down to API calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque API token, sent verbatim in the `Authorization` header.
    #[serde(default)]
    pub token: Option<String>,
    /// Cached profile of the signed-in user.
    #[serde(default)]
    pub user: Option<User>,
    /// One-shot CSRF state for an in-flight GitHub OAuth round-trip.
    #[serde(default)]
    pub oauth_state: Option<String>,
}

impl Session {
    /// Whether the session carries a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Session persistence failures.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session data error: {0}")]
    Data(#[from] serde_json::Error),
}

/// File-backed session persistence.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `TURBINE_SESSION_PATH`, or the default config location.
    pub fn from_env() -> Self {
        let path = std::env::var("TURBINE_SESSION_PATH")
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(config::expand_tilde)
            .map(PathBuf::from)
            .unwrap_or_else(default_session_path);
        Self { path }
    }

    /// Where the session is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session.
    ///
    /// # Returns
    /// The persisted session; a missing file is an empty session, not an
    /// error.
    pub fn load(&self) -> Result<Session, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Session::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Persist the session, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    /// Remove the stored session, signing the user out.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Issue and persist a fresh CSRF state for an OAuth round-trip.
    ///
    /// # Returns
    /// The state value to embed in the authorize URL.
    pub fn issue_oauth_state(&self) -> Result<String, SessionError> {
        let state: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(OAUTH_STATE_LEN)
            .map(char::from)
            .collect();
        let mut session = self.load()?;
        session.oauth_state = Some(state.clone());
        self.save(&session)?;
        Ok(state)
    }

    /// Take the one-shot CSRF state, clearing it from storage.
    pub fn take_oauth_state(&self) -> Result<Option<String>, SessionError> {
        let mut session = self.load()?;
        let state = session.oauth_state.take();
        if state.is_some() {
            self.save(&session)?;
        }
        Ok(state)
    }
}

fn default_session_path() -> PathBuf {
    config::resolve_home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join(SESSION_DIR_NAME)
        .join(SESSION_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionStore};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::at(dir.path().join("session.json"))
    }

    #[test]
    fn missing_file_loads_as_an_empty_session() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir).load().unwrap();
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn sessions_round_trip_through_the_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let session = Session {
            token: Some("User tok_123".to_string()),
            ..Session::default()
        };
        store.save(&session).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);
        assert!(loaded.is_authenticated());
    }

    #[test]
    fn clear_removes_the_session_and_tolerates_absence() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Session::default()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Session::default());

        // Clearing again is a no-op, not an error.
        store.clear().unwrap();
    }

    #[test]
    fn oauth_state_is_single_use() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let issued = store.issue_oauth_state().unwrap();
        assert_eq!(issued.len(), 32);

        let taken = store.take_oauth_state().unwrap();
        assert_eq!(taken.as_deref(), Some(issued.as_str()));

        // A second take finds nothing: the state is spent.
        assert_eq!(store.take_oauth_state().unwrap(), None);
    }

    #[test]
    fn issuing_a_state_preserves_the_rest_of_the_session() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(&Session {
                token: Some("User tok_123".to_string()),
                ..Session::default()
            })
            .unwrap();
        store.issue_oauth_state().unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token.as_deref(), Some("User tok_123"));
        assert!(loaded.oauth_state.is_some());
    }
}
