//! Persistence for session history and theme preference
//!
//! One JSON document with exactly two keys, written whole on every
//! mutation:
//!
//! ```json
//! { "completedSessions": [1767200000000, ...], "darkMode": "true" }
//! ```
//!
//! The key shape and the flat integer list are kept for compatibility with
//! previously persisted data.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{data_file_path, friendly_io_error_message};
use crate::theme::ThemePreference;

use super::SessionHistory;

/// Why a persist attempt failed
///
/// Persistence failure is never fatal: the in-memory history stays
/// authoritative for the rest of the run and the error only surfaces as a
/// status message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{1}")]
    Write(#[source] std::io::Error, String),
    #[error("failed to serialize session data")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    fn write(e: std::io::Error) -> Self {
        let message = friendly_io_error_message(&e, "Failed to save sessions");
        StoreError::Write(e, message)
    }
}

/// On-disk document
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    #[serde(rename = "completedSessions", default)]
    completed_sessions: Vec<i64>,
    #[serde(rename = "darkMode", default, skip_serializing_if = "Option::is_none")]
    dark_mode: Option<String>,
}

/// Store for the session history and theme preference
#[derive(Debug)]
pub struct HistoryStore {
    store_path: PathBuf,
}

impl HistoryStore {
    /// Store backed by the default data file (~/.focusdots/sessions.json)
    pub fn new() -> Self {
        Self {
            store_path: data_file_path(),
        }
    }

    /// Store backed by an explicit path (used by tests)
    pub fn at_path(store_path: PathBuf) -> Self {
        Self { store_path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.store_path
    }

    /// Load persisted state
    ///
    /// Missing or malformed data is treated as absence: an empty history
    /// and the ambient theme preference supplied by the caller. This never
    /// fails.
    pub fn load(&self, ambient: ThemePreference) -> (SessionHistory, ThemePreference) {
        if !self.store_path.exists() {
            return (SessionHistory::new(), ambient);
        }

        let content = match std::fs::read_to_string(&self.store_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read session data, starting fresh: {}", e);
                return (SessionHistory::new(), ambient);
            }
        };

        let state: PersistedState = match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Malformed session data, starting fresh: {}", e);
                return (SessionHistory::new(), ambient);
            }
        };

        let theme = state
            .dark_mode
            .as_deref()
            .and_then(ThemePreference::from_storage_str)
            .unwrap_or(ambient);

        (SessionHistory::from_millis(state.completed_sessions), theme)
    }

    /// Persist the whole state
    pub fn save(&self, history: &SessionHistory, theme: ThemePreference) -> Result<(), StoreError> {
        let state = PersistedState {
            completed_sessions: history.to_millis(),
            dark_mode: Some(theme.as_storage_str().to_string()),
        };

        let content = serde_json::to_string_pretty(&state)?;
        std::fs::write(&self.store_path, content).map_err(StoreError::write)?;
        Ok(())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
