//! Application state management

use std::time::{Duration, Instant};

/// A transient footer banner, shown until it expires
#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Mutable UI state for the application
#[derive(Debug, Default)]
pub struct AppState {
    /// Set when the user asks to quit
    pub should_quit: bool,
    /// Set when something changed and the next loop pass must redraw
    pub needs_render: bool,
    /// Transient status banner (persistence failures)
    status: Option<StatusMessage>,
}

impl AppState {
    /// Show a status banner for the given duration
    pub fn set_status(&mut self, text: String, ttl: Duration) {
        self.status = Some(StatusMessage {
            text,
            expires_at: Instant::now() + ttl,
        });
    }

    /// The current banner text, if one is active
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Drop an expired banner; returns true if one was removed
    pub fn tick_status(&mut self) -> bool {
        if let Some(status) = &self.status {
            if Instant::now() >= status.expires_at {
                self.status = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(!state.should_quit);
        assert!(!state.needs_render);
        assert!(state.status_text().is_none());
    }

    #[test]
    fn test_status_lifecycle() {
        let mut state = AppState::default();
        state.set_status("Save failed".to_string(), Duration::from_secs(60));
        assert_eq!(state.status_text(), Some("Save failed"));

        // Far from expiry: nothing removed
        assert!(!state.tick_status());
        assert!(state.status_text().is_some());
    }

    #[test]
    fn test_expired_status_is_dropped() {
        let mut state = AppState::default();
        state.set_status("gone".to_string(), Duration::from_secs(0));
        assert!(state.tick_status());
        assert!(state.status_text().is_none());
        // A second tick has nothing left to drop
        assert!(!state.tick_status());
    }
}
