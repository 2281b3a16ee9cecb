//! Configuration management for FocusDots

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Categories of disk errors for user-friendly messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskErrorKind {
    /// Disk is full or quota exceeded
    DiskFull,
    /// Permission denied (read or write)
    PermissionDenied,
    /// File or directory not found
    NotFound,
    /// Other IO error
    Other,
}

impl DiskErrorKind {
    /// Get a user-friendly message for this error kind
    pub fn user_message(&self) -> &'static str {
        match self {
            DiskErrorKind::DiskFull => "Disk full - free space needed to save",
            DiskErrorKind::PermissionDenied => "Permission denied writing to ~/.focusdots/",
            DiskErrorKind::NotFound => "File or directory not found",
            DiskErrorKind::Other => "Failed to save data",
        }
    }
}

/// Categorize an IO error into a user-friendly category
pub fn categorize_io_error(e: &std::io::Error) -> DiskErrorKind {
    use std::io::ErrorKind;

    match e.kind() {
        ErrorKind::StorageFull => DiskErrorKind::DiskFull,
        // On some systems, disk full might appear as WriteZero or Other
        ErrorKind::WriteZero => DiskErrorKind::DiskFull,
        ErrorKind::PermissionDenied => DiskErrorKind::PermissionDenied,
        ErrorKind::NotFound => DiskErrorKind::NotFound,

        // Check raw OS error for disk full on Unix
        _ => {
            #[cfg(unix)]
            {
                if let Some(os_error) = e.raw_os_error() {
                    // ENOSPC = 28 on Linux and macOS
                    // EDQUOT = 122 on Linux, 69 on macOS
                    if os_error == 28 || os_error == 122 || os_error == 69 {
                        return DiskErrorKind::DiskFull;
                    }
                    // EACCES = 13 on both
                    if os_error == 13 {
                        return DiskErrorKind::PermissionDenied;
                    }
                }
            }
            DiskErrorKind::Other
        }
    }
}

/// Create a user-friendly error message from an IO error
pub fn friendly_io_error_message(e: &std::io::Error, context: &str) -> String {
    let kind = categorize_io_error(e);
    match kind {
        DiskErrorKind::DiskFull => format!("{}: {}", context, kind.user_message()),
        DiskErrorKind::PermissionDenied => format!("{}: {}", context, kind.user_message()),
        DiskErrorKind::NotFound => format!("{}: file or directory not found", context),
        DiskErrorKind::Other => format!("{}: {}", context, e),
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Countdown duration in minutes (default: 25)
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,

    /// How many dots per row in the session display (default: 7)
    #[serde(default = "default_dots_per_row")]
    pub dots_per_row: u16,

    /// Log retention in days (default: 7)
    #[serde(default = "default_log_retention_days")]
    pub log_retention_days: u64,

    /// Ring the terminal bell when a session completes (default: true)
    #[serde(default = "default_bell_on_complete")]
    pub bell_on_complete: bool,
}

fn default_focus_minutes() -> u32 {
    25 // Pomodoro-style default
}

fn default_dots_per_row() -> u16 {
    7
}

fn default_log_retention_days() -> u64 {
    7
}

fn default_bell_on_complete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            dots_per_row: default_dots_per_row(),
            log_retention_days: default_log_retention_days(),
            bell_on_complete: default_bell_on_complete(),
        }
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_file_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the base configuration directory (~/.focusdots)
/// Falls back to ./.focusdots if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".focusdots")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".focusdots"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the persisted session data file
pub fn data_file_path() -> PathBuf {
    config_dir().join("sessions.json")
}

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Ensure all required directories exist
pub fn ensure_directories() -> Result<()> {
    std::fs::create_dir_all(config_dir()).context("Failed to create config directory")?;
    std::fs::create_dir_all(logs_dir()).context("Failed to create logs directory")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.focus_minutes, 25);
        assert_eq!(config.dots_per_row, 7);
        assert_eq!(config.log_retention_days, 7);
        assert!(config.bell_on_complete);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.focus_minutes, parsed.focus_minutes);
        assert_eq!(config.dots_per_row, parsed.dots_per_row);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("focus_minutes = 50").unwrap();
        assert_eq!(parsed.focus_minutes, 50);
        assert_eq!(parsed.dots_per_row, 7);
        assert!(parsed.bell_on_complete);
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        // Verifies config_dir() does not panic even when falling back
        // to a local directory
        let dir = config_dir();
        assert!(dir.ends_with(".focusdots"));
    }

    #[test]
    fn test_data_file_path() {
        assert!(data_file_path().ends_with(".focusdots/sessions.json"));
    }

    #[test]
    fn test_categorize_not_found() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(categorize_io_error(&e), DiskErrorKind::NotFound);
    }

    #[test]
    fn test_categorize_permission_denied() {
        let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(categorize_io_error(&e), DiskErrorKind::PermissionDenied);
        assert!(friendly_io_error_message(&e, "Failed to save sessions")
            .contains("Permission denied"));
    }

    #[cfg(unix)]
    #[test]
    fn test_categorize_enospc_via_raw_os_error() {
        let e = std::io::Error::from_raw_os_error(28);
        assert_eq!(categorize_io_error(&e), DiskErrorKind::DiskFull);
    }
}
