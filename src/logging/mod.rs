//! Logging system for FocusDots
//!
//! The terminal is owned by the TUI, so logs go to a timestamped file under
//! the config directory, with age-based retention.

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention, DEFAULT_RETENTION_DAYS};
