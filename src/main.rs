use anyhow::Result;

use focusdots::app::App;
use focusdots::config;
use focusdots::logging;

fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) = logging::init_file_logging(config::logs_dir())?;

    // Clean up old logs
    let retention_days = config::Config::load()
        .map(|c| c.log_retention_days)
        .unwrap_or(logging::DEFAULT_RETENTION_DAYS);
    if let Ok(count) = logging::cleanup_old_logs_with_retention(&config::logs_dir(), retention_days)
    {
        if count > 0 {
            tracing::info!("Cleaned up {} old log files", count);
        }
    }

    tracing::info!("Logging to: {}", log_file_info.path.display());

    // Run the application
    let mut app = App::new()?;
    app.run()
}
