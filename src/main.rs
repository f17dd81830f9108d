use anyhow::Result;

use logscope::app::App;
use logscope::config::{self, Config};
use logscope::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config directory exists (creates logs dir too)
    config::ensure_directories()?;

    // Initialize file logging BEFORE any tracing calls
    let (log_file_info, _guard) = logging::init_file_logging(config::logs_dir())?;

    // Clean up old logs (7-day retention)
    if let Ok(count) = logging::cleanup_old_logs(&config::logs_dir()) {
        if count > 0 {
            tracing::info!("Cleaned up {} old log files", count);
        }
    }

    tracing::info!("Logging to: {}", log_file_info.path.display());

    let config = Config::load()?;
    tracing::debug!("Loaded config: {:?}", config);

    // Run the application
    let mut app = App::new(config)?;
    app.run().await
}
