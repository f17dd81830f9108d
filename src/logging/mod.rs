//! Logging system for logscope
//!
//! The terminal belongs to the UI, so diagnostics go to a timestamped file
//! under the config directory. Old files are pruned at startup.

mod file_writer;
mod retention;

pub use file_writer::{init_file_logging, LogFileInfo, LoggingGuard};
pub use retention::cleanup_old_logs;

/// File name prefix of this program's own log files
pub const LOG_FILE_PREFIX: &str = "logscope-";
