//! Logscope - terminal log viewer
//!
//! Browse service journals, log files and container logs, pick one source and
//! narrow its lines with a live case-insensitive filter.

pub mod app;
pub mod config;
pub mod input;
pub mod loader;
pub mod logging;
pub mod source;
pub mod tui;
pub mod view;
