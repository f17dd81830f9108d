//! Input handling module
//!
//! Maps keyboard events to actions based on which pane has focus.

mod action;
pub mod dispatcher;
pub mod filter_input;
pub mod log_view;
pub mod source_list;

// Re-export commonly used items
pub use action::Action;
pub use dispatcher::{handle_key_event, route_key};
