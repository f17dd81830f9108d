//! Main input dispatch logic
//!
//! Routes keyboard events to an [`Action`] based on which pane has focus.
//! Routing is a pure function of the focus and the key; applying the action
//! is left to [`AppState::apply`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;
use crate::view::PaneFocus;

use super::filter_input::route_filter_input_key;
use super::log_view::route_log_view_key;
use super::source_list::route_source_list_key;
use super::Action;

/// Map a key event to an action for the given focus
pub fn route_key(focus: PaneFocus, key: KeyEvent) -> Option<Action> {
    // Release events only arrive with keyboard enhancement enabled
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global keys work in every pane
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return Some(Action::Quit);
    }
    if key.code == KeyCode::Tab {
        return Some(Action::CycleFocus);
    }

    match focus {
        PaneFocus::SourceList => route_source_list_key(key),
        PaneFocus::FilterInput => route_filter_input_key(key),
        PaneFocus::LogView => route_log_view_key(key),
    }
}

/// Handle a key event by routing it and applying the result
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    if let Some(action) = route_key(state.focus, key) {
        state.apply(action);
    }
}
