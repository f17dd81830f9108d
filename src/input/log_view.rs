//! Log view key routing

use crossterm::event::{KeyCode, KeyEvent};

use crate::view::ScrollDirection;

use super::Action;

/// Map a key pressed while the log view has focus
pub fn route_log_view_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Scroll(ScrollDirection::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Scroll(ScrollDirection::Down)),
        KeyCode::PageUp => Some(Action::PageScroll(ScrollDirection::Up)),
        KeyCode::PageDown => Some(Action::PageScroll(ScrollDirection::Down)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
