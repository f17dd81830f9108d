//! Source list key routing

use crossterm::event::{KeyCode, KeyEvent};

use crate::source::SourceCategory;

use super::Action;

/// Map a key pressed while the source list has focus
pub fn route_source_list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Enter => Some(Action::ConfirmSelection),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevCategory),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextCategory),
        KeyCode::Char('r') => Some(Action::RefreshCatalog),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => SourceCategory::from_digit(c).map(Action::SwitchCategory),
        _ => None,
    }
}
