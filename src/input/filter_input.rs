//! Filter field key routing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::TextEdit;

use super::Action;

/// Map a key pressed while the filter field has focus
///
/// Every printable key is text here, including `q` and digits.
pub fn route_filter_input_key(key: KeyEvent) -> Option<Action> {
    let edit = match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            TextEdit::Insert(c)
        }
        KeyCode::Backspace => TextEdit::Backspace,
        KeyCode::Delete => TextEdit::Delete,
        KeyCode::Left => TextEdit::Left,
        KeyCode::Right => TextEdit::Right,
        KeyCode::Home => TextEdit::Home,
        KeyCode::End => TextEdit::End,
        _ => return None,
    };
    Some(Action::EditFilter(edit))
}
