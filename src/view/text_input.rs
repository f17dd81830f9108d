//! Single-line editable text field
//!
//! The cursor is a character index (not a byte index) in `0..=len`.

/// An edit applied to a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// Insert a character at the cursor
    Insert(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    /// Move the cursor one character left
    Left,
    /// Move the cursor one character right
    Right,
    /// Move the cursor to the start
    Home,
    /// Move the cursor to the end
    End,
}

/// Edit buffer with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `char_index` (or end of text)
    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Apply an edit. Returns true when the text (not just the cursor) changed.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                true
            }
            TextEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_index(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                true
            }
            TextEdit::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.text.remove(at);
                true
            }
            TextEdit::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TextEdit::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            TextEdit::Home => {
                self.cursor = 0;
                false
            }
            TextEdit::End => {
                self.cursor = self.char_count();
                false
            }
        }
    }

    /// Insert a string at the cursor (paste). Control characters are dropped.
    pub fn insert_str(&mut self, s: &str) -> bool {
        let mut changed = false;
        for c in s.chars().filter(|c| !c.is_control()) {
            changed |= self.apply(TextEdit::Insert(c));
        }
        changed
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
