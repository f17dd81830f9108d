//! Viewport offset over the filtered lines
//!
//! The offset is the index of the top visible line and always satisfies
//! `0 <= offset <= max(0, len - 1)`. Moving past either end is a no-op.

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Largest valid offset for a sequence of `len` lines
pub fn max_offset(len: usize) -> usize {
    len.saturating_sub(1)
}

/// Move `offset` one line in `direction`, clamped to the valid range
pub fn scroll(direction: ScrollDirection, offset: usize, len: usize) -> usize {
    scroll_by(direction, offset, 1, len)
}

/// Move `offset` by `amount` lines in `direction`, clamped to the valid range
pub fn scroll_by(direction: ScrollDirection, offset: usize, amount: usize, len: usize) -> usize {
    let offset = offset.min(max_offset(len));
    match direction {
        ScrollDirection::Up => offset.saturating_sub(amount),
        ScrollDirection::Down => offset.saturating_add(amount).min(max_offset(len)),
    }
}

/// Scroll position for the log view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
}

impl ScrollState {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move one line
    pub fn scroll(&mut self, direction: ScrollDirection, len: usize) {
        self.offset = scroll(direction, self.offset, len);
    }

    /// Move one page
    pub fn page(&mut self, direction: ScrollDirection, page_size: usize, len: usize) {
        self.offset = scroll_by(direction, self.offset, page_size.max(1), len);
    }

    /// Jump to the first line
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump so the last line is at the top of the viewport
    pub fn to_bottom(&mut self, len: usize) {
        self.offset = max_offset(len);
    }

    /// Forget the position (the underlying sequence changed)
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
