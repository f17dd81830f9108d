//! Filter input pane

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::theme::theme;
use crate::view::{PaneFocus, TextField};

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// First visible char index and the cursor's screen column
///
/// Columns are display cells, so wide characters take two. One cell is kept
/// free for the cursor itself.
fn visible_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let before: Vec<usize> = text.chars().take(cursor).map(char_width).collect();
    let budget = width.saturating_sub(1);

    let mut start = before.len();
    let mut column = 0;
    while start > 0 && column + before[start - 1] <= budget {
        start -= 1;
        column += before[start];
    }
    (start, column)
}

/// Chars from `start` that fit in `width` cells
fn visible_text(text: &str, start: usize, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .skip(start)
        .take_while(|&c| {
            used += char_width(c);
            used <= width
        })
        .collect()
}

/// Render the filter field, placing the terminal cursor when focused
pub fn render_filter_input(frame: &mut Frame, area: Rect, field: &TextField, focused: bool) {
    let t = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(focused))
        .title(PaneFocus::FilterInput.title());

    let inner_width = area.width.saturating_sub(2) as usize;
    let (start, column) = visible_window(field.text(), field.cursor(), inner_width);

    let content = if field.text().is_empty() && !focused {
        Line::from(Span::styled("Tab to filter", t.muted_style()))
    } else {
        let visible = visible_text(field.text(), start, inner_width);
        Line::from(Span::styled(visible, t.input_style()))
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && inner_width > 0 && area.height > 2 {
        frame.set_cursor(area.x + 1 + column as u16, area.y + 1);
    }
}
