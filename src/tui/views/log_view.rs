//! Log view pane
//!
//! Displays the filtered lines of the active source with scrolling and the
//! filter matches highlighted.

use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::source::Source;
use crate::tui::theme::theme;
use crate::view::filter::match_ranges;
use crate::view::{PaneFocus, ViewState};

/// Split a line into spans with every filter match highlighted
fn highlight_line<'a>(line: &'a str, needle_lower: &str, base: Style, hit: Style) -> Line<'a> {
    let ranges = match_ranges(line, needle_lower);
    if ranges.is_empty() {
        return Line::from(Span::styled(line, base));
    }

    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last = 0;
    for range in ranges {
        if range.start > last {
            spans.push(Span::styled(&line[last..range.start], base));
        }
        spans.push(Span::styled(&line[range.clone()], hit));
        last = range.end;
    }
    if last < line.len() {
        spans.push(Span::styled(&line[last..], base));
    }
    Line::from(spans)
}

/// Message shown instead of lines, if the view has nothing to show
fn placeholder(view: &ViewState, pending: Option<&Source>) -> Option<String> {
    match (view.source(), pending) {
        (None, _) => Some("Select a source and press Enter to view its logs.".to_string()),
        (Some(_), Some(loading)) if view.raw().is_empty() => {
            Some(format!("Loading {}...", loading.display_name))
        }
        (Some(_), _) if view.raw().is_empty() => Some("No log lines.".to_string()),
        (Some(_), _) if view.filtered().is_empty() => {
            Some(format!("No lines match \"{}\".", view.filter_text()))
        }
        _ => None,
    }
}

/// Render the log view
pub fn render_log_view(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    pending: Option<&Source>,
    focused: bool,
) {
    let t = theme();
    let total = view.filtered().len();
    let visible_height = area.height.saturating_sub(2) as usize;
    let visible = view.visible_lines(visible_height);
    let offset = view.offset();

    let mut title = PaneFocus::LogView.title().to_string();
    if let Some(source) = view.source() {
        title.push_str(&format!(": {}", source.display_name));
    }
    if !visible.is_empty() {
        title.push_str(&format!(
            " [{}-{} of {}]",
            offset + 1,
            offset + visible.len(),
            total
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(focused))
        .title(title);

    if let Some(message) = placeholder(view, pending) {
        let empty = Paragraph::new(message).style(t.muted_style()).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let base = if view.failed() {
        t.error_style()
    } else {
        Style::default().fg(t.text)
    };
    let needle = view.filter_text().to_lowercase();
    let lines: Vec<Line> = visible
        .iter()
        .map(|line| highlight_line(line, &needle, base, t.match_style()))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    // Scrollbar
    if total > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        let mut scrollbar_state = ScrollbarState::new(total)
            .position(offset)
            .viewport_content_length(visible_height);

        // Inside the right border
        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceCategory;
    use crate::view::TextEdit;
    use std::sync::Arc;

    fn span_texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_line_splits_around_matches() {
        let base = Style::default();
        let hit = Style::default().bold();
        let line = highlight_line("an Error and an error", "error", base, hit);
        assert_eq!(span_texts(&line), vec!["an ", "Error", " and an ", "error"]);
        assert_eq!(line.spans[1].style, hit);
        assert_eq!(line.spans[0].style, base);
    }

    #[test]
    fn test_highlight_line_without_filter() {
        let line = highlight_line("plain", "", Style::default(), Style::default());
        assert_eq!(span_texts(&line), vec!["plain"]);
    }

    #[test]
    fn test_placeholders() {
        let mut view = ViewState::new();
        assert!(placeholder(&view, None).unwrap().starts_with("Select a source"));

        let source = Source::new(SourceCategory::Container, "web");
        view.begin_load(source.clone());
        assert_eq!(
            placeholder(&view, Some(&source)).as_deref(),
            Some("Loading web...")
        );

        view.commit(source.clone(), Arc::new(Vec::new()), false);
        assert_eq!(placeholder(&view, None).as_deref(), Some("No log lines."));

        view.commit(source, Arc::new(vec!["info".to_string()]), false);
        assert_eq!(placeholder(&view, None), None);
        view.edit_filter(TextEdit::Insert('x'));
        assert_eq!(
            placeholder(&view, None).as_deref(),
            Some("No lines match \"x\".")
        );
    }
}
