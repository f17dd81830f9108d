//! Source list pane
//!
//! Lists the sources of the active category with the highlighted one marked.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::source::SourceCatalog;
use crate::tui::theme::theme;
use crate::tui::widgets::selection::{selection_name_style, selection_prefix};
use crate::view::PaneFocus;

/// Render the source list
pub fn render_source_list(frame: &mut Frame, area: Rect, catalog: &SourceCatalog, focused: bool) {
    let t = theme();
    let title = format!(
        "{} - {} ({})",
        PaneFocus::SourceList.title(),
        catalog.category().label(),
        catalog.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(focused))
        .title(title);

    if catalog.is_empty() {
        let message = match catalog.warning() {
            Some(warning) => format!("No sources.\n\n{}", warning),
            None => "No sources.".to_string(),
        };
        let empty = Paragraph::new(message)
            .style(t.muted_style())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = catalog.selected_index();
    let items: Vec<ListItem> = catalog
        .sources()
        .iter()
        .enumerate()
        .map(|(i, source)| {
            let is_selected = selected == Some(i);
            ListItem::new(Line::from(vec![
                Span::styled(selection_prefix(is_selected), t.input_style()),
                Span::styled(
                    source.display_name.as_str(),
                    selection_name_style(is_selected, t),
                ),
            ]))
        })
        .collect();

    // ListState keeps the highlighted row scrolled into view
    let mut list_state = ListState::default().with_selected(selected);
    let list = List::new(items).block(block);
    frame.render_stateful_widget(list, area, &mut list_state);
}
