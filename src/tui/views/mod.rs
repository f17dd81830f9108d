//! View rendering modules
//!
//! Each pane has its own module; [`render_screen`] lays them out.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::tui::header::Header;
use crate::tui::layout::PaneLayout;
use crate::tui::theme::theme;
use crate::view::PaneFocus;

mod filter_input;
mod log_view;
mod source_list;

pub use filter_input::render_filter_input;
pub use log_view::render_log_view;
pub use source_list::render_source_list;

/// Key hints for the footer, per focused pane
pub fn footer_hint(focus: PaneFocus) -> &'static str {
    match focus {
        PaneFocus::SourceList => {
            "↑/k ↓/j: select | Enter: view | ←/→ 1-3: category | r: refresh | Tab: filter | q: quit"
        }
        PaneFocus::FilterInput => "type to filter | ←/→ Home/End: move | Tab: logs | Ctrl+c: quit",
        PaneFocus::LogView => {
            "↑/k ↓/j: scroll | PgUp/PgDn: page | g: top | G: bottom | Tab: sources | q: quit"
        }
    }
}

/// Render the whole screen
pub fn render_screen(frame: &mut Frame, state: &AppState, layout: &PaneLayout) {
    let pending = state.loader.pending();

    Header::new(state.catalog.category())
        .with_warning(state.catalog.warning())
        .with_loading(pending.map(|s| s.display_name.as_str()))
        .render(frame, layout.header);

    render_source_list(
        frame,
        layout.sources,
        &state.catalog,
        state.focus == PaneFocus::SourceList,
    );
    render_filter_input(
        frame,
        layout.filter,
        state.view.filter_input(),
        state.focus == PaneFocus::FilterInput,
    );
    render_log_view(
        frame,
        layout.logs,
        &state.view,
        pending,
        state.focus == PaneFocus::LogView,
    );

    let footer = Paragraph::new(footer_hint(state.focus))
        .style(theme().muted_style())
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, layout.footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_hint_mentions_focus_keys() {
        assert!(footer_hint(PaneFocus::SourceList).contains("Enter"));
        assert!(footer_hint(PaneFocus::FilterInput).contains("type to filter"));
        assert!(footer_hint(PaneFocus::LogView).contains("PgUp"));
    }
}
