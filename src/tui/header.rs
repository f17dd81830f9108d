//! Header component
//!
//! Shows the application title and the category tabs on the left, and either
//! the enumeration warning or the loading indicator on the right.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::source::SourceCategory;
use crate::tui::theme::theme;

/// Application title shown at the start of the header
pub const TITLE: &str = "Logscope";

/// Height constant for the header (including bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Header for the main screen
pub struct Header<'a> {
    /// Active category, highlighted among the tabs
    category: SourceCategory,
    /// Enumeration failure for the active category
    warning: Option<&'a str>,
    /// Display name of the source currently loading
    loading: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(category: SourceCategory) -> Self {
        Self {
            category,
            warning: None,
            loading: None,
        }
    }

    /// Show a warning on the right side
    pub fn with_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    /// Show a loading indicator for the named source
    pub fn with_loading(mut self, loading: Option<&'a str>) -> Self {
        self.loading = loading;
        self
    }

    /// Tab strip text, e.g. `1 Journal  [2 Files]  3 Containers`
    fn tab_spans(&self) -> Vec<Span<'static>> {
        let t = theme();
        let mut spans = Vec::new();
        for (i, category) in SourceCategory::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!("{} {}", category.index() + 1, category.label());
            if *category == self.category {
                spans.push(Span::styled(format!("[{}]", label), t.header_style()));
            } else {
                spans.push(Span::styled(format!(" {} ", label), t.muted_style()));
            }
        }
        spans
    }

    /// Render the header to the given area
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let mut left_spans = vec![
            Span::styled(TITLE, t.header_style()),
            Span::styled(" | ", t.muted_style()),
        ];
        left_spans.extend(self.tab_spans());

        let right_span = match (self.warning, self.loading) {
            (Some(warning), _) => Some(Span::styled(
                format!(" {} ", warning),
                t.warning_banner_style(),
            )),
            (None, Some(name)) => Some(Span::styled(
                format!("Loading {}...", name),
                t.muted_style(),
            )),
            (None, None) => None,
        };

        // Right-align the status after padding
        let width = area.width as usize;
        let left_len: usize = left_spans.iter().map(|s| s.content.chars().count()).sum();
        let right_len = right_span
            .as_ref()
            .map(|s| s.content.chars().count())
            .unwrap_or(0);
        let padding = width.saturating_sub(left_len + right_len);

        let mut line_spans = left_spans;
        if padding > 0 {
            line_spans.push(Span::raw(" ".repeat(padding)));
        }
        line_spans.extend(right_span);

        let paragraph = Paragraph::new(Line::from(line_spans))
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab_text(header: &Header) -> String {
        header
            .tab_spans()
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_header_creation() {
        let header = Header::new(SourceCategory::File);
        assert!(header.warning.is_none());
        assert!(header.loading.is_none());
    }

    #[test]
    fn test_active_tab_is_bracketed() {
        let header = Header::new(SourceCategory::File);
        assert_eq!(tab_text(&header), " 1 Journal   [2 Files]   3 Containers ");
    }

    #[test]
    fn test_header_with_warning() {
        let header = Header::new(SourceCategory::Container).with_warning(Some("docker missing"));
        assert_eq!(header.warning, Some("docker missing"));
    }
}
