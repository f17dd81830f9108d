//! Pane focus
//!
//! Exactly one pane receives keyboard input at a time. The cycle key moves
//! focus SourceList -> FilterInput -> LogView -> SourceList.

/// Which pane currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneFocus {
    /// Source list on the left
    #[default]
    SourceList,
    /// Filter text field above the log view
    FilterInput,
    /// Log lines
    LogView,
}

impl PaneFocus {
    /// Next pane in the cycle
    pub fn next(self) -> Self {
        match self {
            PaneFocus::SourceList => PaneFocus::FilterInput,
            PaneFocus::FilterInput => PaneFocus::LogView,
            PaneFocus::LogView => PaneFocus::SourceList,
        }
    }

    /// Whether the text caret should be shown
    pub fn cursor_visible(self) -> bool {
        self == PaneFocus::FilterInput
    }

    /// Pane title
    pub fn title(self) -> &'static str {
        match self {
            PaneFocus::SourceList => "Sources",
            PaneFocus::FilterInput => "Filter",
            PaneFocus::LogView => "Logs",
        }
    }
}
