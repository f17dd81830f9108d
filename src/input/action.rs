//! Actions produced by key routing

use crate::source::SourceCategory;
use crate::view::{ScrollDirection, TextEdit};

/// A state change requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Move focus to the next pane
    CycleFocus,
    /// Highlight the next source
    SelectNext,
    /// Highlight the previous source
    SelectPrev,
    /// Load the highlighted source
    ConfirmSelection,
    /// Show the next category
    NextCategory,
    /// Show the previous category
    PrevCategory,
    /// Show a specific category
    SwitchCategory(SourceCategory),
    /// Re-enumerate the current category
    RefreshCatalog,
    /// Scroll the log view one line
    Scroll(ScrollDirection),
    /// Scroll the log view one page
    PageScroll(ScrollDirection),
    /// Jump to the first log line
    ScrollToTop,
    /// Jump to the last log line
    ScrollToBottom,
    /// Edit the filter text
    EditFilter(TextEdit),
}
