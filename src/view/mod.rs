//! View state for the log pane
//!
//! Raw lines, the filter, the derived filtered lines and the scroll offset
//! form one unit. Buffers are shared `Arc`s replaced wholesale, never
//! edited in place, and every change to the raw lines or the filter text
//! recomputes the filtered lines and resets the scroll offset.

pub mod filter;
pub mod focus;
pub mod scroll;
pub mod text_input;

pub use focus::PaneFocus;
pub use scroll::{ScrollDirection, ScrollState};
pub use text_input::{TextEdit, TextField};

use std::sync::Arc;

use crate::source::Source;

use self::filter::{apply_filter, normalize_filter_text};

/// Raw buffer, filter and viewport for the active source
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    source: Option<Source>,
    raw: Arc<Vec<String>>,
    filtered: Arc<Vec<String>>,
    failed: bool,
    filter_input: TextField,
    filter_text: String,
    scroll: ScrollState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new source was selected: drop the old content and the filter
    pub fn begin_load(&mut self, source: Source) {
        self.source = Some(source);
        self.raw = Arc::new(Vec::new());
        self.failed = false;
        self.filter_input.clear();
        self.filter_text.clear();
        self.refilter();
    }

    /// Swap in a completed buffer
    pub fn commit(&mut self, source: Source, lines: Arc<Vec<String>>, failed: bool) {
        tracing::debug!("Showing {} lines from {}", lines.len(), source.display_name);
        self.source = Some(source);
        self.raw = lines;
        self.failed = failed;
        self.refilter();
    }

    /// Edit the filter field; re-filters when the normalized text changed
    pub fn edit_filter(&mut self, edit: TextEdit) {
        if self.filter_input.apply(edit) {
            self.sync_filter_text();
        }
    }

    /// Paste text into the filter field
    pub fn paste_filter(&mut self, text: &str) {
        if self.filter_input.insert_str(text) {
            self.sync_filter_text();
        }
    }

    fn sync_filter_text(&mut self) {
        let normalized = normalize_filter_text(self.filter_input.text());
        if normalized != self.filter_text {
            self.filter_text = normalized;
            self.refilter();
        }
    }

    /// Recompute the filtered lines. A failure placeholder is never filtered
    /// out, so the reason stays visible whatever the filter says.
    fn refilter(&mut self) {
        self.filtered = if self.filter_text.is_empty() || self.failed {
            Arc::clone(&self.raw)
        } else {
            Arc::new(apply_filter(&self.raw, &self.filter_text))
        };
        self.scroll.reset();
    }

    /// Scroll one line
    pub fn scroll(&mut self, direction: ScrollDirection) {
        self.scroll.scroll(direction, self.filtered.len());
    }

    /// Scroll one page
    pub fn page(&mut self, direction: ScrollDirection, page_size: usize) {
        self.scroll.page(direction, page_size, self.filtered.len());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom(self.filtered.len());
    }

    /// Lines visible in a viewport of `height` rows
    pub fn visible_lines(&self, height: usize) -> &[String] {
        let start = self.scroll.offset().min(self.filtered.len());
        let end = start.saturating_add(height).min(self.filtered.len());
        &self.filtered[start..end]
    }

    pub fn source(&self) -> Option<&Source> {
        self.source.as_ref()
    }

    pub fn raw(&self) -> &Arc<Vec<String>> {
        &self.raw
    }

    pub fn filtered(&self) -> &Arc<Vec<String>> {
        &self.filtered
    }

    /// Whether the current buffer is a load-failure placeholder
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn filter_input(&self) -> &TextField {
        &self.filter_input
    }

    /// Normalized filter text in effect
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn offset(&self) -> usize {
        self.scroll.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceCategory;

    fn lines(items: &[&str]) -> Arc<Vec<String>> {
        Arc::new(items.iter().map(|s| s.to_string()).collect())
    }

    fn source(id: &str) -> Source {
        Source::new(SourceCategory::File, id)
    }

    fn type_filter(view: &mut ViewState, text: &str) {
        for c in text.chars() {
            view.edit_filter(TextEdit::Insert(c));
        }
    }

    #[test]
    fn test_commit_with_empty_filter_shares_buffer() {
        let mut view = ViewState::new();
        let raw = lines(&["x", "y", "z"]);
        view.commit(source("a"), Arc::clone(&raw), false);
        assert!(Arc::ptr_eq(view.filtered(), &raw));
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_filter_keystrokes_refilter_and_reset_offset() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["ERROR a", "info b", "ERROR c"]), false);
        view.scroll(ScrollDirection::Down);
        assert_eq!(view.offset(), 1);

        type_filter(&mut view, "error");
        assert_eq!(view.filter_text(), "error");
        assert_eq!(**view.filtered(), vec!["ERROR a", "ERROR c"]);
        assert_eq!(view.offset(), 0);

        for _ in 0..5 {
            view.edit_filter(TextEdit::Backspace);
        }
        assert_eq!(view.filtered().len(), 3);
    }

    #[test]
    fn test_whitespace_only_edits_do_not_reset_scroll() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["a 1", "a 2", "a 3"]), false);
        type_filter(&mut view, "a");
        view.scroll(ScrollDirection::Down);
        view.edit_filter(TextEdit::Insert(' '));
        assert_eq!(view.filter_text(), "a");
        assert_eq!(view.offset(), 1);
    }

    #[test]
    fn test_cursor_moves_do_not_refilter() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["a", "b", "c"]), false);
        view.scroll(ScrollDirection::Down);
        view.edit_filter(TextEdit::Left);
        view.edit_filter(TextEdit::Right);
        assert_eq!(view.offset(), 1);
    }

    #[test]
    fn test_new_commit_resets_offset() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["1", "2", "3"]), false);
        view.scroll_to_bottom();
        assert_eq!(view.offset(), 2);
        view.commit(source("a"), lines(&["x", "y", "z"]), false);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_begin_load_clears_filter_and_content() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["ERROR a", "info"]), false);
        type_filter(&mut view, "error");

        view.begin_load(source("b"));
        assert_eq!(view.filter_text(), "");
        assert_eq!(view.filter_input().text(), "");
        assert!(view.raw().is_empty());
        assert!(view.filtered().is_empty());
        assert_eq!(view.source().unwrap().identifier, "b");
    }

    #[test]
    fn test_filter_typed_while_loading_applies_to_result() {
        let mut view = ViewState::new();
        view.begin_load(source("a"));
        type_filter(&mut view, "warn");
        view.commit(source("a"), lines(&["WARN x", "info"]), false);
        assert_eq!(**view.filtered(), vec!["WARN x"]);
    }

    #[test]
    fn test_failed_load_ignores_pending_filter() {
        let mut view = ViewState::new();
        view.begin_load(source("ghost"));
        type_filter(&mut view, "err");

        let placeholder = lines(&["source unavailable: no such container: ghost"]);
        view.commit(source("ghost"), Arc::clone(&placeholder), true);
        assert!(view.failed());
        assert!(Arc::ptr_eq(view.filtered(), &placeholder));

        // Further edits keep it visible too
        type_filter(&mut view, "xyz");
        assert_eq!(view.filtered().len(), 1);

        // A successful load filters normally again
        view.commit(source("ghost"), lines(&["error here", "info"]), false);
        assert_eq!(**view.filtered(), vec!["error here"]);
    }

    #[test]
    fn test_scroll_down_at_last_line_is_noop() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["1", "2", "3"]), false);
        view.scroll_to_bottom();
        view.scroll(ScrollDirection::Down);
        assert_eq!(view.offset(), 2);
    }

    #[test]
    fn test_visible_lines() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["1", "2", "3", "4", "5"]), false);
        assert_eq!(view.visible_lines(2), &["1".to_string(), "2".to_string()]);
        view.page(ScrollDirection::Down, 3);
        assert_eq!(view.visible_lines(10), &["4".to_string(), "5".to_string()]);
        assert!(ViewState::new().visible_lines(10).is_empty());
    }

    #[test]
    fn test_paste_filter() {
        let mut view = ViewState::new();
        view.commit(source("a"), lines(&["alpha", "beta"]), false);
        view.paste_filter("  BET ");
        assert_eq!(view.filter_text(), "BET");
        assert_eq!(**view.filtered(), vec!["beta"]);
    }
}
