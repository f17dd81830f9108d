//! Application state management
//!
//! Everything the UI shows lives here, independent of the terminal: the
//! catalog, the loader, the log view state and the pane focus. Actions from
//! the input layer are applied through [`AppState::apply`].

use std::sync::Arc;

use crate::config::Config;
use crate::input::Action;
use crate::loader::{LoaderOptions, LogLoader};
use crate::source::{LineSource, SourceCatalog, SourceCategory, SourceEnumerator};
use crate::view::{PaneFocus, ViewState};

/// Application state
pub struct AppState {
    /// Pane receiving keyboard input
    pub focus: PaneFocus,
    /// Sources for the active category
    pub catalog: SourceCatalog,
    /// Raw/filtered lines and scroll position
    pub view: ViewState,
    /// Background loader for the log view
    pub loader: LogLoader,
    /// Lines per page scroll (updated from the rendered viewport height)
    pub page_size: usize,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Whether the UI needs to be re-rendered
    pub needs_render: bool,
    enumerator: Arc<dyn SourceEnumerator>,
}

impl AppState {
    /// Build state and enumerate the configured startup category
    pub fn new(
        config: &Config,
        enumerator: Arc<dyn SourceEnumerator>,
        line_source: Arc<dyn LineSource>,
    ) -> Self {
        let catalog = SourceCatalog::load(enumerator.as_ref(), config.default_category);
        Self {
            focus: PaneFocus::default(),
            catalog,
            view: ViewState::new(),
            loader: LogLoader::new(line_source, LoaderOptions::from_config(config)),
            page_size: config.page_size,
            should_quit: false,
            needs_render: true,
            enumerator,
        }
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::CycleFocus => self.focus = self.focus.next(),
            Action::SelectNext => self.catalog.select_next(),
            Action::SelectPrev => self.catalog.select_prev(),
            Action::ConfirmSelection => {
                self.confirm_selection();
            }
            Action::NextCategory => self.switch_category(self.catalog.category().next()),
            Action::PrevCategory => self.switch_category(self.catalog.category().prev()),
            Action::SwitchCategory(category) => self.switch_category(category),
            Action::RefreshCatalog => self.catalog.refresh(self.enumerator.as_ref()),
            Action::Scroll(direction) => self.view.scroll(direction),
            Action::PageScroll(direction) => self.view.page(direction, self.page_size),
            Action::ScrollToTop => self.view.scroll_to_top(),
            Action::ScrollToBottom => self.view.scroll_to_bottom(),
            Action::EditFilter(edit) => self.view.edit_filter(edit),
        }
        self.needs_render = true;
    }

    /// Load the highlighted source.
    ///
    /// No-op on an empty catalog. Returns the load generation when a load
    /// was started.
    pub fn confirm_selection(&mut self) -> Option<u64> {
        let source = self.catalog.selected()?.clone();
        self.view.begin_load(source.clone());
        Some(self.loader.load(source))
    }

    fn switch_category(&mut self, category: SourceCategory) {
        tracing::debug!("Switching to {} sources", category.label());
        self.catalog
            .switch_category(self.enumerator.as_ref(), category);
    }

    /// Commit a finished load, if one arrived. Returns true when the view changed.
    pub fn poll_loads(&mut self) -> bool {
        match self.loader.poll() {
            Some(loaded) => {
                self.view.commit(loaded.source, loaded.lines, loaded.failed);
                self.needs_render = true;
                true
            }
            None => false,
        }
    }

    /// Paste text into the filter (ignored unless the filter has focus)
    pub fn paste(&mut self, text: &str) {
        if self.focus != PaneFocus::FilterInput {
            return;
        }
        let first_line = text.lines().next().unwrap_or("");
        self.view.paste_filter(first_line);
        self.needs_render = true;
    }
}
