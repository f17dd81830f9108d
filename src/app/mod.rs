//! Application state and main event loop
//!
//! This module ties together the source catalog, the background loader and
//! the terminal UI.

mod state;

pub use state::AppState;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::config::Config;
use crate::input::handle_key_event;
use crate::source::SystemSources;
use crate::tui::layout::PaneLayout;
use crate::tui::views::render_screen;
use crate::tui::Tui;

/// Main application struct
pub struct App {
    /// Application state
    pub(crate) state: AppState,
    /// Terminal UI
    pub(crate) tui: Tui,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let sources = Arc::new(SystemSources::from_config(&config));
        let state = AppState::new(&config, sources.clone(), sources);
        tracing::debug!(
            "Found {} {} sources at startup",
            state.catalog.len(),
            state.catalog.category().label()
        );

        // Create TUI
        let tui = Tui::new()?;

        Ok(Self { state, tui })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        // Enter TUI mode
        self.tui.enter()?;

        tracing::info!("Logscope started. Press Enter to view a source, 'q' to quit.");

        // Main event loop
        let result = self.event_loop().await;

        // Exit TUI mode (also done in Drop, but explicit is clearer)
        self.tui.exit()?;

        result
    }

    /// Main event loop
    async fn event_loop(&mut self) -> Result<()> {
        let tick_rate = Duration::from_millis(16); // ~60fps for smooth rendering

        // Always render on first frame
        self.state.needs_render = true;

        loop {
            // Only render when something has changed
            if self.state.needs_render {
                self.render()?;
                self.state.needs_render = false;
            }

            // Poll for events with timeout
            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => handle_key_event(&mut self.state, key),
                    Event::Paste(text) => self.state.paste(&text),
                    Event::Resize(_, _) => self.state.needs_render = true,
                    _ => {}
                }
            }

            // Swap in finished loads
            self.state.poll_loads();

            // Let the loader task make progress between polls
            tokio::task::yield_now().await;

            // Check if we should quit
            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self) -> Result<()> {
        let size = self.tui.size()?;
        let layout = PaneLayout::calculate(size);

        // Page scrolling moves by one viewport
        self.state.page_size = layout.log_viewport_height().max(1);

        let state = &self.state;
        self.tui.draw(|frame| render_screen(frame, state, &layout))
    }
}
