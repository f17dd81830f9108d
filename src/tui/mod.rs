//! Terminal UI module
//!
//! This module handles all terminal rendering and UI components using Ratatui.

pub mod header;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;

pub use header::Header;
pub use layout::PaneLayout;
pub use theme::{theme, Theme};

use std::io::{self, stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;

/// Where teardown problems are reported
#[derive(Debug, Clone, Copy)]
enum Report {
    /// Normal exit: tracing is up
    Log,
    /// Drop during unwinding: tracing may be gone, use stderr
    Stderr,
}

impl Report {
    fn failure(self, step: &str, error: impl std::fmt::Display) {
        match self {
            Report::Log => tracing::warn!("Terminal restore: {} failed: {}", step, error),
            Report::Stderr => eprintln!("logscope: terminal restore: {} failed: {}", step, error),
        }
    }
}

/// Terminal modes switched on by [`Tui::enter`]
///
/// Each flag is cleared as soon as its mode is undone, so restoring twice
/// (explicit exit, then drop) touches the terminal only once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Modes {
    raw: bool,
    alternate_screen: bool,
    /// Key release reporting, when the terminal supports it
    keyboard_enhancement: bool,
    /// Paste arrives as one event so it can go into the filter
    bracketed_paste: bool,
}

impl Modes {
    fn any(&self) -> bool {
        self.raw || self.alternate_screen || self.keyboard_enhancement || self.bracketed_paste
    }
}

/// Terminal UI wrapper
///
/// Owns the ratatui terminal and the terminal modes the viewer needs.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    modes: Modes,
}

impl Tui {
    /// Create a new TUI instance (the terminal is untouched until `enter`)
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(Self {
            terminal,
            modes: Modes::default(),
        })
    }

    /// Switch to raw mode on the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        self.modes.raw = true;
        stdout().execute(EnterAlternateScreen)?;
        self.modes.alternate_screen = true;

        // Optional modes: the viewer works without them
        self.modes.keyboard_enhancement = supports_keyboard_enhancement().unwrap_or(false)
            && stdout()
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        self.modes.bracketed_paste = stdout().execute(EnableBracketedPaste).is_ok();
        tracing::debug!("Terminal modes enabled: {:?}", self.modes);

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal
    pub fn exit(&mut self) -> Result<()> {
        self.restore(Report::Log);
        Ok(())
    }

    /// Undo every enabled mode in reverse order of `enter`
    fn restore(&mut self, report: Report) {
        if !self.modes.any() {
            return;
        }

        // Pop keyboard enhancement while still in raw mode; the terminal may
        // answer with CSI u sequences that must be drained, not echoed
        if std::mem::take(&mut self.modes.keyboard_enhancement) {
            if let Err(e) = stdout().execute(PopKeyboardEnhancementFlags) {
                report.failure("pop keyboard flags", e);
            }
            let _ = stdout().flush();
            while event::poll(Duration::from_millis(10)).unwrap_or(false) {
                let _ = event::read();
            }
        }
        if std::mem::take(&mut self.modes.bracketed_paste) {
            if let Err(e) = stdout().execute(DisableBracketedPaste) {
                report.failure("disable bracketed paste", e);
            }
        }
        if let Err(e) = self.terminal.show_cursor() {
            report.failure("show cursor", e);
        }
        if std::mem::take(&mut self.modes.alternate_screen) {
            if let Err(e) = stdout().execute(LeaveAlternateScreen) {
                report.failure("leave alternate screen", e);
            }
        }
        if std::mem::take(&mut self.modes.raw) {
            if let Err(e) = disable_raw_mode() {
                report.failure("disable raw mode", e);
            }
        }
        if let Report::Log = report {
            tracing::debug!("Terminal restored");
        }
    }

    /// Get terminal size
    pub fn size(&self) -> Result<Rect> {
        Ok(self.terminal.size()?)
    }

    /// Draw a frame
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.restore(Report::Stderr);
    }
}
