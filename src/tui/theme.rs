//! Theme module for centralized color and style definitions
//!
//! This module provides semantic color constants and styles used throughout the UI.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with all color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // === UI Elements ===
    /// Primary accent color (headers, titles, active category tab)
    pub accent: Color,
    /// Text color for normal content
    pub text: Color,
    /// Text color for muted/secondary content
    pub text_muted: Color,

    // === Input ===
    /// Color for the filter prompt
    pub input_prompt: Color,

    // === Log content ===
    /// Foreground of filter matches inside log lines
    pub match_fg: Color,
    /// Background of filter matches inside log lines
    pub match_bg: Color,
    /// Color for the unavailable-source placeholder
    pub error_fg: Color,

    // === Banners ===
    /// Warning banner background
    pub warning_bg: Color,
    /// Warning banner foreground
    pub warning_fg: Color,

    // === Borders ===
    /// Normal border color
    pub border: Color,
    /// Focused pane border color
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::White,
            text_muted: Color::DarkGray,

            input_prompt: Color::Magenta,

            match_fg: Color::Black,
            match_bg: Color::Yellow,
            error_fg: Color::Red,

            warning_bg: Color::Yellow,
            warning_fg: Color::Black,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    // === Style Builders ===

    /// Style for headers/titles
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for muted text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for input prompts
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input_prompt)
    }

    /// Style for filter matches
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .bg(self.match_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the unavailable-source placeholder
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }

    /// Style for warning banners
    pub fn warning_banner_style(&self) -> Style {
        Style::default().fg(self.warning_fg).bg(self.warning_bg)
    }

    /// Border style for a pane, highlighted when it has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
