//! Helper functions for consistent selection rendering in lists.
//!
//! Selected items get an arrow prefix and bold accent text. No background
//! highlighting is used.

use ratatui::style::{Modifier, Style};

use crate::tui::theme::Theme;

/// Returns the selection prefix for a list item.
///
/// Selected items get an arrow (`▶ `), unselected items get two spaces for alignment.
///
/// # Example
/// ```no_run
/// # use logscope::tui::widgets::selection::selection_prefix;
/// let prefix = selection_prefix(true);
/// assert_eq!(prefix, "▶ ");
/// ```
pub fn selection_prefix(is_selected: bool) -> &'static str {
    if is_selected {
        "▶ "
    } else {
        "  "
    }
}

/// Returns a style for an item name with selection styling.
///
/// # Example
/// ```no_run
/// # use logscope::tui::widgets::selection::selection_name_style;
/// # use logscope::tui::theme::theme;
/// # use ratatui::text::Span;
/// let t = theme();
/// let style = selection_name_style(true, &t);
/// let span = Span::styled("nginx", style);
/// // Creates a bold cyan "nginx" span
/// ```
pub fn selection_name_style(is_selected: bool, theme: &Theme) -> Style {
    Style::default()
        .fg(if is_selected {
            theme.accent
        } else {
            theme.text
        })
        .add_modifier(if is_selected {
            Modifier::BOLD
        } else {
            Modifier::empty()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_selection_prefix() {
        assert_eq!(selection_prefix(true), "▶ ");
        assert_eq!(selection_prefix(false), "  ");
    }

    #[test]
    fn test_selection_name_style() {
        let theme = Theme::dark();
        let selected = selection_name_style(true, &theme);
        let unselected = selection_name_style(false, &theme);

        assert_eq!(selected.fg, Some(Color::Cyan));
        assert_eq!(unselected.fg, Some(Color::White));
        assert!(selected.add_modifier.contains(Modifier::BOLD));
        assert!(!unselected.add_modifier.contains(Modifier::BOLD));
    }
}
