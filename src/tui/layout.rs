//! Screen layout
//!
//! Pre-calculates every pane area from the terminal size so the renderer and
//! the page-scroll size agree on the log viewport height.

use ratatui::prelude::*;

use crate::tui::header::HEADER_HEIGHT;

/// Footer height (including top border)
pub const FOOTER_HEIGHT: u16 = 3;

/// Filter box height (one text row plus borders)
pub const FILTER_HEIGHT: u16 = 3;

/// Share of the body width given to the source list, in percent
pub const SOURCE_LIST_PERCENT: u16 = 30;

/// Pre-calculated layout areas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub header: Rect,
    pub sources: Rect,
    pub filter: Rect,
    pub logs: Rect,
    pub footer: Rect,
}

impl PaneLayout {
    pub fn calculate(terminal_size: Rect) -> Self {
        let header_height = HEADER_HEIGHT.min(terminal_size.height);
        let footer_height = FOOTER_HEIGHT.min(terminal_size.height - header_height);
        let body_height = terminal_size
            .height
            .saturating_sub(header_height)
            .saturating_sub(footer_height);

        let header = Rect {
            x: terminal_size.x,
            y: terminal_size.y,
            width: terminal_size.width,
            height: header_height,
        };

        let body_y = terminal_size.y + header_height;
        let sources_width = terminal_size.width * SOURCE_LIST_PERCENT / 100;

        let sources = Rect {
            x: terminal_size.x,
            y: body_y,
            width: sources_width,
            height: body_height,
        };

        // Right column: filter on top, log view below
        let right_x = terminal_size.x + sources_width;
        let right_width = terminal_size.width - sources_width;
        let filter_height = FILTER_HEIGHT.min(body_height);

        let filter = Rect {
            x: right_x,
            y: body_y,
            width: right_width,
            height: filter_height,
        };

        let logs = Rect {
            x: right_x,
            y: body_y + filter_height,
            width: right_width,
            height: body_height - filter_height,
        };

        let footer = Rect {
            x: terminal_size.x,
            y: body_y + body_height,
            width: terminal_size.width,
            height: footer_height,
        };

        Self {
            header,
            sources,
            filter,
            logs,
            footer,
        }
    }

    /// Rows of log text visible inside the log pane border
    pub fn log_viewport_height(&self) -> usize {
        self.logs.height.saturating_sub(2) as usize
    }
}
