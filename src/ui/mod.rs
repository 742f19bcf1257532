//! UI rendering module for City Weather
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components. Overlays are drawn on top of
//! the main screen in order: help, confirmation prompt, alert.

pub mod dialog;
pub mod help_overlay;
pub mod weather_screen;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;

pub use dialog::{render_alert, render_confirmation};
pub use help_overlay::render as render_help_overlay;
pub use weather_screen::render as render_weather_screen;

/// Renders the whole UI for the current application state
pub fn render(frame: &mut Frame, app: &App) {
    render_weather_screen(frame, app);

    if app.show_help {
        render_help_overlay(frame);
    }
    if let Some(confirmation) = &app.confirmation {
        render_confirmation(frame, confirmation);
    }
    if let Some(alert) = &app.alert {
        render_alert(frame, alert);
    }
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::App;

    /// Renders the app into an 80x30 test terminal and returns one string per row
    pub fn render_lines(app: &App) -> Vec<String> {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| super::render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    pub fn contains(lines: &[String], needle: &str) -> bool {
        lines.iter().any(|line| line.contains(needle))
    }
}
