//! Main weather screen rendering
//!
//! Renders the city input, the current result panel and the search history
//! list. The accent color of the last successful search paints the frame.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::data::{format_temperature, CurrentWeather, SearchRecord};

/// Banner shown above the input
const BANNER: &str = "☁🌡🧊☀⛱☔💧🔥🌤";

/// Placeholder shown in the empty input
const PLACEHOLDER: &str = "Enter city name";

/// Visible rows of the history list
const HISTORY_ROWS: u16 = 8;

/// Symbol in front of the selected history row
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Renders the main screen
pub fn render(frame: &mut Frame, app: &App) {
    let accent = app.accent.color();
    let outer = Block::default()
        .title(Span::styled(
            " City Weather ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Banner
            Constraint::Length(3),                // Input
            Constraint::Length(1),                // Status
            Constraint::Length(5),                // Result panel
            Constraint::Length(1),                // History title
            Constraint::Length(HISTORY_ROWS + 2), // History list
            Constraint::Length(1),                // Clear action
            Constraint::Min(0),                   // Spacer
            Constraint::Length(1),                // Footer
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(BANNER).alignment(ratatui::layout::Alignment::Center),
        chunks[0],
    );
    render_input(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);

    if let Some(weather) = &app.current {
        render_result(frame, weather, chunks[3]);
    }

    if !app.history.is_empty() {
        render_history_title(frame, app, chunks[4]);
        render_history(frame, app, chunks[5]);
        render_clear_action(frame, chunks[6]);
    }

    render_footer(frame, app, chunks[8]);
}

/// Renders the city input box and places the terminal cursor in it
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let block = Block::default()
        .title(" City ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let cursor_col = app.input.cursor_width() as u16;
    let scroll = input_scroll(cursor_col, inner.width);

    let content = if app.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input.value().to_string())
    };

    frame.render_widget(
        Paragraph::new(content).block(block).scroll((0, scroll)),
        area,
    );

    let modal_open = app.alert.is_some() || app.confirmation.is_some() || app.show_help;
    if focused && !modal_open && inner.width > 0 {
        frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }
}

/// Columns to scroll the input so the cursor stays in a `width` wide box
fn input_scroll(cursor_col: u16, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    cursor_col.saturating_sub(width - 1)
}

/// Renders the fetch indicator or the submit hint
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.is_fetching() {
        spans.push(Span::styled(
            format!("Fetching… ({} pending)", app.in_flight),
            Style::default().fg(Color::Cyan),
        ));
    } else {
        spans.push(Span::styled(
            "Enter: Get Weather",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(updated) = app.last_updated {
        spans.push(Span::styled(
            format!("   Updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the current result panel
fn render_result(frame: &mut Frame, weather: &CurrentWeather, area: Rect) {
    let lines = vec![
        Line::from(weather.city_line()),
        Line::from(weather.temperature_line()),
        Line::from(weather.condition_line()),
    ];

    let block = Block::default()
        .title(" Current Weather ")
        .borders(Borders::ALL);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_history_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Search History", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" ({})", app.history.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

/// Renders the scrollable history list
fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::History;
    let border_color = if focused { Color::Yellow } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let row_width = block
        .inner(area)
        .width
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;

    let items: Vec<ListItem> = app
        .history
        .iter()
        .map(|record| ListItem::new(history_row(record, row_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    // The selection only shows while the list has focus
    let selected = focused.then_some(app.selected);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

/// One history row: the name, its snapshot, and the delete marker on the right
fn history_row(record: &SearchRecord, width: usize) -> Line<'static> {
    let details = format!(
        "  {}, {}",
        format_temperature(record.temperature),
        record.condition
    );
    let used = record.name.chars().count() + details.chars().count();
    let padding = width.saturating_sub(used + 1).max(1);

    Line::from(vec![
        Span::styled(
            record.name.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(details, Style::default().fg(Color::Gray)),
        Span::raw(" ".repeat(padding)),
        Span::styled("X", Style::default().fg(Color::Red)),
    ])
}

fn render_clear_action(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Clear",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (c)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the key hints for the focused area
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Input => "Enter search  Tab history  F1 help  Esc quit",
        Focus::History => {
            "↑↓ select  Enter search again  x delete  c clear  Tab input  ? help  q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        area,
    );
}
