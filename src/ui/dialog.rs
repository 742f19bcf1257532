//! Modal dialogs: delete/clear confirmations and alerts

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::Alert;
use crate::confirm::{Choice, Confirmation};

use super::centered_rect;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 7;

/// Renders a confirmation prompt with its two buttons
pub fn render_confirmation(frame: &mut Frame, confirmation: &Confirmation) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let selected = confirmation.selected();
    let buttons = Line::from(vec![
        button(confirmation.cancel_label(), selected == Choice::Cancel, Color::Gray),
        Span::raw("   "),
        button(confirmation.confirm_label(), selected == Choice::Confirm, Color::Red),
    ]);

    let lines = vec![
        Line::from(""),
        Line::from(confirmation.message()),
        Line::from(""),
        buttons,
    ];

    let block = Block::default()
        .title(format!(" {} ", confirmation.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// Renders an alert with a single OK button
pub fn render_alert(frame: &mut Frame, alert: &Alert) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from(button("OK", true, Color::Yellow)),
    ];

    let block = Block::default()
        .title(format!(" {} ", alert.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

/// A `[ Label ]` button, reversed when highlighted
fn button(label: &str, highlighted: bool, color: Color) -> Span<'static> {
    let style = if highlighted {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!("[ {} ]", label), style)
}
