use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): a transient status message
/// if one is pending, otherwise key hints for the current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.text_secondary).bg(bg);

    let line = if let Some(message) = &app.status {
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.text).bg(bg),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate => "j/k move · space done · a add · d delete · / search · f filter · q quit",
            Mode::Search => "type to search · Enter keep · Esc clear",
            Mode::Modal => "Tab next field · Enter create · Esc cancel",
        };
        Line::from(Span::styled(format!("  {}", hint), dim))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
