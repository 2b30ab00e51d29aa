use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::ThemeMode;

/// Render the header block: store title on the accent band, theme hint
/// on the right, and the create-todo trigger row underneath.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let band = Style::default()
        .fg(app.theme.button_text)
        .bg(app.theme.primary);

    // "todo" → "T O D O"
    let title: String = app
        .config
        .store
        .name
        .to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let theme_hint = match app.theme_mode {
        ThemeMode::Light => "☾ dark [t]",
        ThemeMode::Dark => "☀ light [t]",
    };

    let mut title_spans = vec![Span::styled(
        format!("  {}", title),
        band.add_modifier(Modifier::BOLD),
    )];
    let used = 2 + title.chars().count();
    let hint_width = theme_hint.chars().count() + 2;
    if used + hint_width < width {
        title_spans.push(Span::styled(" ".repeat(width - used - hint_width), band));
        title_spans.push(Span::styled(format!("{}  ", theme_hint), band));
    }

    // Faux input row, the modal trigger
    let trigger_style = Style::default()
        .fg(app.theme.text_secondary)
        .bg(app.theme.surface);
    let prompt = "Create a new todo…";
    let padding = width.saturating_sub(5 + prompt.chars().count() + 5).max(1);
    let trigger = vec![
        Span::styled("  ◯  ", trigger_style),
        Span::styled(prompt, trigger_style),
        Span::styled(format!("{}[a]  ", " ".repeat(padding)), trigger_style),
    ];

    let lines = vec![
        Line::from(Span::styled(" ".repeat(width), band)),
        Line::from(title_spans),
        Line::from(Span::styled(" ".repeat(width), band)),
        Line::from(trigger),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
