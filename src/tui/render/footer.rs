use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::filter::FilterTag;
use crate::tui::app::App;

/// Render the footer bar: item count, filter tags, clear-completed hint.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let bg = app.theme.surface;
    let dim = Style::default().fg(app.theme.text_secondary).bg(bg);

    let count = format!("  {} items left", app.visible_len());

    let mut spans = vec![Span::styled(count.clone(), dim)];

    // Filter tags, the active one in accent color
    let mut tags_width = 0;
    let mut tag_spans = Vec::new();
    for (tag, label, hint) in [
        (FilterTag::All, "All", "1"),
        (FilterTag::Active, "Active", "2"),
        (FilterTag::Completed, "Completed", "3"),
    ] {
        let style = if tag == app.filter {
            Style::default()
                .fg(app.theme.primary)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            dim
        };
        let text = format!("  {}:{}", hint, label);
        tags_width += text.chars().count();
        tag_spans.push(Span::styled(text, style));
    }

    let clear = "c:Clear Completed  ";
    let left_width = count.chars().count();
    let clear_width = clear.chars().count();

    if left_width + tags_width + clear_width < width {
        let gap = (width - left_width - tags_width - clear_width) / 2;
        spans.push(Span::styled(" ".repeat(gap), dim));
        spans.extend(tag_spans);
        spans.push(Span::styled(
            " ".repeat(width - left_width - tags_width - clear_width - gap),
            dim,
        ));
        spans.push(Span::styled(clear, dim));
    } else {
        spans.extend(tag_spans);
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
