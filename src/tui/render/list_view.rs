use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::todo::Todo;
use crate::ops::reconcile::LoadState;
use crate::ops::search::highlight_regex;
use crate::tui::app::App;
use crate::util::text::{display_width, truncate_to_width};

use super::helpers::push_highlighted_spans;

/// Render the list area: loading indicator, empty state, or todo rows.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.visible() {
        LoadState::Pending => render_centered(frame, app, area, "Loading todos…"),
        LoadState::Loaded(todos) if todos.is_empty() => {
            render_centered(frame, app, area, "No todos yet.")
        }
        LoadState::Loaded(todos) => render_rows(frame, app, area, &todos),
    }
}

/// Loading and empty states share a centered secondary-text message.
fn render_centered(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let style = Style::default()
        .fg(app.theme.text_secondary)
        .bg(app.theme.background);
    let mut lines = Vec::new();
    for _ in 0..area.height / 2 {
        lines.push(Line::default());
    }
    let pad = (area.width as usize).saturating_sub(display_width(message)) / 2;
    lines.push(Line::from(Span::styled(
        format!("{}{}", " ".repeat(pad), message),
        style,
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rows(frame: &mut Frame, app: &mut App, area: Rect, todos: &[Todo]) {
    let height = area.height as usize;
    if height == 0 {
        return;
    }

    // Keep the cursor on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor - height + 1;
    }

    let search_re = highlight_regex(&app.search_input);
    let width = area.width as usize;

    let mut lines = Vec::new();
    for (i, todo) in todos
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = i == app.cursor;
        let bg = if selected {
            app.theme.selection_bg
        } else {
            app.theme.surface
        };

        let checkbox_style = if todo.completed {
            Style::default().fg(app.theme.primary).bg(bg)
        } else {
            Style::default().fg(app.theme.text_secondary).bg(bg)
        };
        let title_style = if todo.completed {
            Style::default()
                .fg(app.theme.text_secondary)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let dim = Style::default().fg(app.theme.text_secondary).bg(bg);
        let highlight = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let mut spans = vec![Span::styled(
            if todo.completed { "  [x]  " } else { "  [ ]  " },
            checkbox_style,
        )];

        // Right-aligned due date, hidden when empty
        let due = todo
            .due_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| format!("due {}  ", d));
        let due_width = due.as_deref().map_or(0, display_width);

        let text_budget = width.saturating_sub(7 + due_width + 2);
        let title = truncate_to_width(&todo.title, text_budget);
        push_highlighted_spans(&mut spans, &title, title_style, highlight, search_re.as_ref());
        let mut used = 7 + display_width(&title);

        // Inline description in whatever room is left
        if let Some(desc) = todo.description.as_deref().filter(|d| !d.is_empty()) {
            let room = text_budget.saturating_sub(display_width(&title));
            if room > 8 {
                let shown = truncate_to_width(desc, room - 3);
                spans.push(Span::styled(format!(" — {}", shown), dim));
                used += 3 + display_width(&shown);
            }
        }

        if width > used + due_width {
            spans.push(Span::styled(" ".repeat(width - used - due_width), dim));
        }
        if let Some(due) = due {
            spans.push(Span::styled(due, dim));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
