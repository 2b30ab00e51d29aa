use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ModalField};

use super::helpers::centered_rect;

/// Render the create-todo modal over the current view.
pub fn render_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.modal else { return };

    let width = (area.width.saturating_sub(4)).min(60);
    let rect = centered_rect(width, 10, area);

    let bg = app.theme.surface;
    let block = Block::default()
        .title(" Create New Task ")
        .title_style(
            Style::default()
                .fg(app.theme.text)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.primary).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let mut lines = vec![Line::default()];
    for (field, label, value) in [
        (ModalField::Title, "Title      ", form.title.as_str()),
        (
            ModalField::Description,
            "Description",
            form.description.as_str(),
        ),
        (ModalField::DueDate, "Due date   ", form.due_date.as_str()),
    ] {
        let active = form.field == field;
        let label_style = if active {
            Style::default()
                .fg(app.theme.primary)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_secondary).bg(bg)
        };

        let mut spans = vec![
            Span::styled(format!(" {}  ", label), label_style),
            Span::styled(
                value.to_string(),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ];
        if active {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.primary).bg(bg),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        " Enter create · Esc cancel",
        Style::default().fg(app.theme.text_secondary).bg(bg),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_modal_renders_fields_and_buffers() {
        let (_tmp, mut app) = temp_app(&[]);
        app.open_modal();
        let form = app.modal.as_mut().unwrap();
        form.title = "Taxes".into();
        form.due_date = "april".into();

        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });
        assert!(out.contains("Create New Task"));
        assert!(out.contains("Title"));
        assert!(out.contains("Taxes\u{258C}")); // cursor on the active field
        assert!(out.contains("Description"));
        assert!(out.contains("april"));
        assert!(out.contains("Enter create"));
    }

    #[test]
    fn test_modal_cursor_follows_active_field() {
        let (_tmp, mut app) = temp_app(&[]);
        app.open_modal();
        app.modal.as_mut().unwrap().field = ModalField::DueDate;

        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });
        let due_line = out
            .lines()
            .find(|l| l.contains("Due date"))
            .expect("due date row");
        assert!(due_line.contains('\u{258C}'));
        let title_line = out.lines().find(|l| l.contains("Title")).unwrap();
        assert!(!title_line.contains('\u{258C}'));
    }

    #[test]
    fn test_no_modal_renders_nothing() {
        let (_tmp, app) = temp_app(&[]);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_modal(frame, &app, area);
        });
        assert!(out.trim().is_empty());
    }
}
