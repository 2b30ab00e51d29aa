use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the search input row above the list.
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.surface;
    let mut spans = vec![
        Span::styled(
            "  Search: ",
            Style::default().fg(app.theme.text_secondary).bg(bg),
        ),
        Span::styled(
            app.search_input.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        ),
    ];
    if app.mode == Mode::Search {
        // ▌ cursor only while the bar has focus
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.primary).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_search_bar_shows_query_and_cursor() {
        let (_tmp, mut app) = temp_app(&[]);
        app.search_open = true;
        app.mode = Mode::Search;
        app.search_input = "milk".into();

        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_search_bar(frame, &app, area);
        });
        assert!(out.contains("Search: milk\u{258C}"));
    }

    #[test]
    fn test_search_bar_drops_cursor_when_unfocused() {
        let (_tmp, mut app) = temp_app(&[]);
        app.search_open = true;
        app.search_input = "milk".into();

        let out = render_to_string(TERM_W, 1, |frame, area| {
            render_search_bar(frame, &app, area);
        });
        assert!(out.contains("Search: milk"));
        assert!(!out.contains('\u{258C}'));
    }
}
