pub mod footer;
pub mod header;
pub mod helpers;
pub mod list_view;
pub mod modal;
pub mod search_bar;
pub mod status_row;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | optional search bar | list | footer | status row
    let search_rows: u16 = if app.search_open { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),           // header block + add trigger
            Constraint::Length(search_rows), // search bar
            Constraint::Min(1),              // list area
            Constraint::Length(1),           // footer / filter bar
            Constraint::Length(1),           // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    if app.search_open {
        search_bar::render_search_bar(frame, app, chunks[1]);
    }
    list_view::render_list(frame, app, chunks[2]);
    footer::render_footer(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // The create modal floats above everything
    if app.modal.is_some() {
        modal::render_modal(frame, app, frame.area());
    }
}
