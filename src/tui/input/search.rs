use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::text::pop_grapheme;

/// Search is live: the projection tracks the query as it is typed.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the query and the bar
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.search_open = false;
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }

        // Keep the query applied, return to navigation
        (_, KeyCode::Enter) => {
            if app.search_input.is_empty() {
                app.search_open = false;
            }
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            pop_grapheme(&mut app.search_input);
            app.clamp_cursor();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        _ => {}
    }
}
