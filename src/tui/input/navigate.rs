use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::filter::FilterTag;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            let len = app.visible_len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Local reorder (cosmetic until the next snapshot)
        (KeyModifiers::SHIFT, KeyCode::Char('J')) => app.move_selected(1),
        (KeyModifiers::SHIFT, KeyCode::Char('K')) => app.move_selected(-1),

        // Mutations
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => app.toggle_selected(),
        (_, KeyCode::Char('d')) => app.delete_selected(),
        (_, KeyCode::Char('c')) => app.clear_completed(),
        (_, KeyCode::Char('a') | KeyCode::Char('n')) => app.open_modal(),

        // Search
        (_, KeyCode::Char('/')) => {
            app.search_open = true;
            app.mode = Mode::Search;
        }
        (_, KeyCode::Esc) => {
            // Dismiss the search projection entirely
            app.search_input.clear();
            app.search_open = false;
            app.clamp_cursor();
        }

        // Filter tags. Each switch re-issues the subscription
        (_, KeyCode::Char('f') | KeyCode::Tab) => {
            app.set_filter(app.filter.cycle());
        }
        (_, KeyCode::Char('1')) => app.set_filter(FilterTag::All),
        (_, KeyCode::Char('2')) => app.set_filter(FilterTag::Active),
        (_, KeyCode::Char('3')) => app.set_filter(FilterTag::Completed),

        // Theme
        (_, KeyCode::Char('t')) => app.toggle_theme(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::state::UiState;
    use crate::model::config::StoreConfig;
    use crate::store::StoreClient;
    use crate::tui::theme::ThemeMode;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn seeded_app(titles: &[&str]) -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        let client = StoreClient::init(tmp.path(), "test").unwrap();
        for title in titles {
            client.create(title, None, None).unwrap();
        }
        let mut app = App::new(client, StoreConfig::default(), None);
        app.pump();
        (tmp, app)
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        let (_tmp, mut app) = seeded_app(&["a", "b", "c"]);

        handle_navigate(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 1);
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        handle_navigate(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 2); // clamped at the end

        handle_navigate(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);
        handle_navigate(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
        handle_navigate(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_space_toggles_completion() {
        let (_tmp, mut app) = seeded_app(&["x"]);
        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        app.pump();
        assert!(app.selected().unwrap().completed);
    }

    #[test]
    fn test_slash_enters_search_mode() {
        let (_tmp, mut app) = seeded_app(&[]);
        handle_navigate(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, crate::tui::app::Mode::Search);
        assert!(app.search_open);
    }

    #[test]
    fn test_esc_clears_search_projection() {
        let (_tmp, mut app) = seeded_app(&["apple", "banana"]);
        app.search_input = "app".into();
        app.search_open = true;

        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(app.search_input.is_empty());
        assert!(!app.search_open);
        assert_eq!(app.visible_len(), 2);
    }

    #[test]
    fn test_filter_keys_switch_subscriptions() {
        let (_tmp, mut app) = seeded_app(&["x"]);

        handle_navigate(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.filter, FilterTag::Active);
        assert!(app.visible().is_pending());

        app.pump();
        handle_navigate(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, FilterTag::Completed);
    }

    #[test]
    fn test_shift_j_reorders_locally() {
        let (_tmp, mut app) = seeded_app(&["a", "b"]);
        // newest first: b, a
        handle_navigate(&mut app, shift(KeyCode::Char('J')));
        let titles: Vec<String> = app
            .visible()
            .todos()
            .unwrap()
            .iter()
            .map(|t| t.title.clone())
            .collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_theme_key_respects_persisted_preference() {
        let tmp = TempDir::new().unwrap();
        let client = StoreClient::init(tmp.path(), "test").unwrap();
        let state = UiState {
            theme: "light".into(),
            ..Default::default()
        };
        let mut app = App::new(client, StoreConfig::default(), Some(state));

        handle_navigate(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_q_quits() {
        let (_tmp, mut app) = seeded_app(&[]);
        handle_navigate(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
