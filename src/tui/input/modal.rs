use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::text::pop_grapheme;

/// Key handling for the create-todo modal: three text fields cycled with
/// Tab/arrows, Enter submits, Esc discards.
pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.close_modal();
        }

        (_, KeyCode::Enter) => {
            app.submit_modal();
        }

        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => {
            if let Some(form) = &mut app.modal {
                form.field = form.field.next();
            }
        }
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => {
            if let Some(form) = &mut app.modal {
                form.field = form.field.prev();
            }
        }

        (_, KeyCode::Backspace) => {
            if let Some(form) = &mut app.modal {
                pop_grapheme(active_buffer(form));
            }
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(form) = &mut app.modal {
                active_buffer(form).push(c);
            }
        }

        _ => {}
    }
}

fn active_buffer(form: &mut crate::tui::app::ModalState) -> &mut String {
    use crate::tui::app::ModalField;
    match form.field {
        ModalField::Title => &mut form.title,
        ModalField::Description => &mut form.description,
        ModalField::DueDate => &mut form.due_date,
    }
}
