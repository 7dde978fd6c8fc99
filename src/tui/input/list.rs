use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmCancel, Focus};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            app.focus = Focus::Form;
            app.move_cursor_to_end();
        }
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,
        (KeyModifiers::NONE, KeyCode::Char('?')) => app.show_help = true,
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            if app.list_cursor + 1 < app.store.len() {
                app.list_cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.list_cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.list_cursor = app.store.len().saturating_sub(1);
        }
        // Edit the card under the cursor
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => {
            if let Some(record) = app.store.records().get(app.list_cursor).cloned() {
                app.start_edit(&record);
            }
        }
        // Cancel intent: opens the confirm dialog, nothing is removed yet
        (KeyModifiers::NONE, KeyCode::Char('x') | KeyCode::Delete) => {
            if let Some(record) = app.store.records().get(app.list_cursor) {
                app.confirm = Some(ConfirmCancel { id: record.id });
            }
        }
        _ => {}
    }
}
