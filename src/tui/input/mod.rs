mod confirm;
mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

/// Handle a key event, routing by dialog state and pane focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Confirm dialog intercepts all input
    if app.confirm.is_some() {
        confirm::handle_confirm(app, key);
        return;
    }

    // Help overlay: any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.focus {
        Focus::Form => form::handle_form(app, key),
        Focus::List => list::handle_list(app, key),
    }
}
