use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::DOCTORS;
use crate::ops::editor::FieldChange;
use crate::tui::app::{App, FIELD_ORDER, Focus, FormField};

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            app.focus = Focus::List;
            app.clamp_list_cursor();
        }
        (KeyModifiers::NONE, KeyCode::Up) => move_field(app, -1),
        (KeyModifiers::NONE, KeyCode::Down) => move_field(app, 1),
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Esc) => app.reset_form(),
        _ => field_key(app, key),
    }
}

/// Move the field cursor up/down, wrapping at the ends
fn move_field(app: &mut App, delta: isize) {
    let len = FIELD_ORDER.len() as isize;
    let next = (app.field_cursor as isize + delta).rem_euclid(len);
    app.field_cursor = next as usize;
    app.move_cursor_to_end();
}

fn submit(app: &mut App) {
    let today = app.today();
    if let Some(submission) = app.editor.submit(&mut app.ids, today) {
        app.apply_submission(submission);
        app.field_cursor = 0;
    }
    // Invalid drafts stay put; the per-field errors are already visible
}

/// Keys that edit the focused field itself
fn field_key(app: &mut App, key: KeyEvent) {
    match app.field() {
        FormField::Doctor => doctor_key(app, key),
        FormField::VisitType => {
            if matches!(
                key.code,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            ) {
                let toggled = app.editor.draft.visit_type.toggled();
                let today = app.today();
                app.editor.set_field(FieldChange::Visit(toggled), today);
            }
        }
        FormField::Consent => {
            if key.code == KeyCode::Char(' ') {
                let flipped = !app.editor.draft.consent;
                let today = app.today();
                app.editor.set_field(FieldChange::Consent(flipped), today);
            }
        }
        _ => text_key(app, key),
    }
}

/// Cycle the doctor choice through the roster; Backspace clears it
fn doctor_key(app: &mut App, key: KeyEvent) {
    let current = DOCTORS
        .iter()
        .position(|d| d.label == app.editor.draft.doctor);

    let next = match key.code {
        KeyCode::Right | KeyCode::Char(' ') => match current {
            None => Some(0),
            Some(i) => Some((i + 1) % DOCTORS.len()),
        },
        KeyCode::Left => match current {
            None => Some(DOCTORS.len() - 1),
            Some(0) => Some(DOCTORS.len() - 1),
            Some(i) => Some(i - 1),
        },
        KeyCode::Backspace | KeyCode::Delete => None,
        _ => return,
    };

    let label = next.map_or(String::new(), |i| DOCTORS[i].label.to_string());
    let today = app.today();
    app.editor.set_field(FieldChange::Doctor(label), today);
}

/// Single-line text editing on the focused field (char-indexed cursor)
fn text_key(app: &mut App, key: KeyEvent) {
    let Some(text) = app.current_text().map(str::to_string) else {
        return;
    };
    let len = text.chars().count();
    let cursor = app.edit_cursor.min(len);

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let (edited, new_cursor) = insert_char(&text, cursor, c);
            app.apply_text(edited);
            app.edit_cursor = new_cursor;
            // The notes field truncates at 200 chars; keep the cursor inside
            let stored = app.current_text().map_or(0, |s| s.chars().count());
            app.edit_cursor = app.edit_cursor.min(stored);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if cursor > 0 {
                let (edited, new_cursor) = delete_before(&text, cursor);
                app.apply_text(edited);
                app.edit_cursor = new_cursor;
            }
        }
        (KeyModifiers::NONE, KeyCode::Delete) => {
            if cursor < len {
                let edited = delete_at(&text, cursor);
                app.apply_text(edited);
            }
        }
        (KeyModifiers::NONE, KeyCode::Left) => {
            app.edit_cursor = cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            app.edit_cursor = (cursor + 1).min(len);
        }
        (KeyModifiers::NONE, KeyCode::Home) => app.edit_cursor = 0,
        (KeyModifiers::NONE, KeyCode::End) => app.edit_cursor = len,
        _ => {}
    }
}

/// Insert `c` at char position `cursor`; returns the new text and cursor
fn insert_char(text: &str, cursor: usize, c: char) -> (String, usize) {
    let byte = char_to_byte(text, cursor);
    let mut edited = text.to_string();
    edited.insert(byte, c);
    (edited, cursor + 1)
}

/// Delete the char before `cursor`; returns the new text and cursor
fn delete_before(text: &str, cursor: usize) -> (String, usize) {
    let start = char_to_byte(text, cursor - 1);
    let end = char_to_byte(text, cursor);
    let mut edited = text.to_string();
    edited.replace_range(start..end, "");
    (edited, cursor - 1)
}

/// Delete the char at `cursor`
fn delete_at(text: &str, cursor: usize) -> String {
    let start = char_to_byte(text, cursor);
    let end = char_to_byte(text, cursor + 1);
    let mut edited = text.to_string();
    edited.replace_range(start..end, "");
    edited
}

/// Byte offset of the char at position `idx` (text length when past the end)
fn char_to_byte(text: &str, idx: usize) -> usize {
    text.char_indices()
        .nth(idx)
        .map_or(text.len(), |(byte, _)| byte)
}
