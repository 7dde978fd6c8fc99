use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys for the confirm-before-cancel dialog. `y` removes the record;
/// `n` or Esc closes the dialog with the store untouched.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            if let Some(confirm) = app.confirm.take()
                && let Some(notice) = app.store.remove(confirm.id)
            {
                app.notify(notice);
            }
            app.clamp_list_cursor();
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Appointment, VisitType};
    use crate::tui::app::{ConfirmCancel, Focus};
    use crate::tui::input::handle_key;
    use crate::tui::theme::Theme;

    fn record(id: u64) -> Appointment {
        Appointment {
            id,
            patient_name: "Asha Verma".into(),
            phone: "9876543210".into(),
            email: String::new(),
            doctor: "Dr. Rao – Cardiology".into(),
            department: "Cardiology".into(),
            date: "2026-09-01".into(),
            time: "10:00".into(),
            visit_type: VisitType::New,
            notes: String::new(),
            consent: true,
            status: "Booked".into(),
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_with_record() -> App {
        let mut app = App::new(Theme::default());
        app.store.add(record(5));
        app.focus = Focus::List;
        app
    }

    #[test]
    fn test_cancel_intent_opens_dialog_without_removing() {
        let mut app = app_with_record();
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.confirm, Some(ConfirmCancel { id: 5 }));
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_declining_keeps_the_record() {
        let mut app = app_with_record();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.confirm, None);
        assert_eq!(app.store.len(), 1);
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_esc_also_declines() {
        let mut app = app_with_record();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.confirm, None);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_confirming_removes_exactly_once_and_notifies() {
        let mut app = app_with_record();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.len(), 0);
        assert_eq!(
            app.notification.as_ref().map(|n| n.message.as_str()),
            Some("Appointment cancelled")
        );

        // The dialog is gone; pressing y again does nothing
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn test_other_keys_leave_dialog_open() {
        let mut app = app_with_record();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.confirm, Some(ConfirmCancel { id: 5 }));
        assert_eq!(app.store.len(), 1);
    }
}
