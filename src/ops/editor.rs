use chrono::{NaiveDate, NaiveTime};

use crate::model::{
    Appointment, AppointmentDraft, NOTES_MAX_CHARS, STATUS_BOOKED, VisitType, roster,
};

use super::validate::{self, FieldErrors};

/// Source of appointment ids. Injected so tests control id assignment.
pub trait IdGenerator {
    /// Next unique id; implementations must never repeat one
    fn next_id(&mut self) -> u64;
}

/// Monotonic counter, the app's id source
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        SequentialIds::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// Editor mode. Edit carries the target's id and prior status so an
/// update-submit can preserve both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit { id: u64, status: String },
}

/// One typed field replacement for [`Editor::set_field`]
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    PatientName(String),
    Phone(String),
    Email(String),
    Doctor(String),
    Department(String),
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Visit(VisitType),
    Notes(String),
    Consent(bool),
}

/// What a successful submit produced. The editor never touches the store;
/// the caller applies these.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(Appointment),
    Update(Appointment),
}

/// The appointment form controller: draft, per-field errors, create/edit
/// mode. Every draft change revalidates the whole draft.
#[derive(Debug, Default)]
pub struct Editor {
    pub draft: AppointmentDraft,
    pub errors: FieldErrors,
    mode: EditorMode,
}

impl Editor {
    pub fn new() -> Self {
        Editor::default()
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    /// Enter edit mode for an existing record: copy its fields into the
    /// draft (parsing timestamps back into values), remember its id and
    /// status, and clear prior errors.
    pub fn begin_edit(&mut self, record: &Appointment) {
        self.draft = AppointmentDraft::from_record(record);
        self.errors = FieldErrors::default();
        self.mode = EditorMode::Edit {
            id: record.id,
            status: record.status.clone(),
        };
    }

    /// Replace one draft field, then revalidate the whole draft.
    /// Notes are truncated to [`NOTES_MAX_CHARS`] before storage; picking
    /// a roster doctor pre-fills the department (which stays editable).
    pub fn set_field(&mut self, change: FieldChange, today: NaiveDate) {
        match change {
            FieldChange::PatientName(v) => self.draft.patient_name = v,
            FieldChange::Phone(v) => self.draft.phone = v,
            FieldChange::Email(v) => self.draft.email = v,
            FieldChange::Doctor(v) => {
                if let Some(dept) = roster::department_for(&v) {
                    self.draft.department = dept.to_string();
                }
                self.draft.doctor = v;
            }
            FieldChange::Department(v) => self.draft.department = v,
            FieldChange::Date(v) => self.draft.date = v,
            FieldChange::Time(v) => self.draft.time = v,
            FieldChange::Visit(v) => self.draft.visit_type = v,
            FieldChange::Notes(v) => {
                self.draft.notes = if v.chars().count() > NOTES_MAX_CHARS {
                    v.chars().take(NOTES_MAX_CHARS).collect()
                } else {
                    v
                };
            }
            FieldChange::Consent(v) => self.draft.consent = v,
        }
        self.on_draft_changed(today);
    }

    /// Whole-draft revalidation, run after every change and inside submit
    fn on_draft_changed(&mut self, today: NaiveDate) {
        self.errors = validate::validate(&self.draft, today);
    }

    /// True when a submit would go through (used to light the submit hint)
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        validate::is_submittable(&self.draft, today)
    }

    /// Revalidate and, if the draft passes, produce a finalized record.
    ///
    /// Create mode: a fresh id and status "Booked", then reset.
    /// Edit mode: the preserved id and prior status, then reset back to
    /// Create mode. An invalid draft returns `None` with the draft and
    /// errors left in place.
    pub fn submit(
        &mut self,
        ids: &mut dyn IdGenerator,
        today: NaiveDate,
    ) -> Option<Submission> {
        self.on_draft_changed(today);
        if !self.errors.is_clear() {
            return None;
        }

        let submission = match &self.mode {
            EditorMode::Create => {
                let record = self.draft.to_record(ids.next_id(), STATUS_BOOKED.to_string());
                Submission::Create(record)
            }
            EditorMode::Edit { id, status } => {
                let record = self.draft.to_record(*id, status.clone());
                Submission::Update(record)
            }
        };

        self.clear();
        Some(submission)
    }

    /// Restore defaults and clear errors. Returns true when this cancelled
    /// an in-progress edit (the caller's cancel-edit signal); nothing is
    /// emitted either way.
    pub fn reset(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.clear();
        was_editing
    }

    fn clear(&mut self) {
        self.draft = AppointmentDraft::default();
        self.errors = FieldErrors::default();
        self.mode = EditorMode::Create;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    fn fill_valid(editor: &mut Editor) {
        let t = today();
        editor.set_field(FieldChange::PatientName("Asha Verma".into()), t);
        editor.set_field(FieldChange::Phone("987-654-3210".into()), t);
        editor.set_field(FieldChange::Doctor("Dr. Rao – Cardiology".into()), t);
        editor.set_field(FieldChange::Date(Some(t)), t);
        editor.set_field(FieldChange::Time(NaiveTime::from_hms_opt(10, 0, 0)), t);
        editor.set_field(FieldChange::Consent(true), t);
    }

    #[test]
    fn test_notes_truncate_to_200_chars() {
        let mut editor = Editor::new();
        let long: String = "x".repeat(250);
        editor.set_field(FieldChange::Notes(long), today());
        assert_eq!(editor.draft.notes.chars().count(), 200);

        // A short value is stored as-is
        editor.set_field(FieldChange::Notes("mild fever".into()), today());
        assert_eq!(editor.draft.notes, "mild fever");
    }

    #[test]
    fn test_doctor_pick_fills_department_but_stays_editable() {
        let mut editor = Editor::new();
        editor.set_field(FieldChange::Doctor("Dr. Meera – Dermatology".into()), today());
        assert_eq!(editor.draft.department, "Dermatology");

        // Department edited afterwards is not re-synced
        editor.set_field(FieldChange::Department("General Medicine".into()), today());
        assert_eq!(editor.draft.department, "General Medicine");

        // Unknown doctor value leaves department alone
        editor.set_field(FieldChange::Doctor("Dr. Unknown".into()), today());
        assert_eq!(editor.draft.department, "General Medicine");
    }

    #[test]
    fn test_set_field_revalidates_whole_draft() {
        let mut editor = Editor::new();
        editor.set_field(FieldChange::PatientName("A".into()), today());
        // The changed field is now valid, the untouched ones show errors
        assert!(editor.errors.patient_name.is_empty());
        assert_eq!(editor.errors.doctor, "Select a doctor.");
        assert_eq!(editor.errors.consent, "Consent is required.");
    }

    #[test]
    fn test_submit_invalid_is_a_noop() {
        let mut editor = Editor::new();
        let mut ids = SequentialIds::new();
        editor.set_field(FieldChange::PatientName("Asha".into()), today());
        let before = editor.draft.clone();

        assert_eq!(editor.submit(&mut ids, today()), None);
        assert_eq!(editor.draft, before);
        assert!(!editor.errors.is_clear());
    }

    #[test]
    fn test_create_submit_books_with_fresh_id_and_resets() {
        let mut editor = Editor::new();
        let mut ids = SequentialIds::new();
        fill_valid(&mut editor);

        let submission = editor.submit(&mut ids, today());
        let record = match submission {
            Some(Submission::Create(r)) => r,
            other => panic!("expected create, got {other:?}"),
        };
        assert_eq!(record.id, 1);
        assert_eq!(record.status, "Booked");
        assert_eq!(record.date, "2026-08-25");
        assert_eq!(record.time, "10:00");

        // Draft reset to defaults, still in create mode
        assert_eq!(editor.draft, AppointmentDraft::default());
        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.errors, crate::ops::validate::FieldErrors::default());
    }

    #[test]
    fn test_edit_submit_preserves_id_and_status() {
        let mut editor = Editor::new();
        let mut ids = SequentialIds::new();

        let mut target = {
            fill_valid(&mut editor);
            match editor.submit(&mut ids, today()) {
                Some(Submission::Create(r)) => r,
                other => panic!("expected create, got {other:?}"),
            }
        };
        target.id = 7;
        target.status = "Completed".into();

        editor.begin_edit(&target);
        assert!(editor.is_editing());
        assert_eq!(editor.draft.id, Some(7));

        editor.set_field(FieldChange::PatientName("Asha V.".into()), today());
        let record = match editor.submit(&mut ids, today()) {
            Some(Submission::Update(r)) => r,
            other => panic!("expected update, got {other:?}"),
        };
        assert_eq!(record.id, 7);
        assert_eq!(record.status, "Completed");
        assert_eq!(record.patient_name, "Asha V.");

        // Back to create mode after a successful update
        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.draft, AppointmentDraft::default());
    }

    #[test]
    fn test_begin_edit_clears_prior_errors() {
        let mut editor = Editor::new();
        let mut ids = SequentialIds::new();
        editor.set_field(FieldChange::PatientName(String::new()), today());
        assert!(!editor.errors.is_clear());

        fill_valid(&mut editor);
        let record = match editor.submit(&mut ids, today()) {
            Some(Submission::Create(r)) => r,
            other => panic!("expected create, got {other:?}"),
        };
        editor.set_field(FieldChange::Phone("1".into()), today());
        editor.begin_edit(&record);
        assert_eq!(editor.errors, FieldErrors::default());
    }

    #[test]
    fn test_reset_cancels_edit_without_emitting() {
        let mut editor = Editor::new();
        let mut ids = SequentialIds::new();
        fill_valid(&mut editor);
        let record = match editor.submit(&mut ids, today()) {
            Some(Submission::Create(r)) => r,
            other => panic!("expected create, got {other:?}"),
        };

        editor.begin_edit(&record);
        assert!(editor.reset());
        assert_eq!(editor.mode(), &EditorMode::Create);
        assert_eq!(editor.draft, AppointmentDraft::default());

        // Reset in create mode is not a cancel-edit
        assert!(!editor.reset());
    }

    #[test]
    fn test_sequential_ids_never_repeat() {
        let mut ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }
}
