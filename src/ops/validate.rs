use std::sync::LazyLock;

use chrono::{NaiveDate, Timelike};
use regex::Regex;

use crate::model::AppointmentDraft;

/// First bookable hour of the day (inclusive)
pub const CLINIC_OPEN_HOUR: u32 = 9;
/// Closing hour (exclusive — a 17:00 slot is already outside clinic hours)
pub const CLINIC_CLOSE_HOUR: u32 = 17;

/// Shape check only: non-whitespace local part, one `@`, a dot in the domain
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Per-field validation results. One slot per validated field; an empty
/// string means the field is valid. Fixed shape so a new field cannot be
/// validated in one place and forgotten in another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub consent: String,
}

impl FieldErrors {
    /// True when every slot is empty
    pub fn is_clear(&self) -> bool {
        self.patient_name.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.doctor.is_empty()
            && self.department.is_empty()
            && self.date.is_empty()
            && self.time.is_empty()
            && self.consent.is_empty()
    }
}

/// Strip everything except ASCII digits from a phone entry
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate the whole draft against `today` (injected so tests control the
/// clock). Runs on every draft change and again inside submit.
pub fn validate(draft: &AppointmentDraft, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.patient_name.is_empty() {
        errors.patient_name = "Patient name is required.".into();
    }

    if digits_only(&draft.phone).len() != 10 {
        errors.phone = "Enter a valid 10-digit phone number.".into();
    }

    // Email is optional; only a non-empty value is shape-checked
    if !draft.email.is_empty() && !EMAIL_RE.is_match(&draft.email) {
        errors.email = "Enter a valid email.".into();
    }

    if draft.doctor.is_empty() {
        errors.doctor = "Select a doctor.".into();
    }

    if draft.department.is_empty() {
        errors.department = "Select a department.".into();
    }

    match draft.date {
        None => errors.date = "Pick a date.".into(),
        // Same-day booking is allowed; anything before today is not
        Some(date) if date < today => {
            errors.date = "Date must be in the future.".into();
        }
        Some(_) => {}
    }

    match draft.time {
        None => errors.time = "Pick a time.".into(),
        Some(time) => {
            let hour = time.hour();
            if !(CLINIC_OPEN_HOUR..CLINIC_CLOSE_HOUR).contains(&hour) {
                errors.time = "Time must be within 09:00–17:00.".into();
            }
        }
    }

    if !draft.consent {
        errors.consent = "Consent is required.".into();
    }

    errors
}

/// The submit gate. Defined in terms of [`validate`] so the per-field
/// errors and the gate cannot drift apart: a draft is submittable exactly
/// when every field error is empty (which already requires consent).
pub fn is_submittable(draft: &AppointmentDraft, today: NaiveDate) -> bool {
    validate(draft, today).is_clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    fn valid_draft() -> AppointmentDraft {
        AppointmentDraft {
            patient_name: "Asha Verma".into(),
            phone: "987-654-3210".into(),
            email: "asha@example.com".into(),
            doctor: "Dr. Rao – Cardiology".into(),
            department: "Cardiology".into(),
            date: Some(today()),
            time: NaiveTime::from_hms_opt(10, 30, 0),
            consent: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate(&valid_draft(), today());
        assert_eq!(errors, FieldErrors::default());
        assert!(errors.is_clear());
    }

    #[test]
    fn test_patient_name_required() {
        let mut draft = valid_draft();
        draft.patient_name.clear();
        assert_eq!(validate(&draft, today()).patient_name, "Patient name is required.");
    }

    #[test]
    fn test_phone_strips_formatting_before_counting() {
        let mut draft = valid_draft();

        draft.phone = "123-456-7890".into();
        assert!(validate(&draft, today()).phone.is_empty());

        draft.phone = "(555) 012-3456".into();
        assert!(validate(&draft, today()).phone.is_empty());

        draft.phone = "12345".into();
        assert_eq!(validate(&draft, today()).phone, "Enter a valid 10-digit phone number.");

        // 11 digits is just as wrong as 5
        draft.phone = "12345678901".into();
        assert!(!validate(&draft, today()).phone.is_empty());
    }

    #[test]
    fn test_email_optional_but_shape_checked() {
        let mut draft = valid_draft();

        draft.email.clear();
        assert!(validate(&draft, today()).email.is_empty());

        draft.email = "a@b.com".into();
        assert!(validate(&draft, today()).email.is_empty());

        draft.email = "not-an-email".into();
        assert_eq!(validate(&draft, today()).email, "Enter a valid email.");

        draft.email = "has space@b.com".into();
        assert!(!validate(&draft, today()).email.is_empty());

        draft.email = "a@nodot".into();
        assert!(!validate(&draft, today()).email.is_empty());
    }

    #[test]
    fn test_date_permits_same_day_rejects_past() {
        let mut draft = valid_draft();

        draft.date = Some(today());
        assert!(validate(&draft, today()).date.is_empty());

        draft.date = today().checked_add_days(Days::new(30));
        assert!(validate(&draft, today()).date.is_empty());

        draft.date = today().checked_sub_days(Days::new(1));
        assert_eq!(validate(&draft, today()).date, "Date must be in the future.");

        draft.date = None;
        assert_eq!(validate(&draft, today()).date, "Pick a date.");
    }

    #[test]
    fn test_time_clinic_hours_boundaries() {
        let mut draft = valid_draft();
        let cases = [
            ((8, 59), false),
            ((9, 0), true),
            ((16, 59), true),
            ((17, 0), false),
        ];
        for ((h, m), ok) in cases {
            draft.time = NaiveTime::from_hms_opt(h, m, 0);
            let error = validate(&draft, today()).time;
            assert_eq!(error.is_empty(), ok, "hour {h}:{m:02}");
        }

        draft.time = None;
        assert_eq!(validate(&draft, today()).time, "Pick a time.");
    }

    #[test]
    fn test_consent_required() {
        let mut draft = valid_draft();
        draft.consent = false;
        assert_eq!(validate(&draft, today()).consent, "Consent is required.");
        assert!(!is_submittable(&draft, today()));
    }

    // The submit gate must agree with the per-field results on every draft,
    // valid or not: submittable iff all slots empty and consent is true.
    #[test]
    fn test_gate_agrees_with_field_errors() {
        let mut drafts = vec![AppointmentDraft::default(), valid_draft()];
        for break_one in 0..8 {
            let mut draft = valid_draft();
            match break_one {
                0 => draft.patient_name.clear(),
                1 => draft.phone = "12345".into(),
                2 => draft.email = "not-an-email".into(),
                3 => draft.doctor.clear(),
                4 => draft.department.clear(),
                5 => draft.date = today().checked_sub_days(Days::new(2)),
                6 => draft.time = NaiveTime::from_hms_opt(18, 0, 0),
                _ => draft.consent = false,
            }
            drafts.push(draft);
        }

        for draft in &drafts {
            let errors = validate(draft, today());
            let per_field = errors.patient_name.is_empty()
                && errors.phone.is_empty()
                && errors.email.is_empty()
                && errors.doctor.is_empty()
                && errors.department.is_empty()
                && errors.date.is_empty()
                && errors.time.is_empty()
                && draft.consent;
            assert_eq!(is_submittable(draft, today()), per_field, "{draft:?}");
        }
    }
}
