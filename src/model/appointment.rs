use chrono::{NaiveDate, NaiveTime};

/// Serialized form of an appointment date, e.g. `2026-08-25`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Serialized form of an appointment time, e.g. `14:30`
pub const TIME_FORMAT: &str = "%H:%M";

/// Maximum stored length of the notes field, in characters
pub const NOTES_MAX_CHARS: usize = 200;

/// Status assigned to every newly booked appointment
pub const STATUS_BOOKED: &str = "Booked";

/// Kind of visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitType {
    #[default]
    New,
    FollowUp,
}

impl VisitType {
    pub fn label(self) -> &'static str {
        match self {
            VisitType::New => "New",
            VisitType::FollowUp => "Follow-up",
        }
    }

    /// The other variant (used to cycle the form's radio field)
    pub fn toggled(self) -> VisitType {
        match self {
            VisitType::New => VisitType::FollowUp,
            VisitType::FollowUp => VisitType::New,
        }
    }
}

/// A booked appointment as held by the store.
///
/// Date and time are kept in their serialized textual forms; use
/// [`Appointment::date_value`] / [`Appointment::time_value`] to get them
/// back as temporal values.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    /// Unique across the store, assigned at creation, never reused
    pub id: u64,
    pub patient_name: String,
    pub phone: String,
    /// Empty when the patient gave no email
    pub email: String,
    pub doctor: String,
    pub department: String,
    /// Formatted with [`DATE_FORMAT`]
    pub date: String,
    /// Formatted with [`TIME_FORMAT`]
    pub time: String,
    pub visit_type: VisitType,
    pub notes: String,
    pub consent: bool,
    /// Defaults to [`STATUS_BOOKED`]; preserved across edits
    pub status: String,
}

impl Appointment {
    pub fn date_value(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub fn time_value(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()
    }

    /// Date as shown on a card, e.g. `25 Aug 2026`. Falls back to the
    /// raw stored text if it does not parse.
    pub fn display_date(&self) -> String {
        match self.date_value() {
            Some(d) => d.format("%d %b %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

/// The editor's working copy of an appointment.
///
/// Temporal fields are typed; they serialize into [`Appointment`] text
/// only when a submit passes validation. `id` is present only while
/// editing an existing record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub phone: String,
    pub email: String,
    pub doctor: String,
    pub department: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub visit_type: VisitType,
    pub notes: String,
    pub consent: bool,
    pub id: Option<u64>,
}

impl AppointmentDraft {
    /// Populate a draft from an existing record (entering edit mode).
    /// Stored timestamps are parsed back into temporal values; text that
    /// no longer parses comes through as absent.
    pub fn from_record(record: &Appointment) -> Self {
        AppointmentDraft {
            patient_name: record.patient_name.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            doctor: record.doctor.clone(),
            department: record.department.clone(),
            date: record.date_value(),
            time: record.time_value(),
            visit_type: record.visit_type,
            notes: record.notes.clone(),
            consent: record.consent,
            id: Some(record.id),
        }
    }

    /// Finalize the draft into a store record with the given id and status.
    /// The validation gate guarantees date/time are present by the time
    /// this runs; an absent value serializes to empty text rather than
    /// panicking.
    pub fn to_record(&self, id: u64, status: String) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            doctor: self.doctor.clone(),
            department: self.department.clone(),
            date: self
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            time: self
                .time
                .map(|t| t.format(TIME_FORMAT).to_string())
                .unwrap_or_default(),
            visit_type: self.visit_type,
            notes: self.notes.clone(),
            consent: self.consent,
            status,
        }
    }
}
