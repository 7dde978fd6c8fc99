use crate::model::Appointment;

/// Raised by each successful store mutation; the app turns it into the
/// transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreNotice {
    Booked,
    Updated,
    Cancelled,
}

impl StoreNotice {
    pub fn message(self) -> &'static str {
        match self {
            StoreNotice::Booked => "Appointment booked",
            StoreNotice::Updated => "Appointment updated",
            StoreNotice::Cancelled => "Appointment cancelled",
        }
    }
}

/// In-memory ordered collection of appointments, newest first.
/// Lives for the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct Store {
    records: Vec<Appointment>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Appointment] {
        &self.records
    }

    pub fn get(&self, id: u64) -> Option<&Appointment> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Insert a newly booked appointment at the front
    pub fn add(&mut self, record: Appointment) -> StoreNotice {
        debug_assert!(self.get(record.id).is_none(), "duplicate id {}", record.id);
        self.records.insert(0, record);
        StoreNotice::Booked
    }

    /// Replace the record with a matching id. No-op when absent.
    pub fn update(&mut self, id: u64, record: Appointment) -> Option<StoreNotice> {
        let slot = self.records.iter_mut().find(|r| r.id == id)?;
        *slot = record;
        Some(StoreNotice::Updated)
    }

    /// Delete the record with a matching id. No-op when absent.
    pub fn remove(&mut self, id: u64) -> Option<StoreNotice> {
        let index = self.records.iter().position(|r| r.id == id)?;
        self.records.remove(index);
        Some(StoreNotice::Cancelled)
    }
}
