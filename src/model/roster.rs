/// A doctor on the clinic roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    /// Display label, also the stored doctor value
    pub label: &'static str,
    /// Home department, used to pre-fill the department field
    pub department: &'static str,
}

/// The clinic's doctor roster (the form's doctor choices)
pub const DOCTORS: [Doctor; 3] = [
    Doctor {
        label: "Dr. Rao – Cardiology",
        department: "Cardiology",
    },
    Doctor {
        label: "Dr. Meera – Dermatology",
        department: "Dermatology",
    },
    Doctor {
        label: "Dr. Arjun – Pediatrics",
        department: "Pediatrics",
    },
];

/// Department suggestions; the field itself stays free-form
pub const DEPARTMENTS: [&str; 4] = [
    "Cardiology",
    "Dermatology",
    "Pediatrics",
    "General Medicine",
];

/// Look up the home department for a roster doctor label
pub fn department_for(label: &str) -> Option<&'static str> {
    DOCTORS
        .iter()
        .find(|d| d.label == label)
        .map(|d| d.department)
}
