//! Patient record type.
//!
//! Regular and emergency patients are the same record; [`PatientKind`]
//! carries the difference.

use crate::PatientKind;

/// An admitted patient.
///
/// `severity` is kept as text: admissions always store a valid
/// [`Severity`](crate::Severity) name, but records replayed from the data file
/// are kept verbatim and simply bill at the flat default when unknown.
///
/// # Examples
///
/// ```
/// use hospital_types::{Patient, PatientKind};
///
/// let patient = Patient {
///     name: "Alice".to_string(),
///     disease: "Flu".to_string(),
///     assigned_doctor: "Dr. Smith".to_string(),
///     severity: "Mild".to_string(),
///     room_number: 1,
///     kind: PatientKind::Regular,
/// };
///
/// assert_eq!(patient.room_index(), Some(0));
/// assert!(!patient.is_emergency());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    /// Patient name, never empty for new admissions.
    pub name: String,
    /// Disease name as chosen from the disease menu.
    pub disease: String,
    /// Name of the assigned roster doctor.
    pub assigned_doctor: String,
    /// Severity name (`Mild`, `Moderate`, `Severe`).
    pub severity: String,
    /// 1-based room number; 0 means no room.
    pub room_number: u32,
    /// Regular or emergency admission.
    pub kind: PatientKind,
}

impl Patient {
    /// Returns the 0-based room index, or `None` if no room is recorded.
    pub fn room_index(&self) -> Option<usize> {
        (self.room_number as usize).checked_sub(1)
    }

    /// Returns true for emergency admissions.
    pub fn is_emergency(&self) -> bool {
        self.kind.is_emergency()
    }
}
