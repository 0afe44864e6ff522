//! Bill and summary report records.
//!
//! These are read-only results handed to the display layer.

use crate::PatientKind;

/// An itemised bill for one admitted patient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bill {
    /// Patient name.
    pub patient_name: String,
    /// Disease billed for.
    pub disease: String,
    /// Severity as recorded on the patient.
    pub severity: String,
    /// Assigned doctor.
    pub doctor: String,
    /// 1-based room number.
    pub room_number: u32,
    /// Regular or emergency bill.
    pub kind: PatientKind,
    /// Total amount due.
    pub cost: f64,
}

/// Per-doctor line of the summary report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoctorRevenue {
    /// Doctor name.
    pub doctor: String,
    /// Currently admitted patients assigned to this doctor.
    pub patients: usize,
    /// Sum of those patients' bills.
    pub revenue: f64,
}

/// Revenue summary over the whole ledger.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryReport {
    /// One row per roster doctor, in roster order.
    pub doctors: Vec<DoctorRevenue>,
    /// Sum over every admitted patient, including ones whose doctor is
    /// not on the roster.
    pub total_revenue: f64,
}

impl SummaryReport {
    /// Returns the row for `doctor`, if present.
    pub fn row(&self, doctor: &str) -> Option<&DoctorRevenue> {
        self.doctors.iter().find(|r| r.doctor == doctor)
    }
}
