//! Well-known tariff tables, roster entries and facility constants.
//!
//! These values are process-wide and never persisted. The roster is rebuilt
//! from [`ROSTER`] on every start.
//!
//! # Examples
//!
//! ```
//! use hospital_types::well_known;
//!
//! assert_eq!(well_known::disease_cost("Flu"), Some(1000.0));
//! assert_eq!(well_known::severity_multiplier("Severe"), Some(2.0));
//! assert_eq!(well_known::disease_cost("Scurvy"), None);
//! assert_eq!(well_known::TOTAL_ROOMS, 100);
//! ```

use crate::{Doctor, Severity};

// =============================================================================
// Facility
// =============================================================================

/// Number of rooms in the facility.
pub const TOTAL_ROOMS: usize = 100;

/// Data file written by an explicit save and read at startup.
pub const DATA_FILE: &str = "hospital_data.txt";

// =============================================================================
// Billing
// =============================================================================

/// Flat bill used when the disease or severity is missing from the tables.
///
/// The emergency factor is never applied to this amount.
pub const DEFAULT_BILL: f64 = 500.0;

/// Factor applied to the formula bill of an emergency patient.
pub const EMERGENCY_MULTIPLIER: f64 = 1.5;

/// Base cost per disease.
pub const DISEASE_COSTS: &[(&str, f64)] = &[
    ("Flu", 1000.0),
    ("Cold", 500.0),
    ("Fever", 800.0),
    ("Diabetes", 4000.0),
    ("Hypertension", 3000.0),
    ("Asthma", 2500.0),
    ("Allergy", 1200.0),
    ("Migraine", 1500.0),
    ("Obesity", 3500.0),
    ("Heart Disease", 5000.0),
    ("Skin Infection", 1000.0),
    ("Pneumonia", 4500.0),
    ("Infection", 2000.0),
];

/// Looks up the base cost of a disease by exact name.
pub fn disease_cost(disease: &str) -> Option<f64> {
    DISEASE_COSTS
        .iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, cost)| *cost)
}

/// Looks up a severity multiplier by exact name.
pub fn severity_multiplier(severity: &str) -> Option<f64> {
    Severity::from_name(severity).map(Severity::multiplier)
}

// =============================================================================
// Roster
// =============================================================================

/// A fixed roster entry: name, specialties, surcharge.
pub type RosterEntry = (&'static str, &'static [&'static str], f64);

/// The ten doctors on staff, in roster order.
pub const ROSTER: &[RosterEntry] = &[
    ("Dr. Smith", &["Flu", "Cold"], 800.0),
    ("Dr. Jones", &["Diabetes", "Hypertension"], 1500.0),
    ("Dr. Brown", &["Asthma", "Allergy"], 1200.0),
    ("Dr. Taylor", &["Fever", "Flu"], 900.0),
    ("Dr. Wilson", &["Cold", "Migraine"], 700.0),
    ("Dr. Moore", &["Diabetes", "Obesity"], 2000.0),
    ("Dr. Clark", &["Hypertension", "Heart Disease"], 2500.0),
    ("Dr. Lewis", &["Allergy", "Skin Infection"], 800.0),
    ("Dr. Hall", &["Asthma", "Pneumonia"], 1800.0),
    ("Dr. Allen", &["Fever", "Infection"], 1000.0),
];

/// Builds a fresh copy of the roster with every patient count at zero.
pub fn roster() -> Vec<Doctor> {
    ROSTER
        .iter()
        .map(|(name, specialties, surcharge)| {
            Doctor::new(
                *name,
                specialties.iter().map(|s| s.to_string()).collect(),
                *surcharge,
            )
        })
        .collect()
}
