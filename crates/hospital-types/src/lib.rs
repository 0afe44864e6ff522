//! # hospital-types
//!
//! Type definitions for the hospital admission and billing ledger.
//!
//! This crate provides the plain records shared by the ledger engine and the
//! service facade: doctors, patients, bills and summary rows, plus the fixed
//! tariff tables and roster.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use hospital_types::{well_known, PatientKind, Severity};
//!
//! let doctors = well_known::roster();
//! assert_eq!(doctors.len(), 10);
//! assert!(doctors[0].treats("Flu"));
//!
//! let severity = Severity::from_name("Moderate").unwrap();
//! assert_eq!(severity.multiplier(), 1.5);
//! assert_eq!(PatientKind::Emergency.save_tag(), "EMERGENCY");
//! ```

#![warn(missing_docs)]

mod doctor;
mod enums;
mod patient;
mod report;
pub mod well_known;

// Re-export all public types at crate root
pub use doctor::Doctor;
pub use enums::{PatientKind, Severity};
pub use patient::Patient;
pub use report::{Bill, DoctorRevenue, SummaryReport};
