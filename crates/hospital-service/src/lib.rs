//! # hospital-service
//!
//! Admission, discharge and billing facade over the hospital ledger.
//!
//! [`HospitalService`] owns the ledger state and the data file location and
//! exposes one method per menu action. The [`menu`] module drives it from a
//! line-oriented text interface.
//!
//! ## Usage
//!
//! ```rust
//! use hospital_service::{HospitalService, LedgerConfig};
//!
//! let mut service = HospitalService::new(LedgerConfig::default());
//! let admission = service.add_patient("Alice", 1, "Mild", None).unwrap();
//! assert_eq!(admission.patient.assigned_doctor, "Dr. Smith");
//! assert_eq!(service.generate_bill(0).unwrap().cost, 1800.0);
//! ```

#![warn(missing_docs)]

pub mod menu;
mod service;

pub use service::{Admission, AdmissionPlan, HospitalService};

// Re-export ledger types for convenience
pub use hospital_ledger::{LedgerConfig, LedgerError, LedgerResult};
