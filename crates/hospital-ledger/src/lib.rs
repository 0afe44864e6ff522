//! # hospital-ledger
//!
//! Ledger engine for a single-facility admission and billing system.
//!
//! - [`RoomAllocator`]: fixed pool of rooms, lowest free room first
//! - [`billing`]: tariff formula with a flat fallback
//! - [`DoctorRegistry`]: fixed roster, specialty lookup and least-cost recommendation
//! - [`PatientLedger`]: admitted patients in admission order
//! - [`LedgerState`]: the three kept in step on admission and discharge
//! - [`codec`]: the line-oriented data file
//!
//! ## Usage
//!
//! ```rust
//! use hospital_ledger::{codec, LedgerState};
//! use hospital_types::PatientKind;
//!
//! let mut state = LedgerState::new(100);
//! let doctor = state.registry().recommend_least_cost("Flu", "Mild").unwrap().to_string();
//! state.admit("Alice", "Flu", &doctor, "Mild", PatientKind::Regular).unwrap();
//!
//! let text = codec::save(&state);
//! let (restored, stats) = codec::load(&text, 100);
//! assert_eq!(restored, state);
//! assert_eq!(stats.patients_loaded, 1);
//! ```

#![warn(missing_docs)]

pub mod billing;
pub mod codec;
mod ledger;
mod parser;
mod registry;
mod rooms;
mod state;
mod types;

pub use ledger::PatientLedger;
pub use parser::{parse, LedgerRecord, LineReader};
pub use registry::DoctorRegistry;
pub use rooms::RoomAllocator;
pub use state::LedgerState;
pub use types::{LedgerConfig, LedgerError, LedgerResult, LoadStats};

// Re-export hospital-types for convenience
pub use hospital_types;
