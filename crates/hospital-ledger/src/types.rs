//! Ledger-wide error, configuration and statistics types.

use std::path::PathBuf;

use hospital_types::well_known;
use thiserror::Error;

/// Errors that can occur while operating the ledger.
///
/// Every variant except [`LedgerError::Io`] is a validation rejection: the
/// operation that returned it left the ledger untouched.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// I/O error writing the data file.
    #[error("IO error on data file: {0}")]
    Io(#[from] std::io::Error),

    /// Patient name was empty.
    #[error("Invalid name: patient name must not be empty")]
    InvalidName,

    /// Disease menu choice out of range.
    #[error("Invalid disease choice: {choice} (expected 1..={available})")]
    InvalidDiseaseChoice {
        /// The 1-based choice that was entered.
        choice: usize,
        /// Number of diseases on the menu.
        available: usize,
    },

    /// Every room is occupied.
    #[error("No rooms available: all {capacity} rooms are occupied")]
    NoRoomAvailable {
        /// Size of the room pool.
        capacity: usize,
    },

    /// Patient position out of range.
    #[error("Invalid selection: {choice} (only {available} patients listed)")]
    InvalidSelection {
        /// The 0-based position that was requested.
        choice: usize,
        /// Number of patients in the listing.
        available: usize,
    },
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Configuration for a ledger instance.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// File written by `save` and read at startup.
    pub data_file: PathBuf,
    /// Number of rooms in a fresh room pool.
    pub room_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(well_known::DATA_FILE),
            room_capacity: well_known::TOTAL_ROOMS,
        }
    }
}

impl LedgerConfig {
    /// Creates a default config that persists to `path`.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Default::default()
        }
    }
}

/// Statistics from loading a data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Patient records reconstructed into the ledger.
    pub patients_loaded: usize,
    /// Patient records dropped for an unknown type tag.
    pub records_skipped: usize,
    /// Doctor records read and discarded.
    pub doctor_records_discarded: usize,
    /// Room pool size after loading.
    pub room_count: usize,
}
