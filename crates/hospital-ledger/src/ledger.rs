//! Ordered collection of admitted patients.

use hospital_types::{Patient, PatientKind};

use crate::types::{LedgerError, LedgerResult};

/// Admitted patients in admission order.
///
/// Positions are 0-based and shift down when an earlier patient is removed.
/// The ledger does not touch rooms or doctor counts; keeping those in step is
/// the caller's job (see [`LedgerState`](crate::LedgerState)).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientLedger {
    patients: Vec<Patient>,
}

impl PatientLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new patient and returns it.
    pub fn admit(
        &mut self,
        name: impl Into<String>,
        disease: impl Into<String>,
        doctor: impl Into<String>,
        severity: impl Into<String>,
        room_number: u32,
        kind: PatientKind,
    ) -> &Patient {
        self.push(Patient {
            name: name.into(),
            disease: disease.into(),
            assigned_doctor: doctor.into(),
            severity: severity.into(),
            room_number,
            kind,
        })
    }

    /// Appends an already-built patient record.
    pub fn push(&mut self, patient: Patient) -> &Patient {
        self.patients.push(patient);
        &self.patients[self.patients.len() - 1]
    }

    /// All patients in admission order.
    pub fn list(&self) -> &[Patient] {
        &self.patients
    }

    /// Emergency patients with their ledger positions, in admission order.
    pub fn list_emergency(&self) -> Vec<(usize, &Patient)> {
        self.patients
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_emergency())
            .collect()
    }

    /// Maps a position in [`list_emergency`](Self::list_emergency) to a ledger position.
    pub fn emergency_position(&self, position: usize) -> LedgerResult<usize> {
        let emergency = self.list_emergency();
        emergency
            .get(position)
            .map(|(index, _)| *index)
            .ok_or(LedgerError::InvalidSelection {
                choice: position,
                available: emergency.len(),
            })
    }

    /// Returns the patient at `index`.
    pub fn get(&self, index: usize) -> LedgerResult<&Patient> {
        self.patients.get(index).ok_or(LedgerError::InvalidSelection {
            choice: index,
            available: self.patients.len(),
        })
    }

    /// Removes and returns the patient at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> LedgerResult<Patient> {
        if index >= self.patients.len() {
            return Err(LedgerError::InvalidSelection {
                choice: index,
                available: self.patients.len(),
            });
        }
        Ok(self.patients.remove(index))
    }

    /// Number of admitted patients.
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    /// Returns true if nobody is admitted.
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
