//! Combined ledger state.
//!
//! Owns the roster, the patient ledger and the room pool, and is the only
//! place where the three are mutated together.

use hospital_types::{Patient, PatientKind};

use crate::billing;
use crate::ledger::PatientLedger;
use crate::registry::DoctorRegistry;
use crate::rooms::RoomAllocator;
use crate::types::{LedgerError, LedgerResult};

/// Roster, patients and rooms kept in step.
///
/// Invariants maintained by [`admit`](Self::admit) and
/// [`discharge`](Self::discharge):
///
/// - every admitted patient's room is marked occupied;
/// - each doctor's count equals the number of admitted patients naming them.
///
/// # Example
///
/// ```
/// use hospital_ledger::LedgerState;
/// use hospital_types::PatientKind;
///
/// let mut state = LedgerState::new(100);
/// let patient = state
///     .admit("Alice", "Flu", "Dr. Smith", "Mild", PatientKind::Regular)
///     .unwrap()
///     .clone();
/// assert_eq!(patient.room_number, 1);
/// assert_eq!(state.bill(&patient), 1800.0);
///
/// state.discharge(0).unwrap();
/// assert!(state.ledger().is_empty());
/// assert!(!state.rooms().is_occupied(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    registry: DoctorRegistry,
    ledger: PatientLedger,
    rooms: RoomAllocator,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            registry: DoctorRegistry::new(),
            ledger: PatientLedger::new(),
            rooms: RoomAllocator::default(),
        }
    }
}

impl LedgerState {
    /// Creates a fresh state: standard roster, no patients, all rooms free.
    pub fn new(room_capacity: usize) -> Self {
        Self::from_parts(
            DoctorRegistry::new(),
            PatientLedger::new(),
            RoomAllocator::new(room_capacity),
        )
    }

    /// Assembles a state from its parts without re-deriving anything.
    pub fn from_parts(registry: DoctorRegistry, ledger: PatientLedger, rooms: RoomAllocator) -> Self {
        Self {
            registry,
            ledger,
            rooms,
        }
    }

    /// The doctor roster.
    pub fn registry(&self) -> &DoctorRegistry {
        &self.registry
    }

    /// The patient ledger.
    pub fn ledger(&self) -> &PatientLedger {
        &self.ledger
    }

    /// The room pool.
    pub fn rooms(&self) -> &RoomAllocator {
        &self.rooms
    }

    pub(crate) fn rooms_mut(&mut self) -> &mut RoomAllocator {
        &mut self.rooms
    }

    /// Admits a patient into the lowest free room.
    ///
    /// Fails with [`LedgerError::NoRoomAvailable`] before touching anything
    /// when the pool is full. The doctor name is not validated; an unknown
    /// doctor simply gets no count.
    pub fn admit(
        &mut self,
        name: &str,
        disease: &str,
        doctor: &str,
        severity: &str,
        kind: PatientKind,
    ) -> LedgerResult<&Patient> {
        let room_index = self.rooms.allocate().ok_or(LedgerError::NoRoomAvailable {
            capacity: self.rooms.capacity(),
        })?;
        let room_number = room_number_for(room_index);
        tracing::debug!(room = room_number, patient = name, "room allocated");

        self.registry.increment_count(doctor);
        self.rooms.occupy(room_index);
        Ok(self
            .ledger
            .admit(name, disease, doctor, severity, room_number, kind))
    }

    /// Re-admits a patient record read from disk, keeping its stored room.
    ///
    /// The room is marked occupied when it lies inside the pool and the
    /// doctor's count is incremented.
    pub fn replay(&mut self, patient: Patient) {
        if let Some(index) = patient.room_index() {
            self.rooms.occupy(index);
        }
        self.registry.increment_count(&patient.assigned_doctor);
        self.ledger.push(patient);
    }

    /// Discharges the patient at ledger position `index`.
    ///
    /// Decrements the doctor's count, frees the room and removes the record
    /// as one step. An unknown doctor or out-of-range room does not block the
    /// discharge.
    pub fn discharge(&mut self, index: usize) -> LedgerResult<Patient> {
        let patient = self.ledger.remove_at(index)?;
        self.registry.decrement_count(&patient.assigned_doctor);
        if let Some(room_index) = patient.room_index() {
            self.rooms.free(room_index);
        }
        Ok(patient)
    }

    /// Computes a patient's bill with the current roster surcharges.
    pub fn bill(&self, patient: &Patient) -> f64 {
        billing::cost(
            &patient.disease,
            &patient.severity,
            self.registry.surcharge_of(&patient.assigned_doctor),
            patient.kind,
        )
    }
}

/// Converts a 0-based room index to the 1-based number stored on patients.
fn room_number_for(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_updates_everything() {
        let mut state = LedgerState::new(10);
        let patient = state
            .admit("Alice", "Flu", "Dr. Smith", "Mild", PatientKind::Regular)
            .unwrap()
            .clone();

        assert_eq!(patient.room_number, 1);
        assert!(state.rooms().is_occupied(0));
        assert_eq!(state.registry().get("Dr. Smith").unwrap().patient_count, 1);
        assert_eq!(state.ledger().len(), 1);
    }

    #[test]
    fn test_admit_full_pool_changes_nothing() {
        let mut state = LedgerState::new(1);
        state
            .admit("Alice", "Flu", "Dr. Smith", "Mild", PatientKind::Regular)
            .unwrap();
        let before = state.clone();

        let result = state.admit("Bob", "Flu", "Dr. Taylor", "Mild", PatientKind::Emergency);
        assert!(matches!(result, Err(LedgerError::NoRoomAvailable { capacity: 1 })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_discharge_reverses_admit() {
        let mut state = LedgerState::new(10);
        state
            .admit("Alice", "Flu", "Dr. Smith", "Mild", PatientKind::Regular)
            .unwrap();
        state
            .admit("Bob", "Cold", "Dr. Wilson", "Mild", PatientKind::Regular)
            .unwrap();

        let removed = state.discharge(0).unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(!state.rooms().is_occupied(0));
        assert!(state.rooms().is_occupied(1));
        assert_eq!(state.registry().get("Dr. Smith").unwrap().patient_count, 0);
        assert_eq!(state.registry().get("Dr. Wilson").unwrap().patient_count, 1);

        // Freed room is reused first
        let patient = state
            .admit("Cara", "Fever", "Dr. Allen", "Mild", PatientKind::Regular)
            .unwrap();
        assert_eq!(patient.room_number, 1);
    }

    #[test]
    fn test_discharge_unknown_doctor_still_frees_room() {
        let mut state = LedgerState::new(5);
        state.replay(Patient {
            name: "Ghost".to_string(),
            disease: "Flu".to_string(),
            assigned_doctor: "Dr. Gone".to_string(),
            severity: "Mild".to_string(),
            room_number: 3,
            kind: PatientKind::Regular,
        });
        assert!(state.rooms().is_occupied(2));

        state.discharge(0).unwrap();
        assert!(!state.rooms().is_occupied(2));
        assert!(state.ledger().is_empty());
    }

    #[test]
    fn test_discharge_invalid_index() {
        let mut state = LedgerState::new(5);
        assert!(matches!(
            state.discharge(0),
            Err(LedgerError::InvalidSelection { choice: 0, available: 0 })
        ));
    }

    #[test]
    fn test_replay_ignores_room_outside_pool() {
        let mut state = LedgerState::new(2);
        state.replay(Patient {
            name: "Far".to_string(),
            disease: "Cold".to_string(),
            assigned_doctor: "Dr. Wilson".to_string(),
            severity: "Mild".to_string(),
            room_number: 50,
            kind: PatientKind::Regular,
        });
        assert_eq!(state.rooms().occupied_count(), 0);
        assert_eq!(state.registry().get("Dr. Wilson").unwrap().patient_count, 1);
    }

    #[test]
    fn test_bill_uses_roster_surcharge() {
        let mut state = LedgerState::new(5);
        let patient = state
            .admit("Bob", "Heart Disease", "Dr. Clark", "Severe", PatientKind::Emergency)
            .unwrap()
            .clone();
        assert_eq!(state.bill(&patient), 18750.0);

        let stray = Patient {
            assigned_doctor: "Dr. Gone".to_string(),
            kind: PatientKind::Regular,
            ..patient
        };
        assert_eq!(state.bill(&stray), 10000.0);
    }
}
