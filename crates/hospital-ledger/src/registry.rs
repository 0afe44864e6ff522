//! Doctor roster with live patient counts.

use hospital_types::{well_known, Doctor};

use crate::billing;

/// The fixed roster of doctors.
///
/// Always built from [`well_known::ROSTER`] with zero counts; counts are only
/// ever derived from admissions, discharges and replayed patients.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorRegistry {
    doctors: Vec<Doctor>,
}

impl Default for DoctorRegistry {
    fn default() -> Self {
        Self {
            doctors: well_known::roster(),
        }
    }
}

impl DoctorRegistry {
    /// Creates the standard roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry from an explicit roster (roster order preserved).
    ///
    /// An empty roster is allowed but makes
    /// [`recommend_least_cost`](Self::recommend_least_cost) return `None`.
    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// All doctors in roster order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Looks up a doctor by exact name.
    pub fn get(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name == name)
    }

    /// Returns true if `name` is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Doctors treating `disease`, in roster order.
    pub fn find_by_specialty(&self, disease: &str) -> Vec<&Doctor> {
        self.doctors.iter().filter(|d| d.treats(disease)).collect()
    }

    /// Every specialty on the roster, de-duplicated, in first-appearance order.
    pub fn diseases(&self) -> Vec<&str> {
        let mut diseases: Vec<&str> = Vec::new();
        for specialty in self.doctors.iter().flat_map(|d| d.specialties.iter()) {
            if !diseases.contains(&specialty.as_str()) {
                diseases.push(specialty);
            }
        }
        diseases
    }

    /// Recommends the qualifying doctor with the lowest formula bill.
    ///
    /// Ties keep the earliest roster entry. When nobody qualifies, or the
    /// tariff tables miss the disease or severity, the first roster doctor is
    /// returned. `None` only for an empty roster.
    pub fn recommend_least_cost(&self, disease: &str, severity: &str) -> Option<&str> {
        let mut best: Option<(&Doctor, f64)> = None;

        for doctor in self.doctors.iter().filter(|d| d.treats(disease)) {
            let Some(cost) = billing::formula_cost(disease, severity, doctor.surcharge) else {
                continue;
            };
            if best.map_or(true, |(_, min)| cost < min) {
                best = Some((doctor, cost));
            }
        }

        best.map(|(doctor, _)| doctor)
            .or_else(|| self.doctors.first())
            .map(|doctor| doctor.name.as_str())
    }

    /// Adds one patient to `name`'s count. Unknown names are ignored.
    pub fn increment_count(&mut self, name: &str) {
        match self.doctors.iter_mut().find(|d| d.name == name) {
            Some(doctor) => doctor.patient_count += 1,
            None => tracing::debug!(doctor = name, "count increment for unknown doctor ignored"),
        }
    }

    /// Removes one patient from `name`'s count. Unknown names are ignored.
    pub fn decrement_count(&mut self, name: &str) {
        match self.doctors.iter_mut().find(|d| d.name == name) {
            Some(doctor) => doctor.patient_count = doctor.patient_count.saturating_sub(1),
            None => tracing::debug!(doctor = name, "count decrement for unknown doctor ignored"),
        }
    }

    /// Surcharge of `name`, or 0 if not on the roster.
    pub fn surcharge_of(&self, name: &str) -> f64 {
        self.get(name).map_or(0.0, |d| d.surcharge)
    }
}
