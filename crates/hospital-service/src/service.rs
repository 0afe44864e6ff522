//! Hospital service facade.

use hospital_ledger::{codec, LedgerConfig, LedgerError, LedgerResult, LedgerState};
use hospital_types::{Bill, Doctor, DoctorRevenue, Patient, PatientKind, Severity, SummaryReport};

/// A validated admission waiting for its doctor and room.
///
/// Produced by [`HospitalService::plan_admission`]; nothing has been mutated
/// yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionPlan {
    /// Patient name.
    pub name: String,
    /// Disease picked from the menu.
    pub disease: String,
    /// Severity after coercion.
    pub severity: Severity,
    /// True if the entered severity was invalid and replaced by the default.
    pub severity_coerced: bool,
    /// Regular or emergency admission.
    pub kind: PatientKind,
    /// Least-cost doctor for this disease and severity.
    pub recommended_doctor: String,
}

/// Outcome of a committed admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// The new ledger entry.
    pub patient: Patient,
    /// True if the entered severity was replaced by the default.
    pub severity_coerced: bool,
    /// True if a requested doctor was unknown and the recommendation was used.
    pub doctor_fallback: bool,
}

/// Facade driven by the command loop.
///
/// Owns the ledger state and the data file location.
#[derive(Debug, Clone)]
pub struct HospitalService {
    config: LedgerConfig,
    state: LedgerState,
}

impl HospitalService {
    /// Creates a service with a fresh roster, no patients and free rooms.
    pub fn new(config: LedgerConfig) -> Self {
        let state = LedgerState::new(config.room_capacity);
        Self { config, state }
    }

    /// Creates a service from the configured data file.
    ///
    /// A missing or unreadable file starts fresh.
    pub fn open(config: LedgerConfig) -> Self {
        let (state, stats) = codec::load_from_path(&config.data_file, config.room_capacity);
        if let Some(stats) = stats {
            tracing::info!(
                patients = stats.patients_loaded,
                skipped = stats.records_skipped,
                rooms = stats.room_count,
                "data loaded from {}",
                config.data_file.display()
            );
        }
        Self { config, state }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Returns the underlying ledger state.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// All doctors in roster order.
    pub fn doctors(&self) -> &[Doctor] {
        self.state.registry().doctors()
    }

    /// All admitted patients in admission order.
    pub fn patients(&self) -> &[Patient] {
        self.state.ledger().list()
    }

    /// Emergency patients with their ledger positions.
    pub fn emergency_patients(&self) -> Vec<(usize, &Patient)> {
        self.state.ledger().list_emergency()
    }

    /// The disease menu: every roster specialty once, in roster order.
    pub fn diseases(&self) -> Vec<&str> {
        self.state.registry().diseases()
    }

    /// Doctors who treat `disease`, in roster order.
    pub fn doctors_for_disease(&self, disease: &str) -> Vec<&Doctor> {
        self.state.registry().find_by_specialty(disease)
    }

    /// Least-cost doctor for `disease` at `severity`.
    pub fn recommend_doctor(&self, disease: &str, severity: &str) -> Option<&str> {
        self.state.registry().recommend_least_cost(disease, severity)
    }

    /// Rejects empty or blank patient names.
    pub fn check_name(name: &str) -> LedgerResult<()> {
        if name.trim().is_empty() {
            return Err(LedgerError::InvalidName);
        }
        Ok(())
    }

    /// Severity used when the entered one is not recognised.
    pub fn default_severity(kind: PatientKind) -> Severity {
        match kind {
            PatientKind::Regular => Severity::Mild,
            PatientKind::Emergency => Severity::Moderate,
        }
    }

    /// Validates the first admission steps: name, disease choice, severity.
    ///
    /// `disease_choice` is 1-based into [`diseases`](Self::diseases). An
    /// unrecognised severity is replaced by [`default_severity`](Self::default_severity)
    /// rather than rejected.
    pub fn plan_admission(
        &self,
        name: &str,
        disease_choice: usize,
        severity: &str,
        kind: PatientKind,
    ) -> LedgerResult<AdmissionPlan> {
        Self::check_name(name)?;

        let diseases = self.diseases();
        let disease = disease_choice
            .checked_sub(1)
            .and_then(|i| diseases.get(i))
            .ok_or(LedgerError::InvalidDiseaseChoice {
                choice: disease_choice,
                available: diseases.len(),
            })?
            .to_string();

        let (severity, severity_coerced) = match Severity::from_name(severity) {
            Some(s) => (s, false),
            None => {
                let fallback = Self::default_severity(kind);
                tracing::warn!(entered = severity, using = %fallback, "invalid severity, using default");
                (fallback, true)
            }
        };

        let recommended_doctor = self
            .recommend_doctor(&disease, severity.name())
            .unwrap_or_default()
            .to_string();

        Ok(AdmissionPlan {
            name: name.to_string(),
            disease,
            severity,
            severity_coerced,
            kind,
            recommended_doctor,
        })
    }

    /// Assigns the doctor and a room, then records the patient.
    ///
    /// `doctor` overrides the recommendation for regular admissions only; an
    /// unknown name falls back to the recommendation. Emergency admissions
    /// always take the recommended doctor. Fails with
    /// [`LedgerError::NoRoomAvailable`] without mutating anything.
    pub fn commit_admission(
        &mut self,
        plan: &AdmissionPlan,
        doctor: Option<&str>,
    ) -> LedgerResult<Admission> {
        let mut doctor_fallback = false;
        let assigned = match (plan.kind, doctor) {
            (PatientKind::Regular, Some(name)) if self.state.registry().contains(name) => name,
            (PatientKind::Regular, Some(name)) => {
                tracing::warn!(
                    requested = name,
                    using = %plan.recommended_doctor,
                    "doctor not found, using recommended doctor"
                );
                doctor_fallback = true;
                plan.recommended_doctor.as_str()
            }
            _ => plan.recommended_doctor.as_str(),
        };

        let patient = self
            .state
            .admit(
                &plan.name,
                &plan.disease,
                assigned,
                plan.severity.name(),
                plan.kind,
            )?
            .clone();

        tracing::info!(
            patient = %patient.name,
            doctor = %patient.assigned_doctor,
            room = patient.room_number,
            kind = patient.kind.display_label(),
            "patient admitted"
        );

        Ok(Admission {
            patient,
            severity_coerced: plan.severity_coerced,
            doctor_fallback,
        })
    }

    /// Admits a regular patient in one call.
    pub fn add_patient(
        &mut self,
        name: &str,
        disease_choice: usize,
        severity: &str,
        doctor: Option<&str>,
    ) -> LedgerResult<Admission> {
        let plan = self.plan_admission(name, disease_choice, severity, PatientKind::Regular)?;
        self.commit_admission(&plan, doctor)
    }

    /// Admits an emergency patient in one call, always with the recommended doctor.
    pub fn add_emergency_patient(
        &mut self,
        name: &str,
        disease_choice: usize,
        severity: &str,
    ) -> LedgerResult<Admission> {
        let plan = self.plan_admission(name, disease_choice, severity, PatientKind::Emergency)?;
        self.commit_admission(&plan, None)
    }

    fn bill_for(&self, patient: &Patient) -> Bill {
        Bill {
            patient_name: patient.name.clone(),
            disease: patient.disease.clone(),
            severity: patient.severity.clone(),
            doctor: patient.assigned_doctor.clone(),
            room_number: patient.room_number,
            kind: patient.kind,
            cost: self.state.bill(patient),
        }
    }

    /// Bills the patient at ledger position `index` (0-based).
    pub fn generate_bill(&self, index: usize) -> LedgerResult<Bill> {
        let patient = self.state.ledger().get(index)?;
        Ok(self.bill_for(patient))
    }

    /// Bills the emergency patient at `position` in the emergency listing.
    pub fn generate_emergency_bill(&self, position: usize) -> LedgerResult<Bill> {
        let index = self.state.ledger().emergency_position(position)?;
        self.generate_bill(index)
    }

    /// Discharges the patient at ledger position `index` (0-based).
    pub fn discharge_patient(&mut self, index: usize) -> LedgerResult<Patient> {
        let patient = self.state.discharge(index)?;
        tracing::info!(
            patient = %patient.name,
            room = patient.room_number,
            "patient discharged"
        );
        Ok(patient)
    }

    /// Discharges the emergency patient at `position` in the emergency listing.
    pub fn discharge_emergency_patient(&mut self, position: usize) -> LedgerResult<Patient> {
        let index = self.state.ledger().emergency_position(position)?;
        self.discharge_patient(index)
    }

    /// Revenue per roster doctor and in total, from fresh bills.
    pub fn summary_report(&self) -> SummaryReport {
        let mut report = SummaryReport {
            doctors: self
                .doctors()
                .iter()
                .map(|d| DoctorRevenue {
                    doctor: d.name.clone(),
                    patients: 0,
                    revenue: 0.0,
                })
                .collect(),
            total_revenue: 0.0,
        };

        for patient in self.patients() {
            let cost = self.state.bill(patient);
            if let Some(row) = report
                .doctors
                .iter_mut()
                .find(|r| r.doctor == patient.assigned_doctor)
            {
                row.patients += 1;
                row.revenue += cost;
            }
            report.total_revenue += cost;
        }

        report
    }

    /// Writes a full snapshot to the configured data file.
    pub fn save(&self) -> LedgerResult<()> {
        match codec::save_to_path(&self.state, &self.config.data_file) {
            Ok(()) => {
                tracing::info!(path = %self.config.data_file.display(), "data saved");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %self.config.data_file.display(), error = %e, "save failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> HospitalService {
        HospitalService::new(LedgerConfig::default())
    }

    fn disease_choice(service: &HospitalService, disease: &str) -> usize {
        service.diseases().iter().position(|d| *d == disease).unwrap() + 1
    }

    fn count_of(service: &HospitalService, doctor: &str) -> u32 {
        service
            .doctors()
            .iter()
            .find(|d| d.name == doctor)
            .unwrap()
            .patient_count
    }

    #[test]
    fn test_alice_flu_scenario() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");
        let admission = service.add_patient("Alice", flu, "Mild", None).unwrap();

        assert_eq!(admission.patient.assigned_doctor, "Dr. Smith");
        assert_eq!(admission.patient.room_number, 1);
        assert!(!admission.severity_coerced);

        let bill = service.generate_bill(0).unwrap();
        assert_eq!(bill.cost, 1800.0);
        assert_eq!(bill.patient_name, "Alice");
        assert_eq!(bill.doctor, "Dr. Smith");
        assert_eq!(bill.kind, PatientKind::Regular);
    }

    #[test]
    fn test_bob_emergency_scenario() {
        let mut service = service();
        let heart = disease_choice(&service, "Heart Disease");
        let admission = service.add_emergency_patient("Bob", heart, "Severe").unwrap();

        assert_eq!(admission.patient.assigned_doctor, "Dr. Clark");
        assert_eq!(admission.patient.kind, PatientKind::Emergency);

        let bill = service.generate_emergency_bill(0).unwrap();
        assert_eq!(bill.cost, 18750.0);
        assert_eq!(service.generate_bill(0).unwrap(), bill);
    }

    #[test]
    fn test_invalid_name_rejected() {
        let mut service = service();
        assert!(matches!(
            service.add_patient("", 1, "Mild", None),
            Err(LedgerError::InvalidName)
        ));
        assert!(matches!(
            service.add_emergency_patient("   ", 1, "Mild"),
            Err(LedgerError::InvalidName)
        ));
        assert!(service.patients().is_empty());
    }

    #[test]
    fn test_invalid_disease_choice_rejected() {
        let mut service = service();
        for choice in [0, 14, 99] {
            assert!(matches!(
                service.add_patient("Alice", choice, "Mild", None),
                Err(LedgerError::InvalidDiseaseChoice { available: 13, .. })
            ));
        }
        assert!(service.patients().is_empty());
        assert!(service.doctors().iter().all(|d| d.patient_count == 0));
    }

    #[test]
    fn test_invalid_severity_is_coerced_per_kind() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");

        let regular = service.add_patient("Alice", flu, "Terrible", None).unwrap();
        assert!(regular.severity_coerced);
        assert_eq!(regular.patient.severity, "Mild");

        let emergency = service.add_emergency_patient("Bob", flu, "mild").unwrap();
        assert!(emergency.severity_coerced);
        assert_eq!(emergency.patient.severity, "Moderate");
    }

    #[test]
    fn test_doctor_override() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");

        let chosen = service
            .add_patient("Alice", flu, "Mild", Some("Dr. Taylor"))
            .unwrap();
        assert_eq!(chosen.patient.assigned_doctor, "Dr. Taylor");
        assert!(!chosen.doctor_fallback);

        // Any roster doctor is accepted, specialty or not
        let off_specialty = service
            .add_patient("Bea", flu, "Mild", Some("Dr. Hall"))
            .unwrap();
        assert_eq!(off_specialty.patient.assigned_doctor, "Dr. Hall");

        let unknown = service
            .add_patient("Cal", flu, "Mild", Some("Dr. House"))
            .unwrap();
        assert_eq!(unknown.patient.assigned_doctor, "Dr. Smith");
        assert!(unknown.doctor_fallback);
    }

    #[test]
    fn test_emergency_ignores_override() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");
        let plan = service
            .plan_admission("Bob", flu, "Mild", PatientKind::Emergency)
            .unwrap();
        let admission = service.commit_admission(&plan, Some("Dr. Taylor")).unwrap();
        assert_eq!(admission.patient.assigned_doctor, "Dr. Smith");
        assert!(!admission.doctor_fallback);
    }

    #[test]
    fn test_plan_does_not_mutate() {
        let service = service();
        let plan = service
            .plan_admission("Alice", 1, "Severe", PatientKind::Regular)
            .unwrap();
        assert_eq!(plan.disease, "Flu");
        assert_eq!(plan.recommended_doctor, "Dr. Smith");
        assert_eq!(plan.severity, Severity::Severe);
        assert!(service.patients().is_empty());
    }

    #[test]
    fn test_full_house_rejects_without_mutation() {
        let mut service = HospitalService::new(LedgerConfig {
            room_capacity: 2,
            ..Default::default()
        });
        service.add_patient("A", 1, "Mild", None).unwrap();
        service.add_emergency_patient("B", 1, "Mild").unwrap();
        let before = service.state().clone();

        assert!(matches!(
            service.add_patient("C", 1, "Mild", None),
            Err(LedgerError::NoRoomAvailable { capacity: 2 })
        ));
        assert!(matches!(
            service.add_emergency_patient("D", 1, "Mild"),
            Err(LedgerError::NoRoomAvailable { .. })
        ));
        assert_eq!(service.state(), &before);
    }

    #[test]
    fn test_hundred_rooms_then_rejection() {
        let mut service = service();
        for i in 0..100 {
            let admission = service
                .add_patient(&format!("Patient {}", i + 1), 1, "Mild", None)
                .unwrap();
            assert_eq!(admission.patient.room_number, i + 1);
        }
        assert_eq!(service.state().rooms().occupied_count(), 100);
        let before = service.state().clone();

        assert!(matches!(
            service.add_patient("Late", 2, "Mild", None),
            Err(LedgerError::NoRoomAvailable { capacity: 100 })
        ));
        assert!(matches!(
            service.add_emergency_patient("Later", 1, "Severe"),
            Err(LedgerError::NoRoomAvailable { capacity: 100 })
        ));
        assert_eq!(service.state(), &before);
        assert_eq!(service.patients().len(), 100);
        assert_eq!(count_of(&service, "Dr. Smith"), 100);
    }

    #[test]
    fn test_discharge_updates_counts_rooms_and_summary() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");
        let cold = disease_choice(&service, "Cold");
        service.add_patient("Alice", flu, "Mild", None).unwrap();
        service.add_patient("Bea", cold, "Moderate", None).unwrap();
        service.add_emergency_patient("Cal", flu, "Severe").unwrap();

        let before = service.summary_report();
        let bill = service.generate_bill(1).unwrap();
        let removed = service.discharge_patient(1).unwrap();
        let after = service.summary_report();

        assert_eq!(removed.name, "Bea");
        assert_eq!(count_of(&service, "Dr. Wilson"), 0);
        assert_eq!(count_of(&service, "Dr. Smith"), 2);
        assert!(!service.state().rooms().is_occupied(1));
        assert_eq!(after.total_revenue, before.total_revenue - bill.cost);
        assert_eq!(service.patients()[1].name, "Cal");
    }

    #[test]
    fn test_discharge_emergency_by_position() {
        let mut service = service();
        service.add_patient("Alice", 1, "Mild", None).unwrap();
        service.add_emergency_patient("Bob", 1, "Mild").unwrap();
        service.add_emergency_patient("Cal", 2, "Mild").unwrap();

        let removed = service.discharge_emergency_patient(1).unwrap();
        assert_eq!(removed.name, "Cal");
        assert_eq!(service.emergency_patients().len(), 1);
        assert!(matches!(
            service.discharge_emergency_patient(1),
            Err(LedgerError::InvalidSelection { choice: 1, available: 1 })
        ));
    }

    #[test]
    fn test_summary_report() {
        let mut service = service();
        let flu = disease_choice(&service, "Flu");
        let heart = disease_choice(&service, "Heart Disease");
        service.add_patient("Alice", flu, "Mild", None).unwrap();
        service.add_patient("Amy", flu, "Mild", None).unwrap();
        service.add_emergency_patient("Bob", heart, "Severe").unwrap();

        let report = service.summary_report();
        assert_eq!(report.doctors.len(), 10);
        assert_eq!(report.doctors[0].doctor, "Dr. Smith");

        let smith = report.row("Dr. Smith").unwrap();
        assert_eq!(smith.patients, 2);
        assert_eq!(smith.revenue, 3600.0);

        let clark = report.row("Dr. Clark").unwrap();
        assert_eq!(clark.patients, 1);
        assert_eq!(clark.revenue, 18750.0);

        assert_eq!(report.row("Dr. Hall").unwrap().patients, 0);
        assert_eq!(report.total_revenue, 22350.0);
    }

    #[test]
    fn test_bill_out_of_range() {
        let service = service();
        assert!(matches!(
            service.generate_bill(0),
            Err(LedgerError::InvalidSelection { choice: 0, available: 0 })
        ));
        assert!(service.generate_emergency_bill(0).is_err());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = LedgerConfig::with_data_file(dir.path().join("hospital_data.txt"));

        let mut service = HospitalService::new(config.clone());
        service.add_patient("Alice", 1, "Mild", None).unwrap();
        service.add_emergency_patient("Bob", 10, "Severe").unwrap();
        service.discharge_patient(0).unwrap();
        service.add_patient("Cara", 2, "Moderate", Some("Dr. Wilson")).unwrap();
        service.save().unwrap();

        let reopened = HospitalService::open(config);
        assert_eq!(reopened.patients(), service.patients());
        assert_eq!(reopened.state(), service.state());
        assert_eq!(reopened.summary_report(), service.summary_report());
    }

    #[test]
    fn test_open_without_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let service = HospitalService::open(LedgerConfig::with_data_file(dir.path().join("none.txt")));
        assert!(service.patients().is_empty());
        assert_eq!(service.state().rooms().capacity(), 100);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let service = HospitalService::new(LedgerConfig::with_data_file(
            dir.path().join("no_such_dir").join("data.txt"),
        ));
        assert!(matches!(service.save(), Err(LedgerError::Io(_))));
    }
}
