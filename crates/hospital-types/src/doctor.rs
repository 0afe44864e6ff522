//! Doctor type.

/// A doctor on the fixed roster.
///
/// # Examples
///
/// ```
/// use hospital_types::Doctor;
///
/// let doctor = Doctor::new("Dr. Smith", vec!["Flu".into(), "Cold".into()], 800.0);
/// assert!(doctor.treats("Flu"));
/// assert!(!doctor.treats("Asthma"));
/// assert_eq!(doctor.patient_count, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Doctor {
    /// Unique name, also the foreign key stored on patients.
    pub name: String,
    /// Diseases this doctor treats, in roster order.
    pub specialties: Vec<String>,
    /// Number of currently admitted patients assigned to this doctor.
    pub patient_count: u32,
    /// Flat fee added to every bill of this doctor's patients.
    pub surcharge: f64,
}

impl Doctor {
    /// Creates a doctor with no patients.
    pub fn new(name: impl Into<String>, specialties: Vec<String>, surcharge: f64) -> Self {
        Self {
            name: name.into(),
            specialties,
            patient_count: 0,
            surcharge,
        }
    }

    /// Returns true if `disease` is one of this doctor's specialties.
    pub fn treats(&self, disease: &str) -> bool {
        self.specialties.iter().any(|s| s == disease)
    }
}
