//! Ledger enumeration types.
//!
//! This module provides enum representations for the coded values carried by
//! a patient record: the severity of the condition and the admission kind.

/// Severity of a patient's condition.
///
/// Patients store their severity as free text so that records loaded from
/// disk survive unchanged; this enum is the validated form used when a new
/// admission is entered.
///
/// # Examples
///
/// ```
/// use hospital_types::Severity;
///
/// assert_eq!(Severity::from_name("Severe"), Some(Severity::Severe));
/// assert_eq!(Severity::from_name("severe"), None);
/// assert_eq!(Severity::Moderate.multiplier(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Mild condition, multiplier 1.0.
    Mild,
    /// Moderate condition, multiplier 1.5.
    Moderate,
    /// Severe condition, multiplier 2.0.
    Severe,
}

impl Severity {
    /// All severities in menu order.
    pub const ALL: [Severity; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    /// Parses a severity from its exact (case-sensitive) name.
    ///
    /// Returns `None` for anything other than `Mild`, `Moderate` or `Severe`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Mild" => Some(Self::Mild),
            "Moderate" => Some(Self::Moderate),
            "Severe" => Some(Self::Severe),
            _ => None,
        }
    }

    /// Returns the name used in patient records and the persisted file.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Returns the factor applied to a disease's base cost.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Mild => 1.0,
            Self::Moderate => 1.5,
            Self::Severe => 2.0,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Admission kind of a patient.
///
/// Regular and emergency patients share every field; the kind only selects
/// the billing factor, the tag written to the data file and the label shown
/// in listings.
///
/// # Examples
///
/// ```
/// use hospital_types::PatientKind;
///
/// assert_eq!(PatientKind::from_tag("EMERGENCY"), Some(PatientKind::Emergency));
/// assert_eq!(PatientKind::Emergency.billing_multiplier(), 1.5);
/// assert_eq!(PatientKind::Regular.display_label(), "Patient");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatientKind {
    /// Regular admission.
    #[default]
    Regular,
    /// Emergency admission, billed at 1.5x.
    Emergency,
}

/// Per-kind behaviour table.
struct KindTraits {
    billing_multiplier: f64,
    save_tag: &'static str,
    display_label: &'static str,
}

const REGULAR_TRAITS: KindTraits = KindTraits {
    billing_multiplier: 1.0,
    save_tag: "PATIENT",
    display_label: "Patient",
};

const EMERGENCY_TRAITS: KindTraits = KindTraits {
    billing_multiplier: crate::well_known::EMERGENCY_MULTIPLIER,
    save_tag: "EMERGENCY",
    display_label: "Emergency Patient",
};

impl PatientKind {
    /// Record tag for regular patients in the data file.
    pub const REGULAR_TAG: &'static str = REGULAR_TRAITS.save_tag;
    /// Record tag for emergency patients in the data file.
    pub const EMERGENCY_TAG: &'static str = EMERGENCY_TRAITS.save_tag;

    fn traits(self) -> &'static KindTraits {
        match self {
            Self::Regular => &REGULAR_TRAITS,
            Self::Emergency => &EMERGENCY_TRAITS,
        }
    }

    /// Creates a PatientKind from its record tag.
    ///
    /// Returns `None` if the tag is not a known patient record tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::REGULAR_TAG => Some(Self::Regular),
            Self::EMERGENCY_TAG => Some(Self::Emergency),
            _ => None,
        }
    }

    /// Factor applied to the whole formula bill.
    pub fn billing_multiplier(self) -> f64 {
        self.traits().billing_multiplier
    }

    /// Returns the record tag written to the data file.
    pub fn save_tag(self) -> &'static str {
        self.traits().save_tag
    }

    /// Returns the label used when listing patients.
    pub fn display_label(self) -> &'static str {
        self.traits().display_label
    }

    /// Returns true for emergency admissions.
    pub fn is_emergency(self) -> bool {
        self == Self::Emergency
    }
}
