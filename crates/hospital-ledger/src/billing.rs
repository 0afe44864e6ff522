//! Bill computation.
//!
//! A bill is either the tariff formula
//! `disease_cost * severity_multiplier + surcharge` (times 1.5 for
//! emergencies) or, when either table lookup misses, a flat
//! [`DEFAULT_BILL`](well_known::DEFAULT_BILL) that no factor touches.

use hospital_types::{well_known, PatientKind};

/// Computes the tariff formula without the admission-kind factor.
///
/// Returns `None` if the disease or severity is not in the tariff tables.
pub fn formula_cost(disease: &str, severity: &str, surcharge: f64) -> Option<f64> {
    let base = well_known::disease_cost(disease)?;
    let multiplier = well_known::severity_multiplier(severity)?;
    Some(base * multiplier + surcharge)
}

/// Computes the amount due for one patient.
///
/// # Example
///
/// ```
/// use hospital_ledger::billing;
/// use hospital_types::PatientKind;
///
/// assert_eq!(billing::cost("Flu", "Mild", 800.0, PatientKind::Regular), 1800.0);
/// assert_eq!(billing::cost("Heart Disease", "Severe", 2500.0, PatientKind::Emergency), 18750.0);
/// assert_eq!(billing::cost("Scurvy", "Severe", 2500.0, PatientKind::Emergency), 500.0);
/// ```
pub fn cost(disease: &str, severity: &str, surcharge: f64, kind: PatientKind) -> f64 {
    match formula_cost(disease, severity, surcharge) {
        Some(amount) => amount * kind.billing_multiplier(),
        None => {
            tracing::debug!(disease, severity, "tariff lookup missed, billing flat default");
            well_known::DEFAULT_BILL
        }
    }
}
