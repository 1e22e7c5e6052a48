//! Catalogue Validation
//!
//! The computation functions never reject input, so structural preconditions
//! are checked here, once, when a catalogue is loaded.
//!
//! # Drug Constraints
//!
//! ## Dose range
//! - `min < max`, both finite
//! - `typical` within `[min, max]`
//!
//! ## Linear receptor activity
//! - Finite and within `[-100, 100]`
//!
//! ## Hill pharmacology
//! - `ec50 >= MIN_EC50_NM` so that curve sampling stays strictly increasing
//! - `emax` in `[0, 100]`
//! - `kd > 0`, `hill_coeff > 0`
//! - `kd` never exceeds the null-activity sentinel, and the sentinel is always
//!   paired with `emax = 0`
//!
//! # Scenario Constraints
//! - All baseline vitals finite, `sbp > dbp`
//! - `optimal_drug` and `contraindicated` reference drugs in the catalogue

use std::collections::HashSet;

use thiserror::Error;
use tracing::warn;

use crate::drug::{DoseRange, Drug};
use crate::pharmacology::{ReceptorPharmacology, NULL_ACTIVITY_KD};
use crate::receptor::Receptor;
use crate::scenario::Scenario;

/// Error type for catalogue loading and validation
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("drug '{drug}': invalid dose range: {reason}")]
    InvalidDoseRange { drug: String, reason: String },

    #[error("drug '{drug}': {receptor} activity {value} outside [-100, 100]")]
    ReceptorActivityOutOfRange {
        drug: String,
        receptor: Receptor,
        value: f64,
    },

    #[error("drug '{drug}': invalid {receptor} pharmacology: {reason}")]
    InvalidPharmacology {
        drug: String,
        receptor: Receptor,
        reason: String,
    },

    #[error("drug '{drug}': {receptor} misuses the null-activity sentinel (kd {kd}, emax {emax})")]
    InconsistentSentinel {
        drug: String,
        receptor: Receptor,
        kd: f64,
        emax: f64,
    },

    #[error("scenario '{scenario}': invalid baseline: {reason}")]
    InvalidBaseline { scenario: String, reason: String },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("scenario '{scenario}' references unknown drug '{drug}'")]
    UnknownDrugReference { scenario: String, drug: String },

    #[error("catalogue has no {0}")]
    EmptyCatalogue(&'static str),

    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalogue: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimum EC50 accepted (nM)
pub const MIN_EC50_NM: f64 = 1e-3;

/// Maximum magnitude of linear receptor activity
pub const MAX_ACTIVITY: f64 = 100.0;

/// Maximum Emax (% of system maximum)
pub const MAX_EMAX: f64 = 100.0;

/// Validate a drug's dose range
pub fn validate_dose_range(drug_id: &str, dose: &DoseRange) -> Result<(), CatalogueError> {
    let fail = |reason: String| CatalogueError::InvalidDoseRange {
        drug: drug_id.to_string(),
        reason,
    };

    if !dose.min.is_finite() || !dose.max.is_finite() || !dose.typical.is_finite() {
        return Err(fail("bounds must be finite".to_string()));
    }
    if dose.min >= dose.max {
        return Err(fail(format!("min {} must be below max {}", dose.min, dose.max)));
    }
    if !dose.contains(dose.typical) {
        return Err(fail(format!(
            "typical {} outside [{}, {}]",
            dose.typical, dose.min, dose.max
        )));
    }
    Ok(())
}

/// Validate Hill parameters at one receptor
pub fn validate_pharmacology(
    drug_id: &str,
    receptor: Receptor,
    p: &ReceptorPharmacology,
) -> Result<(), CatalogueError> {
    let fail = |reason: String| CatalogueError::InvalidPharmacology {
        drug: drug_id.to_string(),
        receptor,
        reason,
    };

    if !(p.ec50.is_finite() && p.emax.is_finite() && p.kd.is_finite() && p.hill_coeff.is_finite())
    {
        return Err(fail("parameters must be finite".to_string()));
    }
    if p.ec50 < MIN_EC50_NM {
        return Err(fail(format!("ec50 {} below {} nM", p.ec50, MIN_EC50_NM)));
    }
    if !(0.0..=MAX_EMAX).contains(&p.emax) {
        return Err(fail(format!("emax {} outside [0, {}]", p.emax, MAX_EMAX)));
    }
    if p.kd <= 0.0 {
        return Err(fail(format!("kd {} must be positive", p.kd)));
    }
    if p.hill_coeff <= 0.0 {
        return Err(fail(format!(
            "hill coefficient {} must be positive",
            p.hill_coeff
        )));
    }

    let misused = p.kd > NULL_ACTIVITY_KD || (p.kd == NULL_ACTIVITY_KD && p.emax != 0.0);
    if misused {
        return Err(CatalogueError::InconsistentSentinel {
            drug: drug_id.to_string(),
            receptor,
            kd: p.kd,
            emax: p.emax,
        });
    }
    Ok(())
}

/// Validate a single drug
pub fn validate_drug(drug: &Drug) -> Result<(), CatalogueError> {
    validate_dose_range(&drug.id, &drug.dose)?;

    for (&receptor, &value) in &drug.receptors {
        if !value.is_finite() || value.abs() > MAX_ACTIVITY {
            return Err(CatalogueError::ReceptorActivityOutOfRange {
                drug: drug.id.clone(),
                receptor,
                value,
            });
        }
    }

    if let Some(pharmacology) = &drug.pharmacology {
        for (&receptor, p) in pharmacology {
            validate_pharmacology(&drug.id, receptor, p)?;
        }

        for (&receptor, &value) in &drug.receptors {
            if value != 0.0 && !pharmacology.contains_key(&receptor) {
                // Not fatal: curves are simply unavailable for this receptor
                warn!(drug = %drug.id, %receptor, "linear activity without Hill parameters");
            }
        }
    }
    Ok(())
}

/// Validate a scenario's baseline vitals
pub fn validate_scenario(scenario: &Scenario) -> Result<(), CatalogueError> {
    let b = &scenario.baseline;
    let fields = [
        ("hr", b.hr),
        ("sbp", b.sbp),
        ("dbp", b.dbp),
        ("svr", b.svr),
        ("co", b.co),
        ("spo2", b.spo2),
        ("bronchodilation", b.bronchodilation),
    ];

    if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
        return Err(CatalogueError::InvalidBaseline {
            scenario: scenario.id.clone(),
            reason: format!("{} is not finite", name),
        });
    }
    if b.sbp <= b.dbp {
        return Err(CatalogueError::InvalidBaseline {
            scenario: scenario.id.clone(),
            reason: format!("sbp {} must exceed dbp {}", b.sbp, b.dbp),
        });
    }

    if let Some(optimal) = &scenario.optimal_drug {
        if scenario.is_contraindicated(optimal) {
            warn!(scenario = %scenario.id, drug = %optimal, "optimal drug is also contraindicated");
        }
    }
    Ok(())
}

/// Validate a whole catalogue, including cross references
pub fn validate_catalogue(drugs: &[Drug], scenarios: &[Scenario]) -> Result<(), CatalogueError> {
    if drugs.is_empty() {
        return Err(CatalogueError::EmptyCatalogue("drugs"));
    }
    if scenarios.is_empty() {
        return Err(CatalogueError::EmptyCatalogue("scenarios"));
    }

    let mut drug_ids = HashSet::new();
    for drug in drugs {
        if !drug_ids.insert(drug.id.as_str()) {
            return Err(CatalogueError::DuplicateId {
                kind: "drug",
                id: drug.id.clone(),
            });
        }
        validate_drug(drug)?;
    }

    let mut scenario_ids = HashSet::new();
    for scenario in scenarios {
        if !scenario_ids.insert(scenario.id.as_str()) {
            return Err(CatalogueError::DuplicateId {
                kind: "scenario",
                id: scenario.id.clone(),
            });
        }
        validate_scenario(scenario)?;

        let referenced = scenario
            .optimal_drug
            .iter()
            .chain(scenario.contraindicated.iter());
        for drug_id in referenced {
            if !drug_ids.contains(drug_id.as_str()) {
                return Err(CatalogueError::UnknownDrugReference {
                    scenario: scenario.id.clone(),
                    drug: drug_id.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dose(min: f64, max: f64, typical: f64) -> DoseRange {
        DoseRange {
            min,
            max,
            typical,
            unit: "mg".to_string(),
            route: "IV".to_string(),
        }
    }

    #[test]
    fn test_valid_dose_range() {
        assert!(validate_dose_range("x", &dose(0.5, 3.0, 1.0)).is_ok());
    }

    #[test]
    fn test_invalid_dose_ranges() {
        assert!(matches!(
            validate_dose_range("x", &dose(3.0, 3.0, 3.0)),
            Err(CatalogueError::InvalidDoseRange { .. })
        ));
        assert!(validate_dose_range("x", &dose(1.0, 2.0, 5.0)).is_err());
        assert!(validate_dose_range("x", &dose(f64::NAN, 2.0, 1.0)).is_err());
    }

    #[test]
    fn test_pharmacology_bounds() {
        let ok = ReceptorPharmacology::new(50.0, 100.0, 60.0);
        assert!(validate_pharmacology("x", Receptor::Alpha1, &ok).is_ok());

        let tiny_ec50 = ReceptorPharmacology::new(1e-6, 100.0, 60.0);
        assert!(validate_pharmacology("x", Receptor::Alpha1, &tiny_ec50).is_err());

        let big_emax = ReceptorPharmacology::new(50.0, 120.0, 60.0);
        assert!(validate_pharmacology("x", Receptor::Alpha1, &big_emax).is_err());

        let flat = ReceptorPharmacology::new(50.0, 100.0, 60.0).with_hill_coeff(0.0);
        assert!(validate_pharmacology("x", Receptor::Alpha1, &flat).is_err());
    }

    #[test]
    fn test_sentinel_consistency() {
        let sentinel = ReceptorPharmacology::null_activity();
        assert!(validate_pharmacology("x", Receptor::Beta1, &sentinel).is_ok());

        let active_sentinel = ReceptorPharmacology::new(50.0, 40.0, NULL_ACTIVITY_KD);
        assert!(matches!(
            validate_pharmacology("x", Receptor::Beta1, &active_sentinel),
            Err(CatalogueError::InconsistentSentinel { .. })
        ));

        let beyond = ReceptorPharmacology::new(50.0, 0.0, 20_000.0);
        assert!(matches!(
            validate_pharmacology("x", Receptor::Beta1, &beyond),
            Err(CatalogueError::InconsistentSentinel { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogueError::UnknownDrugReference {
            scenario: "asthma".to_string(),
            drug: "aspirin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "scenario 'asthma' references unknown drug 'aspirin'"
        );
        assert_eq!(
            CatalogueError::EmptyCatalogue("drugs").to_string(),
            "catalogue has no drugs"
        );
    }
}
