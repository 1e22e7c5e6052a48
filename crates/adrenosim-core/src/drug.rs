//! Drug definitions
//!
//! A drug carries two independent receptor models:
//!
//! - `receptors`: signed linear activity in [-100, 100] (negative = blockade),
//!   driving the vital-effect and receptor-activation models
//! - `pharmacology`: Hill-equation parameters per receptor, driving dose-response
//!   curves and receptor analysis
//!
//! The two describe the same biology at different resolutions and are allowed
//! to disagree. Neither is derived from the other.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::pharmacology::ReceptorPharmacology;
use crate::receptor::Receptor;

/// Linear activity at which a receptor counts as meaningfully engaged
pub const ACTIVITY_THRESHOLD: f64 = 20.0;

/// Dosing information
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoseRange {
    /// Lowest dose with any modelled effect
    pub min: f64,
    /// Dose at which the modelled effect saturates
    pub max: f64,
    /// Usual starting dose
    pub typical: f64,
    /// e.g. "mcg/kg/min"
    pub unit: String,
    /// e.g. "IV infusion"
    pub route: String,
}

impl DoseRange {
    /// Dose normalised to `[min, max]`, clamped to `[0, 1]`.
    ///
    /// Sub-threshold doses have no partial effect and supramaximal doses do not
    /// overshoot: the linear models saturate at the ends of the range.
    pub fn potency(&self, dose: f64) -> f64 {
        let ratio = (dose - self.min) / (self.max - self.min);
        ratio.clamp(0.0, 1.0)
    }

    /// Whether a dose lies within the labelled range
    pub fn contains(&self, dose: f64) -> bool {
        dose >= self.min && dose <= self.max
    }
}

/// Change in a vital sign between minimum and maximum dose
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectRange {
    pub min: f64,
    pub max: f64,
}

impl EffectRange {
    pub const NONE: EffectRange = EffectRange { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        EffectRange { min, max }
    }

    /// Linear interpolation at a potency in [0, 1]
    pub fn at(&self, potency: f64) -> f64 {
        self.min + (self.max - self.min) * potency
    }
}

/// Per-vital effect ranges
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrugEffects {
    /// Heart rate (bpm)
    pub hr: EffectRange,
    /// Systolic BP (mmHg)
    pub sbp: EffectRange,
    /// Diastolic BP (mmHg)
    pub dbp: EffectRange,
    /// Systemic vascular resistance (dyn·s/cm⁵)
    pub svr: EffectRange,
    /// Cardiac output (L/min)
    pub co: EffectRange,
    /// Bronchodilation (%)
    pub bronchodilation: EffectRange,
}

/// A drug in the simulator catalogue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    pub id: String,
    pub name: String,
    /// Pharmacological class, e.g. "Selective β1-blocker"
    pub class: String,
    /// Linear receptor activity, -100 (full blockade) to 100 (full agonism)
    pub receptors: BTreeMap<Receptor, f64>,
    /// Hill-equation parameters, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pharmacology: Option<BTreeMap<Receptor, ReceptorPharmacology>>,
    pub dose: DoseRange,
    pub effects: DrugEffects,
    /// Elimination half-life in minutes (descriptive only)
    pub half_life: f64,
    #[serde(default)]
    pub indications: Vec<String>,
}

impl Drug {
    /// Linear activity at a receptor (0 when not listed)
    pub fn activity(&self, receptor: Receptor) -> f64 {
        self.receptors.get(&receptor).copied().unwrap_or(0.0)
    }

    /// Receptors where the drug is a meaningful agonist (activity > 20)
    pub fn agonized_receptors(&self) -> impl Iterator<Item = Receptor> + '_ {
        self.receptors
            .iter()
            .filter(|(_, activity)| **activity > ACTIVITY_THRESHOLD)
            .map(|(&r, _)| r)
    }

    /// Receptors where the drug is a meaningful antagonist (activity < -20)
    pub fn blocked_receptors(&self) -> impl Iterator<Item = Receptor> + '_ {
        self.receptors
            .iter()
            .filter(|(_, activity)| **activity < -ACTIVITY_THRESHOLD)
            .map(|(&r, _)| r)
    }

    /// Hill parameters at a receptor, if the drug has any
    pub fn pharmacology_at(&self, receptor: Receptor) -> Option<&ReceptorPharmacology> {
        self.pharmacology.as_ref().and_then(|p| p.get(&receptor))
    }

    /// Format a dose with this drug's unit, e.g. `"0.30 mg"`
    pub fn format_dose(&self, dose: f64) -> String {
        format!("{:.2} {}", dose, self.dose.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dose(min: f64, max: f64) -> DoseRange {
        DoseRange {
            min,
            max,
            typical: min,
            unit: "mg".to_string(),
            route: "IV".to_string(),
        }
    }

    #[test]
    fn test_potency_clamps() {
        let d = dose(2.5, 15.0);
        assert_eq!(d.potency(2.5), 0.0);
        assert_eq!(d.potency(15.0), 1.0);
        assert_eq!(d.potency(0.0), 0.0);
        assert_eq!(d.potency(100.0), 1.0);
        assert!((d.potency(8.75) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_effect_interpolation() {
        let hr = EffectRange::new(10.0, 40.0);
        assert_eq!(hr.at(0.0), 10.0);
        assert_eq!(hr.at(1.0), 40.0);
        assert_eq!(hr.at(0.5), 25.0);
        assert_eq!(EffectRange::NONE.at(0.7), 0.0);
    }

    #[test]
    fn test_receptor_selection() {
        let mut receptors = BTreeMap::new();
        receptors.insert(Receptor::Alpha1, -30.0);
        receptors.insert(Receptor::Alpha2, -20.0);
        receptors.insert(Receptor::Beta1, -100.0);
        receptors.insert(Receptor::Beta2, 20.0);

        let drug = Drug {
            id: "test".to_string(),
            name: "Test".to_string(),
            class: "Test".to_string(),
            receptors,
            pharmacology: None,
            dose: dose(5.0, 40.0),
            effects: DrugEffects {
                hr: EffectRange::NONE,
                sbp: EffectRange::NONE,
                dbp: EffectRange::NONE,
                svr: EffectRange::NONE,
                co: EffectRange::NONE,
                bronchodilation: EffectRange::NONE,
            },
            half_life: 60.0,
            indications: vec![],
        };

        // Threshold is strict on both sides
        let blocked: Vec<_> = drug.blocked_receptors().collect();
        assert_eq!(blocked, vec![Receptor::Alpha1, Receptor::Beta1]);
        assert_eq!(drug.agonized_receptors().count(), 0);
        assert_eq!(drug.activity(Receptor::V1), 0.0);
        assert_eq!(drug.format_dose(20.0), "20.00 mg");
    }
}
