//! Pharmacology Math Library
//!
//! Stateless receptor-theory primitives used by the curve generator and the
//! analysis panel:
//!
//! - Hill equation: `E = Emax·[D]^n / (EC50^n + [D]^n)`
//! - Law of mass action: `occupancy = [D] / (Kd + [D])`
//! - Competitive antagonism (Schild): `DR = 1 + [B]/Kb`, `EC50' = EC50·DR`
//! - `pEC50 = -log10(EC50 in molar)`
//!
//! Occupancy and response are deliberately separate quantities. A partial
//! agonist reaches high occupancy with a submaximal response, and a pure
//! antagonist occupies receptors while producing no response at all.
//!
//! All concentrations are in nM.

use serde::{Deserialize, Serialize};

use crate::drug::DoseRange;

/// Default Hill coefficient (simple 1:1 binding, no cooperativity)
pub const DEFAULT_HILL_COEFF: f64 = 1.0;

/// Upper end of the dose→concentration scale (nM at maximum dose)
pub const CONCENTRATION_SCALE_NM: f64 = 500.0;

/// Kd used to mark "no meaningful interaction" with a receptor.
///
/// Always paired with `emax = 0`; see [`ReceptorPharmacology::null_activity`].
pub const NULL_ACTIVITY_KD: f64 = 10_000.0;

/// Emax at or above which an agonist is considered full
pub const FULL_AGONIST_EMAX: f64 = 90.0;

/// Emax at or above which an agonist is considered partial rather than weak
pub const PARTIAL_AGONIST_EMAX: f64 = 10.0;

/// Hill equation.
///
/// Returns exactly `0.0` when `concentration <= 0` or `ec50 <= 0`. The response
/// approaches `emax` asymptotically and never reaches it for finite input.
///
/// Evaluated as `emax / (1 + (ec50/c)^n)`, which is algebraically identical to
/// the textbook form and cannot overflow for large concentrations.
pub fn hill_equation(concentration: f64, ec50: f64, emax: f64, hill_coeff: f64) -> f64 {
    if concentration <= 0.0 || ec50 <= 0.0 {
        return 0.0;
    }
    emax / (1.0 + (ec50 / concentration).powf(hill_coeff))
}

/// Fractional receptor occupancy from the law of mass action, in `[0, 1)`.
pub fn receptor_occupancy(concentration: f64, kd: f64) -> f64 {
    if concentration <= 0.0 {
        return 0.0;
    }
    concentration / (kd + concentration)
}

/// Map an administered dose onto an estimated plasma concentration (nM).
///
/// This is a teaching simplification, not pharmacokinetics: the dose is
/// normalised to the drug's `[min, max]` range and scaled linearly onto
/// `[0, 500]` nM. Doses below `min` floor at 0; doses above `max` extrapolate
/// past 500 nM.
pub fn dose_to_concentration(dose: f64, dose_range: &DoseRange) -> f64 {
    let normalized = (dose - dose_range.min) / (dose_range.max - dose_range.min);
    (normalized * CONCENTRATION_SCALE_NM).max(0.0)
}

/// pEC50 = -log10(EC50 in mol/L). Higher means more potent.
pub fn calculate_pec50(ec50: f64) -> f64 {
    if ec50 <= 0.0 {
        return 0.0;
    }
    -(ec50 * 1e-9).log10()
}

/// Dose ratio produced by a competitive antagonist: `1 + [B]/Kb`
pub fn calculate_dose_ratio(antagonist_conc: f64, kb: f64) -> f64 {
    1.0 + antagonist_conc / kb
}

/// Agonist EC50 shifted right by a competitive antagonist
pub fn calculate_apparent_ec50(ec50: f64, antagonist_conc: f64, kb: f64) -> f64 {
    ec50 * calculate_dose_ratio(antagonist_conc, kb)
}

/// Hill-model parameters of one drug at one receptor
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceptorPharmacology {
    /// Half-maximal effective concentration (nM)
    pub ec50: f64,
    /// Maximal efficacy (0 for antagonists, up to 100 for full agonists)
    pub emax: f64,
    /// Dissociation constant (nM); lower = higher affinity
    pub kd: f64,
    /// Cooperativity exponent
    #[serde(default = "default_hill_coeff")]
    pub hill_coeff: f64,
}

fn default_hill_coeff() -> f64 {
    DEFAULT_HILL_COEFF
}

impl ReceptorPharmacology {
    /// Create parameters with the default Hill coefficient
    pub fn new(ec50: f64, emax: f64, kd: f64) -> Self {
        ReceptorPharmacology {
            ec50,
            emax,
            kd,
            hill_coeff: DEFAULT_HILL_COEFF,
        }
    }

    /// Set the Hill coefficient
    pub fn with_hill_coeff(mut self, hill_coeff: f64) -> Self {
        self.hill_coeff = hill_coeff;
        self
    }

    /// The "no activity" sentinel: `kd = NULL_ACTIVITY_KD`, `emax = 0`
    pub fn null_activity() -> Self {
        ReceptorPharmacology::new(NULL_ACTIVITY_KD, 0.0, NULL_ACTIVITY_KD)
    }

    /// Whether these parameters are the null-activity sentinel
    pub fn is_null_activity(&self) -> bool {
        self.emax == 0.0 && self.kd == NULL_ACTIVITY_KD
    }

    /// Response (% of system maximum) at a concentration
    pub fn response_at(&self, concentration: f64) -> f64 {
        hill_equation(concentration, self.ec50, self.emax, self.hill_coeff)
    }

    /// Fractional occupancy at a concentration
    pub fn occupancy_at(&self, concentration: f64) -> f64 {
        receptor_occupancy(concentration, self.kd)
    }

    /// pEC50 of these parameters
    pub fn pec50(&self) -> f64 {
        calculate_pec50(self.ec50)
    }

    /// Efficacy class
    pub fn agonist_class(&self) -> AgonistClass {
        AgonistClass::from_emax(self.emax)
    }
}

/// Efficacy class of a ligand at a receptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgonistClass {
    /// Binds without activating (emax = 0)
    Antagonist,
    /// emax ≥ 90
    FullAgonist,
    /// 10 ≤ emax < 90
    PartialAgonist,
    /// 0 < emax < 10
    WeakAgonist,
}

impl AgonistClass {
    /// Classify by maximal efficacy
    pub fn from_emax(emax: f64) -> Self {
        if emax <= 0.0 {
            AgonistClass::Antagonist
        } else if emax >= FULL_AGONIST_EMAX {
            AgonistClass::FullAgonist
        } else if emax >= PARTIAL_AGONIST_EMAX {
            AgonistClass::PartialAgonist
        } else {
            AgonistClass::WeakAgonist
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AgonistClass::Antagonist => "Antagonist",
            AgonistClass::FullAgonist => "Full Agonist",
            AgonistClass::PartialAgonist => "Partial Agonist",
            AgonistClass::WeakAgonist => "Weak Agonist",
        }
    }

    /// One-line teaching note
    pub fn description(&self) -> &'static str {
        match self {
            AgonistClass::Antagonist => "Competitive antagonist - binds but produces no response",
            AgonistClass::FullAgonist => "Full agonist - capable of maximal receptor activation",
            AgonistClass::PartialAgonist => {
                "Partial agonist - submaximal response even at full occupancy"
            }
            AgonistClass::WeakAgonist => {
                "Weak agonist - occupancy produces little measurable response"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> DoseRange {
        DoseRange {
            min,
            max,
            typical: min,
            unit: "mg".to_string(),
            route: "IV".to_string(),
        }
    }

    #[test]
    fn test_hill_zero_guards() {
        assert_eq!(hill_equation(0.0, 10.0, 100.0, 1.0), 0.0);
        assert_eq!(hill_equation(-5.0, 10.0, 100.0, 1.0), 0.0);
        assert_eq!(hill_equation(5.0, 0.0, 100.0, 1.0), 0.0);
        assert_eq!(hill_equation(5.0, -1.0, 100.0, 1.0), 0.0);
    }

    #[test]
    fn test_hill_half_max_at_ec50() {
        assert_eq!(hill_equation(40.0, 40.0, 100.0, 1.0), 50.0);
        assert_eq!(hill_equation(7.5, 7.5, 25.0, 1.0), 12.5);
        // Holds for any Hill coefficient
        assert_eq!(hill_equation(3.0, 3.0, 80.0, 2.5), 40.0);
    }

    #[test]
    fn test_hill_steeper_with_cooperativity() {
        let shallow = hill_equation(20.0, 10.0, 100.0, 1.0);
        let steep = hill_equation(20.0, 10.0, 100.0, 2.0);
        assert!(steep > shallow);

        let shallow_low = hill_equation(5.0, 10.0, 100.0, 1.0);
        let steep_low = hill_equation(5.0, 10.0, 100.0, 2.0);
        assert!(steep_low < shallow_low);
    }

    #[test]
    fn test_occupancy_values() {
        assert_eq!(receptor_occupancy(0.0, 10.0), 0.0);
        assert_eq!(receptor_occupancy(10.0, 10.0), 0.5);
        assert!((receptor_occupancy(90.0, 10.0) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_antagonist_occupies_without_response() {
        let propranolol_b1 = ReceptorPharmacology::new(2.0, 0.0, 2.0);
        let conc = 100.0;
        assert!(propranolol_b1.occupancy_at(conc) > 0.95);
        assert_eq!(propranolol_b1.response_at(conc), 0.0);
    }

    #[test]
    fn test_partial_agonist_dissociation() {
        let partial = ReceptorPharmacology::new(30.0, 40.0, 30.0);
        let conc = 3000.0;
        assert!(partial.occupancy_at(conc) > 0.99);
        assert!(partial.response_at(conc) < 40.0);
        assert!(partial.response_at(conc) > 39.0);
    }

    #[test]
    fn test_dose_to_concentration() {
        let r = range(0.5, 3.0);
        assert_eq!(dose_to_concentration(0.5, &r), 0.0);
        assert_eq!(dose_to_concentration(3.0, &r), 500.0);
        assert_eq!(dose_to_concentration(1.75, &r), 250.0);
        // Below range floors at zero
        assert_eq!(dose_to_concentration(0.1, &r), 0.0);
        // Above range extrapolates
        assert_eq!(dose_to_concentration(5.5, &r), 1000.0);
    }

    #[test]
    fn test_pec50() {
        assert!((calculate_pec50(1.0) - 9.0).abs() < 1e-12);
        assert!((calculate_pec50(100.0) - 7.0).abs() < 1e-12);
        assert_eq!(calculate_pec50(0.0), 0.0);
        assert_eq!(calculate_pec50(-3.0), 0.0);
    }

    #[test]
    fn test_schild_shift() {
        assert_eq!(calculate_dose_ratio(0.0, 5.0), 1.0);
        assert_eq!(calculate_dose_ratio(45.0, 5.0), 10.0);
        assert_eq!(calculate_apparent_ec50(20.0, 45.0, 5.0), 200.0);
    }

    #[test]
    fn test_null_activity_sentinel() {
        let null = ReceptorPharmacology::null_activity();
        assert!(null.is_null_activity());
        assert_eq!(null.agonist_class(), AgonistClass::Antagonist);
        assert!(!ReceptorPharmacology::new(50.0, 100.0, 60.0).is_null_activity());
    }

    #[test]
    fn test_agonist_class_thresholds() {
        assert_eq!(AgonistClass::from_emax(0.0), AgonistClass::Antagonist);
        assert_eq!(AgonistClass::from_emax(5.0), AgonistClass::WeakAgonist);
        assert_eq!(AgonistClass::from_emax(10.0), AgonistClass::PartialAgonist);
        assert_eq!(AgonistClass::from_emax(89.9), AgonistClass::PartialAgonist);
        assert_eq!(AgonistClass::from_emax(90.0), AgonistClass::FullAgonist);
        assert_eq!(AgonistClass::from_emax(100.0), AgonistClass::FullAgonist);
    }

    #[test]
    fn test_hill_coeff_defaults_when_absent() {
        let parsed: ReceptorPharmacology =
            serde_json::from_str(r#"{"ec50": 30.0, "emax": 100.0, "kd": 40.0}"#).unwrap();
        assert_eq!(parsed.hill_coeff, DEFAULT_HILL_COEFF);
    }
}
