//! Linear Vital-Effect Model
//!
//! Maps a drug, dose and scenario baseline onto a full set of vital signs by
//! linear interpolation over the drug's effect ranges. Every output vital is
//! clamped to a fixed physiological window, and two quantities are derived:
//!
//! - SpO2 from bronchodilation and cardiac output
//! - MAP from systolic and diastolic pressure
//!
//! Nothing here can fail. Absent drugs and non-positive doses return the
//! baseline; extreme effect ranges are clamped rather than rejected.

use serde::{Deserialize, Serialize};

use crate::drug::Drug;
use crate::scenario::Scenario;

/// Hard physiological limits applied to every computed vital
pub struct VitalBounds;

impl VitalBounds {
    pub const HR: (f64, f64) = (30.0, 200.0);
    pub const SBP: (f64, f64) = (50.0, 250.0);
    pub const DBP: (f64, f64) = (30.0, 150.0);
    pub const SVR: (f64, f64) = (200.0, 3000.0);
    pub const CO: (f64, f64) = (2.0, 15.0);
    pub const BRONCHODILATION: (f64, f64) = (0.0, 100.0);
    pub const SPO2: (f64, f64) = (70.0, 100.0);
}

/// Cardiac output (L/min) treated as normal perfusion in the SpO2 model
const REFERENCE_CARDIAC_OUTPUT: f64 = 5.0;

fn clamp_to(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}

/// Mean arterial pressure, rounded to whole mmHg
pub fn mean_arterial_pressure(sbp: f64, dbp: f64) -> f64 {
    unrounded_map(sbp, dbp).round()
}

fn unrounded_map(sbp: f64, dbp: f64) -> f64 {
    dbp + (sbp - dbp) / 3.0
}

/// Oxygen saturation derived from airway patency and perfusion
pub fn derived_spo2(bronchodilation: f64, co: f64) -> f64 {
    let oxygenation = (bronchodilation / 100.0) * (co / REFERENCE_CARDIAC_OUTPUT);
    clamp_to(75.0 + 25.0 * oxygenation, VitalBounds::SPO2)
}

/// Baseline vital signs of a scenario
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Heart rate (bpm)
    pub hr: f64,
    /// Systolic BP (mmHg)
    pub sbp: f64,
    /// Diastolic BP (mmHg)
    pub dbp: f64,
    /// Systemic vascular resistance (dyn·s/cm⁵)
    pub svr: f64,
    /// Cardiac output (L/min)
    pub co: f64,
    /// Oxygen saturation (%)
    pub spo2: f64,
    /// Airway dilation (%)
    pub bronchodilation: f64,
}

impl Vitals {
    /// These vitals with MAP attached
    pub fn with_map(&self) -> VitalsState {
        VitalsState {
            hr: self.hr,
            sbp: self.sbp,
            dbp: self.dbp,
            svr: self.svr,
            co: self.co,
            spo2: self.spo2,
            bronchodilation: self.bronchodilation,
            map: mean_arterial_pressure(self.sbp, self.dbp),
        }
    }
}

/// Vital signs after a drug has been applied
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalsState {
    pub hr: f64,
    pub sbp: f64,
    pub dbp: f64,
    pub svr: f64,
    pub co: f64,
    pub spo2: f64,
    pub bronchodilation: f64,
    /// Mean arterial pressure (mmHg, rounded)
    pub map: f64,
}

impl VitalsState {
    /// Classify the monitor readings
    pub fn monitor_status(&self) -> MonitorStatus {
        MonitorStatus {
            heart_rate: VitalStatus::heart_rate(self.hr),
            blood_pressure: VitalStatus::blood_pressure(self.sbp, self.dbp),
            oxygenation: VitalStatus::oxygenation(self.spo2),
        }
    }

    /// Drop the derived MAP
    pub fn to_vitals(&self) -> Vitals {
        Vitals {
            hr: self.hr,
            sbp: self.sbp,
            dbp: self.dbp,
            svr: self.svr,
            co: self.co,
            spo2: self.spo2,
            bronchodilation: self.bronchodilation,
        }
    }
}

/// Apply a drug at a dose to a baseline.
///
/// The scenario is accepted for interface symmetry with the assessment engine;
/// the linear model depends only on the baseline.
pub fn calculate_drug_effect(
    drug: Option<&Drug>,
    dose: f64,
    baseline: &Vitals,
    _scenario: &Scenario,
) -> VitalsState {
    let drug = match drug {
        Some(drug) if dose > 0.0 => drug,
        _ => return baseline.with_map(),
    };

    let potency = drug.dose.potency(dose);
    let effects = &drug.effects;

    let hr = clamp_to(baseline.hr + effects.hr.at(potency), VitalBounds::HR);
    let sbp = clamp_to(baseline.sbp + effects.sbp.at(potency), VitalBounds::SBP);
    let dbp = clamp_to(baseline.dbp + effects.dbp.at(potency), VitalBounds::DBP);
    let svr = clamp_to(baseline.svr + effects.svr.at(potency), VitalBounds::SVR);
    let co = clamp_to(baseline.co + effects.co.at(potency), VitalBounds::CO);
    let bronchodilation = clamp_to(
        baseline.bronchodilation + effects.bronchodilation.at(potency),
        VitalBounds::BRONCHODILATION,
    );

    VitalsState {
        hr,
        sbp,
        dbp,
        svr,
        co,
        spo2: derived_spo2(bronchodilation, co),
        bronchodilation,
        map: mean_arterial_pressure(sbp, dbp),
    }
}

/// Monitor colour-band for a single reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Danger,
}

impl VitalStatus {
    /// Normal 60-100 bpm; danger below 50 or above 120
    pub fn heart_rate(hr: f64) -> Self {
        if (60.0..=100.0).contains(&hr) {
            VitalStatus::Normal
        } else if hr < 50.0 || hr > 120.0 {
            VitalStatus::Danger
        } else {
            VitalStatus::Warning
        }
    }

    /// Judged on unrounded MAP: normal 65-110; danger below 60 or above 130
    pub fn blood_pressure(sbp: f64, dbp: f64) -> Self {
        let map = unrounded_map(sbp, dbp);
        if (65.0..=110.0).contains(&map) {
            VitalStatus::Normal
        } else if map < 60.0 || map > 130.0 {
            VitalStatus::Danger
        } else {
            VitalStatus::Warning
        }
    }

    /// Normal ≥ 94%; danger below 90%
    pub fn oxygenation(spo2: f64) -> Self {
        if spo2 >= 94.0 {
            VitalStatus::Normal
        } else if spo2 >= 90.0 {
            VitalStatus::Warning
        } else {
            VitalStatus::Danger
        }
    }
}

/// Status of each monitored channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorStatus {
    pub heart_rate: VitalStatus,
    pub blood_pressure: VitalStatus,
    pub oxygenation: VitalStatus,
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::drug::{DoseRange, DrugEffects, EffectRange};
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};

    fn extreme_range() -> impl Strategy<Value = EffectRange> {
        (-1.0e5..1.0e5f64, -1.0e5..1.0e5f64).prop_map(|(a, b)| EffectRange::new(a, b))
    }

    fn within((lo, hi): (f64, f64), value: f64) -> bool {
        value >= lo && value <= hi
    }

    proptest! {
        /// Clamps hold no matter how extreme the effect ranges are
        #[test]
        fn output_always_within_bounds(
            hr in extreme_range(),
            sbp in extreme_range(),
            dbp in extreme_range(),
            svr in extreme_range(),
            co in extreme_range(),
            bronch in extreme_range(),
            dose in -10.0..10.0f64,
        ) {
            let baseline = Vitals {
                hr: 80.0, sbp: 120.0, dbp: 80.0, svr: 1000.0,
                co: 5.0, spo2: 98.0, bronchodilation: 50.0,
            };
            let scenario = Scenario {
                id: "fuzz".to_string(),
                name: "Fuzz".to_string(),
                description: String::new(),
                baseline,
                pathophysiology: String::new(),
                target_receptors: vec![],
                optimal_drug: None,
                contraindicated: BTreeSet::new(),
            };
            let drug = Drug {
                id: "fuzz".to_string(),
                name: "Fuzz".to_string(),
                class: "Fuzz".to_string(),
                receptors: BTreeMap::new(),
                pharmacology: None,
                dose: DoseRange {
                    min: 0.1, max: 2.0, typical: 1.0,
                    unit: "mg".to_string(), route: "IV".to_string(),
                },
                effects: DrugEffects { hr, sbp, dbp, svr, co, bronchodilation: bronch },
                half_life: 1.0,
                indications: vec![],
            };

            let state = calculate_drug_effect(Some(&drug), dose, &baseline, &scenario);
            if dose > 0.0 {
                prop_assert!(within(VitalBounds::HR, state.hr));
                prop_assert!(within(VitalBounds::SBP, state.sbp));
                prop_assert!(within(VitalBounds::DBP, state.dbp));
                prop_assert!(within(VitalBounds::SVR, state.svr));
                prop_assert!(within(VitalBounds::CO, state.co));
                prop_assert!(within(VitalBounds::BRONCHODILATION, state.bronchodilation));
                prop_assert!(within(VitalBounds::SPO2, state.spo2));
            } else {
                prop_assert_eq!(state.to_vitals(), baseline);
            }
        }
    }
}
