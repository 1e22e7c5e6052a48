//! Built-in drug catalogue
//!
//! Seventeen agents covering adrenergic agonists, antagonists and two
//! non-adrenergic comparators (vasopressin, milrinone).
//!
//! Effect ranges are the change in each vital at the minimum and maximum
//! labelled dose. Hill parameters are in nM and use
//! [`ReceptorPharmacology::null_activity`] where a drug has no meaningful
//! interaction with a receptor.

use std::collections::BTreeMap;

use crate::drug::{DoseRange, Drug, DrugEffects, EffectRange};
use crate::pharmacology::ReceptorPharmacology;
use crate::receptor::Receptor::{self, Alpha1, Alpha2, Beta1, Beta2, Pde3, V1};

/// Ids of every built-in drug, in catalogue order
pub const BUILTIN_DRUG_IDS: [&str; 17] = [
    "epinephrine",
    "norepinephrine",
    "isoproterenol",
    "phenylephrine",
    "dobutamine",
    "albuterol",
    "dopamine",
    "ephedrine",
    "vasopressin",
    "milrinone",
    "propranolol",
    "metoprolol",
    "esmolol",
    "labetalol",
    "phentolamine",
    "prazosin",
    "clonidine",
];

struct DrugSpec {
    id: &'static str,
    name: &'static str,
    class: &'static str,
    /// α1, α2, β1, β2
    adrenergic: [f64; 4],
    other: &'static [(Receptor, f64)],
    hill: [(Receptor, ReceptorPharmacology); 4],
    other_hill: &'static [(Receptor, f64, f64, f64)],
    dose: (f64, f64, f64, &'static str, &'static str),
    /// hr, sbp, dbp, svr, co, bronchodilation
    effects: [(f64, f64); 6],
    half_life: f64,
    indications: &'static [&'static str],
}

impl DrugSpec {
    fn build(self) -> Drug {
        let mut receptors: BTreeMap<Receptor, f64> = Receptor::ADRENERGIC
            .iter()
            .copied()
            .zip(self.adrenergic)
            .collect();
        receptors.extend(self.other.iter().copied());

        let mut pharmacology: BTreeMap<Receptor, ReceptorPharmacology> =
            self.hill.into_iter().collect();
        pharmacology.extend(
            self.other_hill
                .iter()
                .map(|&(r, ec50, emax, kd)| (r, ReceptorPharmacology::new(ec50, emax, kd))),
        );

        let (min, max, typical, unit, route) = self.dose;
        let [hr, sbp, dbp, svr, co, bronch] = self.effects.map(|(lo, hi)| EffectRange::new(lo, hi));

        Drug {
            id: self.id.to_string(),
            name: self.name.to_string(),
            class: self.class.to_string(),
            receptors,
            pharmacology: Some(pharmacology),
            dose: DoseRange {
                min,
                max,
                typical,
                unit: unit.to_string(),
                route: route.to_string(),
            },
            effects: DrugEffects {
                hr,
                sbp,
                dbp,
                svr,
                co,
                bronchodilation: bronch,
            },
            half_life: self.half_life,
            indications: self.indications.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn hill(ec50: f64, emax: f64, kd: f64) -> ReceptorPharmacology {
    ReceptorPharmacology::new(ec50, emax, kd)
}

fn none() -> ReceptorPharmacology {
    ReceptorPharmacology::null_activity()
}

/// The built-in drugs, in catalogue order
pub fn builtin_drugs() -> Vec<Drug> {
    vec![
        DrugSpec {
            id: "epinephrine",
            name: "Epinephrine",
            class: "Non-selective adrenergic agonist",
            adrenergic: [100.0, 80.0, 100.0, 100.0],
            other: &[],
            hill: [
                (Alpha1, hill(50.0, 100.0, 60.0)),
                (Alpha2, hill(20.0, 90.0, 25.0)),
                (Beta1, hill(30.0, 100.0, 40.0)),
                (Beta2, hill(15.0, 100.0, 20.0)),
            ],
            other_hill: &[],
            dose: (0.01, 1.0, 0.3, "mg", "IV/IM"),
            effects: [
                (10.0, 40.0),
                (30.0, 80.0),
                (20.0, 50.0),
                (200.0, 600.0),
                (1.0, 3.0),
                (50.0, 70.0),
            ],
            half_life: 2.0,
            indications: &["Anaphylaxis", "Cardiac arrest", "Severe bronchospasm"],
        },
        DrugSpec {
            id: "norepinephrine",
            name: "Norepinephrine",
            class: "α and β1 agonist",
            adrenergic: [100.0, 90.0, 100.0, 20.0],
            other: &[],
            hill: [
                (Alpha1, hill(40.0, 100.0, 50.0).with_hill_coeff(1.2)),
                (Alpha2, hill(25.0, 95.0, 30.0)),
                (Beta1, hill(35.0, 100.0, 45.0)),
                (Beta2, hill(800.0, 25.0, 1200.0)),
            ],
            other_hill: &[],
            dose: (0.05, 3.0, 0.1, "mcg/kg/min", "IV infusion"),
            effects: [
                (-5.0, 10.0),
                (40.0, 100.0),
                (30.0, 70.0),
                (400.0, 900.0),
                (0.5, 1.5),
                (0.0, 5.0),
            ],
            half_life: 2.0,
            indications: &["Septic shock", "Neurogenic shock", "Hypotension"],
        },
        DrugSpec {
            id: "isoproterenol",
            name: "Isoproterenol",
            class: "Non-selective β agonist",
            adrenergic: [0.0, 0.0, 100.0, 100.0],
            other: &[],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, hill(5.0, 100.0, 8.0)),
                (Beta2, hill(4.0, 100.0, 6.0)),
            ],
            other_hill: &[],
            dose: (0.02, 0.2, 0.05, "mcg/kg/min", "IV infusion"),
            effects: [
                (20.0, 60.0),
                (-10.0, 20.0),
                (-30.0, -10.0),
                (-600.0, -200.0),
                (2.0, 4.0),
                (40.0, 60.0),
            ],
            half_life: 2.0,
            indications: &["Bradycardia", "Heart block", "Torsades de pointes"],
        },
        DrugSpec {
            id: "phenylephrine",
            name: "Phenylephrine",
            class: "Selective α1 agonist",
            adrenergic: [100.0, 10.0, 0.0, 0.0],
            other: &[],
            hill: [
                (Alpha1, hill(150.0, 95.0, 200.0)),
                (Alpha2, hill(3000.0, 10.0, 5000.0)),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[],
            dose: (0.5, 3.0, 1.0, "mcg/kg/min", "IV infusion"),
            effects: [
                (-15.0, -5.0),
                (30.0, 70.0),
                (25.0, 60.0),
                (300.0, 800.0),
                (-0.5, 0.5),
                (0.0, 0.0),
            ],
            half_life: 3.0,
            indications: &["Hypotension during anesthesia", "Supraventricular tachycardia"],
        },
        DrugSpec {
            id: "dobutamine",
            name: "Dobutamine",
            class: "Selective β1 agonist",
            adrenergic: [10.0, 5.0, 100.0, 50.0],
            other: &[],
            hill: [
                (Alpha1, hill(900.0, 15.0, 1100.0)),
                (Alpha2, hill(5000.0, 5.0, 8000.0)),
                (Beta1, hill(60.0, 90.0, 80.0)),
                (Beta2, hill(400.0, 45.0, 500.0)),
            ],
            other_hill: &[],
            dose: (2.5, 20.0, 5.0, "mcg/kg/min", "IV infusion"),
            effects: [
                (5.0, 20.0),
                (10.0, 30.0),
                (-10.0, 10.0),
                (-200.0, 0.0),
                (1.5, 3.5),
                (5.0, 15.0),
            ],
            half_life: 2.0,
            indications: &["Cardiogenic shock", "Heart failure", "Stress echocardiography"],
        },
        DrugSpec {
            id: "albuterol",
            name: "Albuterol",
            class: "Selective β2 agonist",
            adrenergic: [0.0, 0.0, 10.0, 100.0],
            other: &[],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, hill(2000.0, 10.0, 3000.0)),
                (Beta2, hill(30.0, 85.0, 40.0)),
            ],
            other_hill: &[],
            dose: (2.5, 5.0, 2.5, "mg", "Nebulized"),
            effects: [
                (5.0, 20.0),
                (-5.0, 5.0),
                (-10.0, -5.0),
                (-100.0, 0.0),
                (0.2, 0.8),
                (50.0, 75.0),
            ],
            half_life: 240.0,
            indications: &["Asthma", "COPD", "Hyperkalemia"],
        },
        DrugSpec {
            id: "dopamine",
            name: "Dopamine",
            class: "Dose-dependent adrenergic agonist",
            adrenergic: [60.0, 40.0, 80.0, 30.0],
            other: &[],
            hill: [
                (Alpha1, hill(600.0, 70.0, 800.0)),
                (Alpha2, hill(400.0, 50.0, 500.0)),
                (Beta1, hill(250.0, 85.0, 300.0)),
                (Beta2, hill(1500.0, 30.0, 2000.0)),
            ],
            other_hill: &[],
            dose: (5.0, 20.0, 10.0, "mcg/kg/min", "IV infusion"),
            effects: [
                (10.0, 30.0),
                (20.0, 50.0),
                (15.0, 40.0),
                (100.0, 400.0),
                (1.0, 2.5),
                (5.0, 10.0),
            ],
            half_life: 2.0,
            indications: &["Shock", "Hypotension", "Bradycardia"],
        },
        DrugSpec {
            id: "ephedrine",
            name: "Ephedrine",
            class: "Indirect-acting sympathomimetic",
            adrenergic: [50.0, 30.0, 60.0, 40.0],
            other: &[],
            hill: [
                (Alpha1, hill(1500.0, 55.0, 2000.0)),
                (Alpha2, hill(2000.0, 35.0, 2500.0)),
                (Beta1, hill(900.0, 60.0, 1200.0)),
                (Beta2, hill(1200.0, 45.0, 1500.0)),
            ],
            other_hill: &[],
            dose: (5.0, 25.0, 10.0, "mg", "IV"),
            effects: [
                (5.0, 15.0),
                (15.0, 40.0),
                (10.0, 30.0),
                (100.0, 300.0),
                (0.5, 1.5),
                (10.0, 20.0),
            ],
            half_life: 180.0,
            indications: &["Hypotension", "Anesthesia-induced hypotension"],
        },
        DrugSpec {
            id: "vasopressin",
            name: "Vasopressin",
            class: "Non-adrenergic vasopressor",
            adrenergic: [0.0, 0.0, 0.0, 0.0],
            other: &[(V1, 100.0)],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[(V1, 0.5, 100.0, 1.0)],
            dose: (0.01, 0.04, 0.03, "units/min", "IV infusion"),
            effects: [
                (-5.0, 0.0),
                (20.0, 50.0),
                (15.0, 40.0),
                (300.0, 700.0),
                (-0.5, 0.5),
                (0.0, 0.0),
            ],
            half_life: 10.0,
            indications: &["Septic shock", "Cardiac arrest", "Vasodilatory shock"],
        },
        DrugSpec {
            id: "milrinone",
            name: "Milrinone",
            class: "Phosphodiesterase-3 inhibitor",
            adrenergic: [0.0, 0.0, 0.0, 0.0],
            other: &[(Pde3, 100.0)],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[(Pde3, 300.0, 100.0, 400.0)],
            dose: (0.375, 0.75, 0.5, "mcg/kg/min", "IV infusion"),
            effects: [
                (5.0, 15.0),
                (-10.0, 10.0),
                (-15.0, -5.0),
                (-400.0, -100.0),
                (1.0, 2.5),
                (0.0, 5.0),
            ],
            half_life: 150.0,
            indications: &["Heart failure", "Cardiogenic shock", "Post-cardiac surgery"],
        },
        DrugSpec {
            id: "propranolol",
            name: "Propranolol",
            class: "Non-selective β-blocker",
            adrenergic: [0.0, 0.0, -100.0, -100.0],
            other: &[],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, hill(2.0, 0.0, 2.0)),
                (Beta2, hill(2.0, 0.0, 1.5)),
            ],
            other_hill: &[],
            dose: (0.5, 3.0, 1.0, "mg", "IV"),
            effects: [
                (-40.0, -15.0),
                (-30.0, -10.0),
                (-20.0, -5.0),
                (0.0, 100.0),
                (-2.0, -0.5),
                (-30.0, -10.0),
            ],
            half_life: 240.0,
            indications: &["Thyroid storm", "Tachyarrhythmias", "Hypertension"],
        },
        DrugSpec {
            id: "metoprolol",
            name: "Metoprolol",
            class: "Selective β1-blocker",
            adrenergic: [0.0, 0.0, -100.0, -20.0],
            other: &[],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, hill(50.0, 0.0, 45.0)),
                (Beta2, hill(2000.0, 0.0, 1800.0)),
            ],
            other_hill: &[],
            dose: (2.5, 15.0, 5.0, "mg", "IV"),
            effects: [
                (-35.0, -10.0),
                (-25.0, -10.0),
                (-15.0, -5.0),
                (0.0, 50.0),
                (-1.5, -0.3),
                (-10.0, 0.0),
            ],
            half_life: 180.0,
            indications: &["Acute MI", "Hypertension", "Atrial fibrillation"],
        },
        DrugSpec {
            id: "esmolol",
            name: "Esmolol",
            class: "Ultra-short acting β1-blocker",
            adrenergic: [0.0, 0.0, -100.0, -15.0],
            other: &[],
            hill: [
                (Alpha1, none()),
                (Alpha2, none()),
                (Beta1, hill(150.0, 0.0, 130.0)),
                (Beta2, hill(5000.0, 0.0, 4500.0)),
            ],
            other_hill: &[],
            dose: (50.0, 300.0, 100.0, "mcg/kg/min", "IV infusion"),
            effects: [
                (-30.0, -10.0),
                (-20.0, -5.0),
                (-15.0, -5.0),
                (0.0, 30.0),
                (-1.2, -0.2),
                (-5.0, 0.0),
            ],
            half_life: 9.0,
            indications: &["Perioperative tachycardia", "Hypertensive emergency", "Thyroid storm"],
        },
        DrugSpec {
            id: "labetalol",
            name: "Labetalol",
            class: "Combined α/β-blocker",
            adrenergic: [-30.0, -20.0, -100.0, -60.0],
            other: &[],
            hill: [
                (Alpha1, hill(100.0, 0.0, 90.0)),
                (Alpha2, hill(2000.0, 0.0, 1500.0)),
                (Beta1, hill(10.0, 0.0, 8.0)),
                (Beta2, hill(30.0, 0.0, 25.0)),
            ],
            other_hill: &[],
            dose: (5.0, 40.0, 20.0, "mg", "IV"),
            effects: [
                (-20.0, -5.0),
                (-40.0, -15.0),
                (-30.0, -10.0),
                (-200.0, -50.0),
                (-0.5, 0.5),
                (-10.0, 0.0),
            ],
            half_life: 300.0,
            indications: &["Hypertensive emergency", "Cocaine toxicity", "Preeclampsia"],
        },
        DrugSpec {
            id: "phentolamine",
            name: "Phentolamine",
            class: "Non-selective α-blocker",
            adrenergic: [-100.0, -100.0, 0.0, 0.0],
            other: &[],
            hill: [
                (Alpha1, hill(15.0, 0.0, 12.0)),
                (Alpha2, hill(10.0, 0.0, 8.0)),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[],
            dose: (0.5, 5.0, 2.0, "mg", "IV"),
            effects: [
                (10.0, 30.0),
                (-50.0, -20.0),
                (-40.0, -15.0),
                (-600.0, -200.0),
                (0.5, 1.5),
                (0.0, 0.0),
            ],
            half_life: 19.0,
            indications: &["Pheochromocytoma crisis", "Cocaine toxicity", "Extravasation injury"],
        },
        DrugSpec {
            id: "prazosin",
            name: "Prazosin",
            class: "Selective α1-blocker",
            adrenergic: [-100.0, 0.0, 0.0, 0.0],
            other: &[],
            hill: [
                (Alpha1, hill(0.5, 0.0, 0.3)),
                (Alpha2, none()),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[],
            dose: (0.5, 2.0, 1.0, "mg", "PO"),
            effects: [
                (5.0, 15.0),
                (-30.0, -10.0),
                (-25.0, -10.0),
                (-400.0, -100.0),
                (0.2, 0.8),
                (0.0, 0.0),
            ],
            half_life: 180.0,
            indications: &["Hypertension", "BPH", "PTSD nightmares"],
        },
        DrugSpec {
            id: "clonidine",
            name: "Clonidine",
            class: "Central α2-agonist",
            adrenergic: [0.0, 100.0, 0.0, 0.0],
            other: &[],
            hill: [
                (Alpha1, hill(3000.0, 5.0, 4000.0)),
                (Alpha2, hill(5.0, 80.0, 3.0)),
                (Beta1, none()),
                (Beta2, none()),
            ],
            other_hill: &[],
            dose: (0.05, 0.3, 0.15, "mg", "IV/PO"),
            effects: [
                (-20.0, -5.0),
                (-40.0, -15.0),
                (-30.0, -10.0),
                (-300.0, -100.0),
                (-0.5, 0.0),
                (0.0, 0.0),
            ],
            half_life: 720.0,
            indications: &["Hypertensive emergency", "Opioid/alcohol withdrawal", "ADHD"],
        },
    ]
    .into_iter()
    .map(DrugSpec::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_ids() {
        let ids: Vec<String> = builtin_drugs().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, BUILTIN_DRUG_IDS);
    }

    #[test]
    fn test_every_drug_lists_adrenoceptors() {
        for drug in builtin_drugs() {
            for receptor in Receptor::ADRENERGIC {
                assert!(drug.receptors.contains_key(&receptor), "{} {}", drug.id, receptor);
                assert!(drug.pharmacology_at(receptor).is_some(), "{} {}", drug.id, receptor);
            }
        }
    }

    #[test]
    fn test_models_are_independent() {
        let drugs = builtin_drugs();
        let norepi = drugs.iter().find(|d| d.id == "norepinephrine").unwrap();
        // Linear β2 activity 20, Hill emax 25
        assert_eq!(norepi.activity(Beta2), 20.0);
        assert_eq!(norepi.pharmacology_at(Beta2).unwrap().emax, 25.0);
    }

    #[test]
    fn test_non_adrenergic_targets() {
        let drugs = builtin_drugs();
        let vaso = drugs.iter().find(|d| d.id == "vasopressin").unwrap();
        assert_eq!(vaso.activity(V1), 100.0);
        assert!(vaso.pharmacology_at(Alpha1).unwrap().is_null_activity());
        let milrinone = drugs.iter().find(|d| d.id == "milrinone").unwrap();
        assert_eq!(milrinone.pharmacology_at(Pde3).unwrap().emax, 100.0);
    }
}
