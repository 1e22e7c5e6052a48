//! Built-in clinical scenarios

use crate::scenario::{Scenario, BASELINE_SCENARIO_ID};
use crate::vitals::Vitals;

/// Ids of every built-in scenario, in catalogue order
pub const BUILTIN_SCENARIO_IDS: [&str; 10] = [
    BASELINE_SCENARIO_ID,
    "anaphylaxis",
    "septic_shock",
    "cardiogenic_shock",
    "asthma",
    "bradycardia",
    "hypertensive_emergency",
    "pheochromocytoma",
    "cocaine_toxicity",
    "thyroid_storm",
];

struct ScenarioSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// hr, sbp, dbp, svr, co, spo2, bronchodilation
    baseline: [f64; 7],
    pathophysiology: &'static str,
    targets: &'static [&'static str],
    optimal: Option<&'static str>,
    contraindicated: &'static [&'static str],
}

impl ScenarioSpec {
    fn build(self) -> Scenario {
        let [hr, sbp, dbp, svr, co, spo2, bronchodilation] = self.baseline;
        Scenario {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            baseline: Vitals {
                hr,
                sbp,
                dbp,
                svr,
                co,
                spo2,
                bronchodilation,
            },
            pathophysiology: self.pathophysiology.to_string(),
            target_receptors: self.targets.iter().map(|s| s.to_string()).collect(),
            optimal_drug: self.optimal.map(str::to_string),
            contraindicated: self.contraindicated.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The built-in scenarios, in catalogue order
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        ScenarioSpec {
            id: BASELINE_SCENARIO_ID,
            name: "Normal Physiology",
            description: "Healthy adult at rest. Explore drug effects without pathology.",
            baseline: [75.0, 120.0, 80.0, 1100.0, 5.0, 98.0, 80.0],
            pathophysiology: "Balanced sympathetic and parasympathetic tone. Baroreflex \
                maintains MAP near 93 mmHg; airway smooth muscle is moderately relaxed.",
            targets: &[],
            optimal: None,
            contraindicated: &[],
        },
        ScenarioSpec {
            id: "anaphylaxis",
            name: "Anaphylactic Shock",
            description: "Bee sting 10 minutes ago: hypotension, wheeze, urticaria.",
            baseline: [125.0, 75.0, 40.0, 600.0, 3.5, 88.0, 20.0],
            pathophysiology: "IgE-mediated mast cell degranulation releases histamine and \
                leukotrienes. Massive vasodilation and capillary leak collapse SVR while \
                bronchospasm impairs oxygenation.",
            targets: &["α1", "β1", "β2"],
            optimal: Some("epinephrine"),
            contraindicated: &["propranolol", "metoprolol"],
        },
        ScenarioSpec {
            id: "septic_shock",
            name: "Septic Shock",
            description: "Urosepsis with MAP below 65 despite 30 mL/kg crystalloid.",
            baseline: [115.0, 80.0, 40.0, 550.0, 5.5, 93.0, 70.0],
            pathophysiology: "Endotoxin drives nitric oxide and cytokine release. \
                Distributive shock: low SVR with preserved or high cardiac output, \
                and catecholamine receptors become downregulated.",
            targets: &["α1", "β1"],
            optimal: Some("norepinephrine"),
            contraindicated: &["phentolamine", "labetalol"],
        },
        ScenarioSpec {
            id: "cardiogenic_shock",
            name: "Cardiogenic Shock",
            description: "Large anterior MI with cool extremities and pulmonary oedema.",
            baseline: [110.0, 80.0, 55.0, 1800.0, 2.5, 90.0, 65.0],
            pathophysiology: "Pump failure lowers stroke volume. Compensatory \
                vasoconstriction raises SVR and afterload, further depressing output.",
            targets: &["β1"],
            optimal: Some("dobutamine"),
            contraindicated: &["propranolol", "metoprolol", "esmolol", "labetalol"],
        },
        ScenarioSpec {
            id: "asthma",
            name: "Acute Severe Asthma",
            description: "Known asthmatic, unable to complete sentences, diffuse wheeze.",
            baseline: [120.0, 135.0, 85.0, 1200.0, 5.5, 87.0, 15.0],
            pathophysiology: "Airway smooth muscle contraction, mucosal oedema and mucus \
                plugging raise airway resistance. V/Q mismatch produces hypoxaemia.",
            targets: &["β2"],
            optimal: Some("albuterol"),
            contraindicated: &["propranolol", "labetalol"],
        },
        ScenarioSpec {
            id: "bradycardia",
            name: "Symptomatic Bradycardia",
            description: "Complete heart block, light-headed, atropine ineffective.",
            baseline: [38.0, 85.0, 50.0, 1300.0, 3.0, 94.0, 75.0],
            pathophysiology: "Conduction failure leaves a slow escape rhythm. Cardiac \
                output falls with rate because stroke volume cannot compensate.",
            targets: &["β1"],
            optimal: Some("isoproterenol"),
            contraindicated: &["propranolol", "metoprolol", "esmolol", "labetalol", "clonidine"],
        },
        ScenarioSpec {
            id: "hypertensive_emergency",
            name: "Hypertensive Emergency",
            description: "BP 210/125 with headache and papilloedema.",
            baseline: [105.0, 210.0, 125.0, 2200.0, 5.0, 96.0, 80.0],
            pathophysiology: "Abrupt rise in vascular resistance overwhelms \
                autoregulation and threatens brain, heart and kidney. MAP should fall \
                by no more than 25% in the first hour.",
            targets: &["Combined α/β-blocker", "β1-blocker"],
            optimal: Some("labetalol"),
            contraindicated: &["phenylephrine", "norepinephrine", "epinephrine"],
        },
        ScenarioSpec {
            id: "pheochromocytoma",
            name: "Pheochromocytoma Crisis",
            description: "Paroxysmal headache, sweating and palpitations during surgery.",
            baseline: [135.0, 230.0, 130.0, 2500.0, 6.0, 96.0, 80.0],
            pathophysiology: "A catecholamine-secreting tumour floods α and β receptors \
                with norepinephrine and epinephrine. α1-mediated vasoconstriction drives \
                extreme hypertension.",
            targets: &["α-blockade"],
            optimal: Some("phentolamine"),
            contraindicated: &["propranolol", "metoprolol", "esmolol"],
        },
        ScenarioSpec {
            id: "cocaine_toxicity",
            name: "Cocaine Toxicity",
            description: "Chest pain, agitation and hypertension after cocaine use.",
            baseline: [140.0, 200.0, 115.0, 2100.0, 6.5, 95.0, 80.0],
            pathophysiology: "Cocaine blocks norepinephrine reuptake, producing a \
                hyperadrenergic state with coronary vasospasm, tachycardia and \
                hypertension.",
            targets: &["Benzodiazepines", "α-blockade", "Combined α/β-blocker"],
            optimal: Some("phentolamine"),
            contraindicated: &["propranolol", "metoprolol", "esmolol"],
        },
        ScenarioSpec {
            id: "thyroid_storm",
            name: "Thyroid Storm",
            description: "Fever, agitation and rapid AF in a patient with Graves disease.",
            baseline: [150.0, 160.0, 70.0, 800.0, 9.0, 95.0, 80.0],
            pathophysiology: "Excess thyroid hormone upregulates β-adrenoceptors and \
                sensitises tissues to circulating catecholamines, producing a \
                high-output hyperdynamic state.",
            targets: &["β-blocker"],
            optimal: Some("propranolol"),
            contraindicated: &["isoproterenol", "epinephrine"],
        },
    ]
    .into_iter()
    .map(ScenarioSpec::build)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_matches_ids() {
        let ids: Vec<String> = builtin_scenarios().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, BUILTIN_SCENARIO_IDS);
    }

    #[test]
    fn test_baseline_scenario_has_no_targets() {
        let scenarios = builtin_scenarios();
        let normal = scenarios.iter().find(|s| s.is_baseline()).unwrap();
        assert!(normal.target_receptors.is_empty());
        assert!(normal.optimal_drug.is_none());
    }

    #[test]
    fn test_optimal_never_contraindicated() {
        for scenario in builtin_scenarios() {
            if let Some(optimal) = &scenario.optimal_drug {
                assert!(!scenario.is_contraindicated(optimal), "{}", scenario.id);
            }
        }
    }
}
