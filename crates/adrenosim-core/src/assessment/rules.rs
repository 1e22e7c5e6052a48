//! Ordered assessment rules

use super::explanations::{
    self, Outcome, GENERIC_ALTERNATIVE, GENERIC_CONTRAINDICATION, GENERIC_OPTIMAL,
};
use super::{Feedback, FeedbackKind};
use crate::drug::Drug;
use crate::receptor::Receptor;
use crate::scenario::Scenario;
use crate::vitals::VitalsState;

pub(crate) const CONTRAINDICATION_PENALTY: i32 = -50;
pub(crate) const TARGETING_POINTS: i32 = 20;
pub(crate) const OPTIMAL_POINTS: i32 = 20;
pub(crate) const MAP_POINTS: i32 = 25;
pub(crate) const HEART_RATE_POINTS: i32 = 20;
pub(crate) const SPO2_POINTS: i32 = 15;
pub(crate) const CARDIAC_OUTPUT_POINTS: i32 = 10;

/// Target labels that name a drug class rather than receptors
const CLASS_ONLY_TARGETS: [&str; 2] = ["Benzodiazepines", "Combined α/β-blocker"];

pub(crate) struct RuleInput<'a> {
    pub scenario: &'a Scenario,
    pub vitals: &'a VitalsState,
    pub drug: Option<&'a Drug>,
}

#[derive(Default)]
pub(crate) struct Tally {
    pub score: i32,
    pub feedback: Vec<Feedback>,
}

impl Tally {
    fn add(&mut self, points: i32, kind: FeedbackKind, message: impl Into<String>) {
        self.score += points;
        self.feedback.push(Feedback::new(kind, message));
    }
}

pub(crate) type Rule = fn(&RuleInput<'_>, &mut Tally);

/// Evaluation order; feedback is emitted in this order
pub(crate) const RULES: [(&str, Rule); 7] = [
    ("contraindication", contraindication),
    ("receptor_targeting", receptor_targeting),
    ("optimal_drug", optimal_drug),
    ("mean_arterial_pressure", mean_arterial_pressure),
    ("heart_rate", heart_rate),
    ("oxygenation", oxygenation),
    ("cardiac_output", cardiac_output),
];

fn contraindication(input: &RuleInput<'_>, tally: &mut Tally) {
    let (scenario, Some(drug)) = (input.scenario, input.drug) else {
        return;
    };
    if !scenario.is_contraindicated(&drug.id) {
        return;
    }

    tally.score += CONTRAINDICATION_PENALTY;
    match explanations::lookup(&scenario.id, drug, Outcome::Contraindicated) {
        Some(entry) => tally.feedback.extend(entry.render(scenario, drug)),
        None => tally
            .feedback
            .push(GENERIC_CONTRAINDICATION.render(scenario, drug)),
    }
}

/// Whether a drug satisfies a single target label
pub(crate) fn label_matches(label: &str, drug: &Drug) -> bool {
    if CLASS_ONLY_TARGETS.contains(&label) {
        return drug.class == label;
    }

    let targeted = Receptor::mentioned_in(label);
    let hit = |receptor: Receptor| targeted.contains(&receptor);
    if label.contains("blocker") || label.contains("blockade") {
        drug.blocked_receptors().any(hit)
    } else {
        drug.agonized_receptors().any(hit)
    }
}

fn receptor_targeting(input: &RuleInput<'_>, tally: &mut Tally) {
    let (scenario, Some(drug)) = (input.scenario, input.drug) else {
        return;
    };
    if scenario.is_baseline() {
        return;
    }

    let targets = scenario.target_list();
    if scenario
        .target_receptors
        .iter()
        .any(|label| label_matches(label, drug))
    {
        tally.add(
            TARGETING_POINTS,
            FeedbackKind::Success,
            format!(
                "Good receptor targeting! This scenario benefits from targeting: {}",
                targets
            ),
        );
    } else {
        tally.add(
            0,
            FeedbackKind::Warning,
            format!("Consider drugs targeting: {}", targets),
        );
    }
}

fn optimal_drug(input: &RuleInput<'_>, tally: &mut Tally) {
    let (scenario, Some(drug)) = (input.scenario, input.drug) else {
        return;
    };
    if scenario.is_baseline() || scenario.optimal_drug.is_none() {
        return;
    }

    if scenario.is_optimal(&drug.id) {
        tally.score += OPTIMAL_POINTS;
        match explanations::lookup(&scenario.id, drug, Outcome::Optimal) {
            Some(entry) => tally.feedback.extend(entry.render(scenario, drug)),
            None => tally.feedback.push(GENERIC_OPTIMAL.render(scenario, drug)),
        }
        return;
    }

    match explanations::lookup(&scenario.id, drug, Outcome::Alternative) {
        Some(entry) => {
            tally.score += entry.points;
            tally.feedback.extend(entry.render(scenario, drug));
        }
        None => tally
            .feedback
            .push(GENERIC_ALTERNATIVE.render(scenario, drug)),
    }
}

fn mean_arterial_pressure(input: &RuleInput<'_>, tally: &mut Tally) {
    let map = input.vitals.map;
    if (65.0..=110.0).contains(&map) {
        tally.add(
            MAP_POINTS,
            FeedbackKind::Success,
            "MAP within target range (65-110 mmHg)",
        );
    } else if map < 65.0 {
        tally.add(0, FeedbackKind::Danger, "MAP too low - inadequate perfusion!");
    } else {
        tally.add(
            0,
            FeedbackKind::Warning,
            "MAP elevated - risk of end-organ damage",
        );
    }
}

fn heart_rate(input: &RuleInput<'_>, tally: &mut Tally) {
    let hr = input.vitals.hr;
    if (60.0..=100.0).contains(&hr) {
        tally.add(
            HEART_RATE_POINTS,
            FeedbackKind::Success,
            "Heart rate within normal range",
        );
    } else if hr < 60.0 {
        tally.add(0, FeedbackKind::Warning, "Bradycardia present");
    } else if hr > 120.0 {
        tally.add(
            0,
            FeedbackKind::Danger,
            "Severe tachycardia - increased myocardial O2 demand!",
        );
    }
}

fn oxygenation(input: &RuleInput<'_>, tally: &mut Tally) {
    let spo2 = input.vitals.spo2;
    if spo2 >= 94.0 {
        tally.add(SPO2_POINTS, FeedbackKind::Success, "Adequate oxygenation");
    } else if spo2 >= 90.0 {
        tally.add(0, FeedbackKind::Warning, "Mild hypoxemia");
    } else {
        tally.add(0, FeedbackKind::Danger, "Severe hypoxemia - critical!");
    }
}

fn cardiac_output(input: &RuleInput<'_>, tally: &mut Tally) {
    let co = input.vitals.co;
    if (4.0..=8.0).contains(&co) {
        tally.add(
            CARDIAC_OUTPUT_POINTS,
            FeedbackKind::Success,
            "Cardiac output adequate",
        );
    } else if co < 4.0 {
        tally.add(
            0,
            FeedbackKind::Danger,
            "Low cardiac output - inadequate tissue perfusion",
        );
    } else {
        tally.add(0, FeedbackKind::Warning, "High cardiac output state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess_treatment_quality;
    use crate::catalogue::{builtin_drugs, builtin_scenarios};
    use crate::vitals::calculate_drug_effect;

    fn drug(id: &str) -> Drug {
        builtin_drugs().into_iter().find(|d| d.id == id).unwrap()
    }

    #[test]
    fn test_agonist_labels() {
        assert!(label_matches("α1", &drug("norepinephrine")));
        assert!(label_matches("β2", &drug("albuterol")));
        // β2 activity exactly 20 is not enough
        assert!(!label_matches("β2", &drug("norepinephrine")));
        assert!(!label_matches("β1", &drug("albuterol")));
    }

    #[test]
    fn test_blockade_labels() {
        assert!(label_matches("β-blocker", &drug("propranolol")));
        assert!(label_matches("β1-blocker", &drug("esmolol")));
        assert!(label_matches("α-blockade", &drug("phentolamine")));
        assert!(label_matches("α-blockade", &drug("labetalol")));
        assert!(!label_matches("α-blockade", &drug("clonidine")));
        assert!(!label_matches("β-blocker", &drug("isoproterenol")));
    }

    #[test]
    fn test_class_only_labels() {
        assert!(label_matches("Combined α/β-blocker", &drug("labetalol")));
        assert!(!label_matches("Combined α/β-blocker", &drug("propranolol")));
        assert!(!label_matches("Benzodiazepines", &drug("phentolamine")));
    }

    #[test]
    fn test_empty_target_list_warns() {
        let mut scenario = builtin_scenarios()
            .into_iter()
            .find(|s| s.id == "septic_shock")
            .unwrap();
        scenario.target_receptors.clear();
        let albuterol = drug("albuterol");
        let vitals = calculate_drug_effect(
            Some(&albuterol),
            albuterol.dose.typical,
            &scenario.baseline,
            &scenario,
        );
        let result = assess_treatment_quality(&scenario, &vitals, Some(&albuterol));

        assert_eq!(result.feedback[0].kind, FeedbackKind::Warning);
        assert_eq!(result.feedback[0].message, "Consider drugs targeting: ");
        assert_eq!(result.feedback[1].message, "norepinephrine may be more effective");
    }

    #[test]
    fn test_baseline_scenario_skips_targeting() {
        let scenario = builtin_scenarios()
            .into_iter()
            .find(|s| s.is_baseline())
            .unwrap();
        let albuterol = drug("albuterol");
        let input = RuleInput {
            scenario: &scenario,
            vitals: &scenario.baseline.with_map(),
            drug: Some(&albuterol),
        };
        let mut tally = Tally::default();
        receptor_targeting(&input, &mut tally);
        assert!(tally.feedback.is_empty());
        assert_eq!(tally.score, 0);
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "contraindication",
                "receptor_targeting",
                "optimal_drug",
                "mean_arterial_pressure",
                "heart_rate",
                "oxygenation",
                "cardiac_output",
            ]
        );
    }
}
