//! Treatment Assessment
//!
//! Scores a (scenario, vitals, drug) triple with an ordered rule table. Each
//! rule may adjust a running integer score and append feedback; the final score
//! is capped at 100 but has no floor, so a dangerous choice can score below
//! zero.
//!
//! Rule order, which is also the feedback order:
//!
//! 1. Contraindication (-50)
//! 2. Receptor targeting (+20)
//! 3. Optimal drug (+20, or partial credit for an alternative)
//! 4. MAP in 65-110 mmHg (+25)
//! 5. Heart rate in 60-100 bpm (+20)
//! 6. SpO2 ≥ 94% (+15)
//! 7. Cardiac output in 4-8 L/min (+10)
//!
//! # Example
//!
//! ```rust
//! use adrenosim_core::{assess_treatment_quality, calculate_drug_effect, Catalogue, Grade};
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let scenario = catalogue.scenario("anaphylaxis").unwrap();
//! let drug = catalogue.drug("epinephrine").unwrap();
//!
//! let vitals = calculate_drug_effect(Some(drug), drug.dose.typical, &scenario.baseline, scenario);
//! let result = assess_treatment_quality(scenario, &vitals, Some(drug));
//! assert_eq!(result.grade, Grade::Excellent);
//! ```

pub mod explanations;
mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::drug::Drug;
use crate::scenario::Scenario;
use crate::vitals::VitalsState;

/// Maximum reported score
pub const MAX_SCORE: i32 = 100;

/// Severity of a feedback message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Warning,
    Danger,
}

/// One line of assessment feedback
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
}

impl Feedback {
    pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
        Feedback {
            kind,
            message: message.into(),
        }
    }
}

/// Letter grade derived from the score
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Grade {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Grade::Excellent,
            s if s >= 60 => Grade::Good,
            s if s >= 40 => Grade::Fair,
            _ => Grade::Poor,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Fair => "Fair",
            Grade::Poor => "Poor",
        };
        f.write_str(s)
    }
}

/// Outcome of an assessment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// At most 100; negative for dangerous choices
    pub score: i32,
    pub grade: Grade,
    /// Ordered feedback
    pub feedback: Vec<Feedback>,
}

impl AssessmentResult {
    /// Whether any feedback is a danger
    pub fn has_danger(&self) -> bool {
        self.feedback.iter().any(|f| f.kind == FeedbackKind::Danger)
    }
}

/// Score a treatment choice.
///
/// Drug-dependent rules are skipped when `drug` is `None`.
pub fn assess_treatment_quality(
    scenario: &Scenario,
    vitals: &VitalsState,
    drug: Option<&Drug>,
) -> AssessmentResult {
    let input = rules::RuleInput {
        scenario,
        vitals,
        drug,
    };
    let mut tally = rules::Tally::default();

    for (name, rule) in rules::RULES {
        let before = tally.score;
        rule(&input, &mut tally);
        trace!(rule = name, delta = tally.score - before, "assessment rule");
    }

    let score = tally.score.min(MAX_SCORE);
    let grade = Grade::from_score(score);
    debug!(
        scenario = %scenario.id,
        drug = drug.map(|d| d.id.as_str()).unwrap_or("none"),
        score,
        %grade,
        "treatment assessed"
    );

    AssessmentResult {
        score,
        grade,
        feedback: tally.feedback,
    }
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::vitals::calculate_drug_effect;
    use proptest::prelude::*;

    proptest! {
        /// Score never exceeds the cap, for any scenario, drug and dose
        #[test]
        fn score_capped(scenario_idx in 0usize..10, drug_idx in 0usize..17, dose in 0.0..400.0f64) {
            let catalogue = Catalogue::builtin().unwrap();
            let scenario = &catalogue.scenarios()[scenario_idx];
            let drug = &catalogue.drugs()[drug_idx];
            let vitals = calculate_drug_effect(Some(drug), dose, &scenario.baseline, scenario);
            let result = assess_treatment_quality(scenario, &vitals, Some(drug));
            prop_assert!(result.score <= MAX_SCORE);
            prop_assert_eq!(result.grade, Grade::from_score(result.score));
        }
    }
}
