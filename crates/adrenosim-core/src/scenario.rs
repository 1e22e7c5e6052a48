//! Clinical scenarios
//!
//! A scenario is a patient presentation: baseline vitals, the receptors a good
//! treatment should target, the optimal drug (if any) and the drugs that must
//! not be given.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::vitals::Vitals;

/// Id of the healthy, no-pathology scenario.
///
/// Receptor targeting and optimal-drug scoring do not apply to it.
pub const BASELINE_SCENARIO_ID: &str = "normal";

/// A clinical presentation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Vital signs before any drug is given
    pub baseline: Vitals,
    /// Teaching text, not used in any computation
    pub pathophysiology: String,
    /// Ordered receptor/blockade/drug-class labels, e.g. "α1", "β-blocker"
    #[serde(default)]
    pub target_receptors: Vec<String>,
    /// Drug id of the best choice, if there is one
    #[serde(default)]
    pub optimal_drug: Option<String>,
    /// Drug ids that are dangerous in this presentation
    #[serde(default)]
    pub contraindicated: BTreeSet<String>,
}

impl Scenario {
    /// Whether this is the healthy baseline scenario
    pub fn is_baseline(&self) -> bool {
        self.id == BASELINE_SCENARIO_ID
    }

    /// Whether a drug id is contraindicated here
    pub fn is_contraindicated(&self, drug_id: &str) -> bool {
        self.contraindicated.contains(drug_id)
    }

    /// Whether a drug id is this scenario's optimal choice
    pub fn is_optimal(&self, drug_id: &str) -> bool {
        self.optimal_drug.as_deref() == Some(drug_id)
    }

    /// Target labels joined for display
    pub fn target_list(&self) -> String {
        self.target_receptors.join(", ")
    }
}
