//! Receptor Activation Model
//!
//! Coarse linear activation of the four adrenoceptors, used for receptor bars.
//! Independent of the Hill-equation pharmacology used for curves.

use serde::{Deserialize, Serialize};

use crate::drug::Drug;
use crate::receptor::Receptor;

/// Signed per-receptor activation, `[-100, 100]` scaled by potency.
///
/// Negative values are blockade magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceptorActivation {
    #[serde(rename = "α1")]
    pub alpha1: f64,
    #[serde(rename = "α2")]
    pub alpha2: f64,
    #[serde(rename = "β1")]
    pub beta1: f64,
    #[serde(rename = "β2")]
    pub beta2: f64,
}

impl ReceptorActivation {
    /// Activation at one of the four adrenoceptors (0 for anything else)
    pub fn get(&self, receptor: Receptor) -> f64 {
        match receptor {
            Receptor::Alpha1 => self.alpha1,
            Receptor::Alpha2 => self.alpha2,
            Receptor::Beta1 => self.beta1,
            Receptor::Beta2 => self.beta2,
            Receptor::V1 | Receptor::Pde3 => 0.0,
        }
    }

    /// `(receptor, activation)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Receptor, f64)> + '_ {
        Receptor::ADRENERGIC.iter().map(move |&r| (r, self.get(r)))
    }
}

/// Linear receptor activation for a drug at a dose.
///
/// All zero with no drug or a non-positive dose.
pub fn calculate_receptor_activation(drug: Option<&Drug>, dose: f64) -> ReceptorActivation {
    let drug = match drug {
        Some(drug) if dose > 0.0 => drug,
        _ => return ReceptorActivation::default(),
    };

    let potency = drug.dose.potency(dose);
    ReceptorActivation {
        alpha1: drug.activity(Receptor::Alpha1) * potency,
        alpha2: drug.activity(Receptor::Alpha2) * potency,
        beta1: drug.activity(Receptor::Beta1) * potency,
        beta2: drug.activity(Receptor::Beta2) * potency,
    }
}

/// Qualitative band of a signed activation value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationBand {
    StrongBlockade,
    ModerateBlockade,
    MildBlockade,
    MinimalBlockade,
    Inactive,
    MinimalAgonism,
    MildAgonism,
    ModerateAgonism,
    StrongAgonism,
}

impl ActivationBand {
    pub fn from_activation(value: f64) -> Self {
        if value < 0.0 {
            if value <= -75.0 {
                ActivationBand::StrongBlockade
            } else if value <= -50.0 {
                ActivationBand::ModerateBlockade
            } else if value <= -25.0 {
                ActivationBand::MildBlockade
            } else {
                ActivationBand::MinimalBlockade
            }
        } else if value > 0.0 {
            if value >= 75.0 {
                ActivationBand::StrongAgonism
            } else if value >= 50.0 {
                ActivationBand::ModerateAgonism
            } else if value >= 25.0 {
                ActivationBand::MildAgonism
            } else {
                ActivationBand::MinimalAgonism
            }
        } else {
            ActivationBand::Inactive
        }
    }

    pub fn is_blockade(&self) -> bool {
        matches!(
            self,
            ActivationBand::StrongBlockade
                | ActivationBand::ModerateBlockade
                | ActivationBand::MildBlockade
                | ActivationBand::MinimalBlockade
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivationBand::StrongBlockade => "Strong blockade",
            ActivationBand::ModerateBlockade => "Moderate blockade",
            ActivationBand::MildBlockade => "Mild blockade",
            ActivationBand::MinimalBlockade => "Minimal blockade",
            ActivationBand::Inactive => "No activity",
            ActivationBand::MinimalAgonism => "Minimal agonism",
            ActivationBand::MildAgonism => "Mild agonism",
            ActivationBand::ModerateAgonism => "Moderate agonism",
            ActivationBand::StrongAgonism => "Strong agonism",
        }
    }
}
