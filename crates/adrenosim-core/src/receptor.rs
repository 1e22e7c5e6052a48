//! Receptor codes
//!
//! The four adrenoceptor subtypes plus the two non-adrenergic targets used by
//! vasopressin and milrinone. Serialized with their pharmacological codes
//! (`"α1"`, `"β2"`, `"V1"`, ...) so catalogue JSON reads like the literature.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A receptor (or enzyme) a drug can act on
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Receptor {
    /// Gq → IP3/Ca²⁺ → vasoconstriction
    #[serde(rename = "α1")]
    Alpha1,
    /// Gi → ↓cAMP → ↓sympathetic outflow
    #[serde(rename = "α2")]
    Alpha2,
    /// Gs → ↑cAMP → inotropy/chronotropy
    #[serde(rename = "β1")]
    Beta1,
    /// Gs → ↑cAMP → bronchodilation/vasodilation
    #[serde(rename = "β2")]
    Beta2,
    /// Vasopressin V1 receptor
    V1,
    /// Phosphodiesterase-3 (milrinone target)
    #[serde(rename = "PDE3")]
    Pde3,
}

impl Receptor {
    /// The four canonical adrenoceptors, in display order
    pub const ADRENERGIC: [Receptor; 4] = [
        Receptor::Alpha1,
        Receptor::Alpha2,
        Receptor::Beta1,
        Receptor::Beta2,
    ];

    /// Every known receptor code
    pub const ALL: [Receptor; 6] = [
        Receptor::Alpha1,
        Receptor::Alpha2,
        Receptor::Beta1,
        Receptor::Beta2,
        Receptor::V1,
        Receptor::Pde3,
    ];

    /// The pharmacological code, e.g. `"β1"`
    pub fn code(&self) -> &'static str {
        match self {
            Receptor::Alpha1 => "α1",
            Receptor::Alpha2 => "α2",
            Receptor::Beta1 => "β1",
            Receptor::Beta2 => "β2",
            Receptor::V1 => "V1",
            Receptor::Pde3 => "PDE3",
        }
    }

    /// Parse a code, accepting ASCII spellings (`a1`, `alpha1`, `b2`, `beta2`)
    pub fn from_code(code: &str) -> Option<Receptor> {
        let lower = code.trim().to_lowercase();
        match lower.as_str() {
            "α1" | "a1" | "alpha1" => Some(Receptor::Alpha1),
            "α2" | "a2" | "alpha2" => Some(Receptor::Alpha2),
            "β1" | "b1" | "beta1" => Some(Receptor::Beta1),
            "β2" | "b2" | "beta2" => Some(Receptor::Beta2),
            "v1" => Some(Receptor::V1),
            "pde3" => Some(Receptor::Pde3),
            _ => None,
        }
    }

    /// Receptors named in a free-text target label.
    ///
    /// Explicit subtype codes win; a bare `α` or `β` denotes the whole family.
    pub fn mentioned_in(label: &str) -> Vec<Receptor> {
        let mut found: Vec<Receptor> = Self::ALL
            .iter()
            .copied()
            .filter(|r| label.contains(r.code()))
            .collect();

        if found.is_empty() {
            if label.contains('α') {
                found.extend([Receptor::Alpha1, Receptor::Alpha2]);
            }
            if label.contains('β') {
                found.extend([Receptor::Beta1, Receptor::Beta2]);
            }
        }

        found
    }
}

impl fmt::Display for Receptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
