//! Receptor analysis at a dose
//!
//! Evaluates a drug's Hill pharmacology at the plasma concentration implied by
//! a dose: occupancy, response, pEC50 and efficacy class per active receptor,
//! each with its full dose-response curve.

use serde::{Deserialize, Serialize};

use crate::curve::{generate_dose_response_curve, DoseResponsePoint};
use crate::drug::Drug;
use crate::pharmacology::{dose_to_concentration, AgonistClass, ReceptorPharmacology};
use crate::receptor::Receptor;

/// Receptors with a Kd at or above this and no efficacy are left out
pub const ANALYSIS_KD_CUTOFF_NM: f64 = 1000.0;

/// One receptor's analysis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceptorAnalysis {
    pub receptor: Receptor,
    pub pharmacology: ReceptorPharmacology,
    /// Receptor occupancy (%)
    pub occupancy_pct: f64,
    /// Hill response (%)
    pub response: f64,
    pub pec50: f64,
    pub agonist_class: AgonistClass,
    pub curve: Vec<DoseResponsePoint>,
}

/// Analysis of a drug at one dose
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrugAnalysis {
    pub drug_id: String,
    pub dose: f64,
    /// Estimated plasma concentration (nM)
    pub concentration_nm: f64,
    pub receptors: Vec<ReceptorAnalysis>,
}

impl DrugAnalysis {
    /// Receptors bound with no response (pure antagonism)
    pub fn antagonized(&self) -> impl Iterator<Item = &ReceptorAnalysis> {
        self.receptors
            .iter()
            .filter(|r| r.agonist_class == AgonistClass::Antagonist)
    }
}

/// Whether a receptor is worth reporting: any efficacy, or meaningful affinity
pub fn is_active(pharmacology: &ReceptorPharmacology) -> bool {
    pharmacology.emax > 0.0 || pharmacology.kd < ANALYSIS_KD_CUTOFF_NM
}

/// Analyse a drug at a dose. `None` when the drug has no Hill pharmacology.
pub fn analyze_drug(drug: &Drug, dose: f64, points: usize) -> Option<DrugAnalysis> {
    let pharmacology = drug.pharmacology.as_ref()?;
    let concentration = dose_to_concentration(dose, &drug.dose);

    let receptors = pharmacology
        .iter()
        .filter(|(_, p)| is_active(p))
        .map(|(&receptor, p)| ReceptorAnalysis {
            receptor,
            pharmacology: *p,
            occupancy_pct: p.occupancy_at(concentration) * 100.0,
            response: p.response_at(concentration),
            pec50: p.pec50(),
            agonist_class: p.agonist_class(),
            curve: generate_dose_response_curve(p, points),
        })
        .collect();

    Some(DrugAnalysis {
        drug_id: drug.id.clone(),
        dose,
        concentration_nm: concentration,
        receptors,
    })
}
