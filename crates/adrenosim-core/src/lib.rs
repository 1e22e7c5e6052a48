//! AdrenoSim Core - Adrenergic Pharmacology Simulation Engine
//!
//! Pure, deterministic pharmacodynamics for teaching adrenergic receptor
//! pharmacology. Given a clinical scenario, a drug and a dose, the engine
//! computes vital signs, receptor activation, dose-response curves and a
//! scored treatment assessment.
//!
//! # Features
//!
//! - Hill equation, law of mass action and Schild competitive antagonism
//! - Log-spaced dose-response curves with occupancy/response dissociation
//! - Linear vital-effect model with physiological clamping, MAP and SpO2
//! - Ordered rule-based treatment scoring backed by an explanation table
//! - Built-in catalogue of 17 drugs and 10 scenarios, or load your own JSON
//! - Dose sweeps, parallelised with rayon under the `parallel` feature
//!
//! # Testing
//!
//! Run `cargo test --all-features` so the rayon sweep path is checked against
//! the sequential one.
//!
//! # Example
//!
//! ```rust
//! use adrenosim_core::{
//!     assess_treatment_quality, calculate_drug_effect, calculate_receptor_activation, Catalogue,
//! };
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let scenario = catalogue.scenario("septic_shock").unwrap();
//! let drug = catalogue.drug("norepinephrine").unwrap();
//!
//! let vitals = calculate_drug_effect(Some(drug), 0.5, &scenario.baseline, scenario);
//! let receptors = calculate_receptor_activation(Some(drug), 0.5);
//! let result = assess_treatment_quality(scenario, &vitals, Some(drug));
//!
//! println!(
//!     "MAP {} mmHg, α1 {:.0}%, score {} ({})",
//!     vitals.map, receptors.alpha1, result.score, result.grade
//! );
//! ```

pub mod activation;
pub mod analysis;
pub mod assessment;
pub mod catalogue;
pub mod curve;
pub mod drug;
pub mod pharmacology;
pub mod receptor;
pub mod scenario;
pub mod sweep;
pub mod vitals;

// Re-export commonly used types for convenience
pub use activation::{calculate_receptor_activation, ActivationBand, ReceptorActivation};
pub use analysis::{analyze_drug, DrugAnalysis, ReceptorAnalysis};
pub use assessment::{assess_treatment_quality, AssessmentResult, Feedback, FeedbackKind, Grade};
pub use catalogue::{Catalogue, CatalogueError};
pub use curve::{generate_dose_response_curve, DoseResponsePoint, DEFAULT_CURVE_POINTS};
pub use drug::{DoseRange, Drug, DrugEffects, EffectRange};
pub use pharmacology::{
    calculate_apparent_ec50, calculate_dose_ratio, calculate_pec50, dose_to_concentration,
    hill_equation, receptor_occupancy, AgonistClass, ReceptorPharmacology,
};
pub use receptor::Receptor;
pub use scenario::{Scenario, BASELINE_SCENARIO_ID};
pub use sweep::{DoseSweep, SweepConfig, SweepPoint};
pub use vitals::{calculate_drug_effect, MonitorStatus, VitalStatus, Vitals, VitalsState};
