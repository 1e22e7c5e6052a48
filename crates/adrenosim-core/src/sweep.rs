//! Dose Sweeps
//!
//! Evaluates a scenario across an evenly spaced dose grid for one or more
//! drugs. Every grid point is an independent (scenario, drug, dose) triple, so
//! the grid can be evaluated in parallel via rayon when the `parallel` feature
//! is enabled. Output order is the same either way: drugs in the order given,
//! doses ascending.
//!
//! # Example
//!
//! ```rust
//! use adrenosim_core::sweep::{best_overall, DoseSweep, SweepConfig};
//! use adrenosim_core::Catalogue;
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let scenario = catalogue.scenario("asthma").unwrap();
//!
//! let sweep = DoseSweep::new(SweepConfig::default().with_steps(10));
//! let points = sweep.run(scenario, catalogue.drugs());
//! let best = best_overall(&points).unwrap();
//! assert_eq!(best.drug_id, "albuterol");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::{assess_treatment_quality, AssessmentResult};
use crate::drug::Drug;
use crate::scenario::Scenario;
use crate::vitals::{calculate_drug_effect, VitalsState};

/// Configuration for dose sweeps
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Number of intervals across `[min, max]`; the grid has `steps + 1` doses
    pub steps: usize,
    /// Enable parallel evaluation
    pub parallel: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            steps: 20,
            parallel: true,
        }
    }
}

impl SweepConfig {
    /// Set grid resolution (at least one interval)
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps.max(1);
        self
    }

    /// Enable/disable parallel evaluation
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
}

/// One evaluated grid point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub drug_id: String,
    pub dose: f64,
    pub vitals: VitalsState,
    pub assessment: AssessmentResult,
}

/// Dose-grid evaluator
pub struct DoseSweep {
    config: SweepConfig,
}

impl DoseSweep {
    pub fn new(config: SweepConfig) -> Self {
        DoseSweep { config }
    }

    /// Doses evaluated for a drug, ascending from `min` to `max`
    pub fn dose_grid(&self, drug: &Drug) -> Vec<f64> {
        let steps = self.config.steps.max(1);
        let (min, max) = (drug.dose.min, drug.dose.max);
        (0..=steps)
            .map(|i| min + (max - min) * i as f64 / steps as f64)
            .collect()
    }

    /// Evaluate every drug over its dose grid
    pub fn run(&self, scenario: &Scenario, drugs: &[Drug]) -> Vec<SweepPoint> {
        let start_time = std::time::Instant::now();

        let tasks: Vec<(&Drug, f64)> = drugs
            .iter()
            .flat_map(|drug| {
                self.dose_grid(drug)
                    .into_iter()
                    .map(move |dose| (drug, dose))
            })
            .collect();

        let points = if self.config.parallel {
            self.evaluate_parallel(scenario, &tasks)
        } else {
            self.evaluate_sequential(scenario, &tasks)
        };

        debug!(
            scenario = %scenario.id,
            evaluations = points.len(),
            elapsed_us = start_time.elapsed().as_micros() as u64,
            "dose sweep complete"
        );
        points
    }

    #[cfg(feature = "parallel")]
    fn evaluate_parallel(&self, scenario: &Scenario, tasks: &[(&Drug, f64)]) -> Vec<SweepPoint> {
        use rayon::prelude::*;

        // par_iter().map().collect() preserves input order
        tasks
            .par_iter()
            .map(|&(drug, dose)| evaluate(scenario, drug, dose))
            .collect()
    }

    /// Fallback when parallel feature is disabled
    #[cfg(not(feature = "parallel"))]
    fn evaluate_parallel(&self, scenario: &Scenario, tasks: &[(&Drug, f64)]) -> Vec<SweepPoint> {
        self.evaluate_sequential(scenario, tasks)
    }

    fn evaluate_sequential(&self, scenario: &Scenario, tasks: &[(&Drug, f64)]) -> Vec<SweepPoint> {
        tasks
            .iter()
            .map(|&(drug, dose)| evaluate(scenario, drug, dose))
            .collect()
    }
}

fn evaluate(scenario: &Scenario, drug: &Drug, dose: f64) -> SweepPoint {
    let vitals = calculate_drug_effect(Some(drug), dose, &scenario.baseline, scenario);
    let assessment = assess_treatment_quality(scenario, &vitals, Some(drug));
    SweepPoint {
        drug_id: drug.id.clone(),
        dose,
        vitals,
        assessment,
    }
}

fn best<'a>(points: impl Iterator<Item = &'a SweepPoint>) -> Option<&'a SweepPoint> {
    // Strictly greater keeps the earliest (lowest-dose) point on ties
    points.fold(None, |best: Option<&SweepPoint>, p| match best {
        Some(b) if b.assessment.score >= p.assessment.score => Some(b),
        _ => Some(p),
    })
}

/// Highest-scoring dose of one drug; ties go to the lower dose
pub fn best_for_drug<'a>(points: &'a [SweepPoint], drug_id: &str) -> Option<&'a SweepPoint> {
    best(points.iter().filter(|p| p.drug_id == drug_id))
}

/// Highest-scoring point overall; ties go to the earlier drug, then the lower dose
pub fn best_overall(points: &[SweepPoint]) -> Option<&SweepPoint> {
    best(points.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;

    #[test]
    fn test_dose_grid() {
        let catalogue = Catalogue::builtin().unwrap();
        let prazosin = catalogue.drug("prazosin").unwrap();
        let sweep = DoseSweep::new(SweepConfig::default().with_steps(3));
        assert_eq!(sweep.dose_grid(prazosin), vec![0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_steps_floor() {
        let config = SweepConfig::default().with_steps(0);
        assert_eq!(config.steps, 1);
    }

    #[test]
    fn test_point_count_and_order() {
        let catalogue = Catalogue::builtin().unwrap();
        let scenario = catalogue.scenario("septic_shock").unwrap();
        let sweep = DoseSweep::new(SweepConfig::default().with_steps(4).with_parallel(false));
        let points = sweep.run(scenario, catalogue.drugs());

        assert_eq!(points.len(), 17 * 5);
        assert_eq!(points[0].drug_id, "epinephrine");
        assert!(points[..5].windows(2).all(|w| w[0].dose < w[1].dose));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let catalogue = Catalogue::builtin().unwrap();
        let scenario = catalogue.scenario("cardiogenic_shock").unwrap();
        let seq = DoseSweep::new(SweepConfig::default().with_steps(8).with_parallel(false))
            .run(scenario, catalogue.drugs());
        let par = DoseSweep::new(SweepConfig::default().with_steps(8).with_parallel(true))
            .run(scenario, catalogue.drugs());
        assert_eq!(seq, par);
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn test_parallel_request_falls_back_to_sequential() {
        let catalogue = Catalogue::builtin().unwrap();
        let scenario = catalogue.scenario("asthma").unwrap();
        let drugs = &catalogue.drugs()[..3];
        let sweep = DoseSweep::new(SweepConfig::default().with_steps(2));
        let tasks: Vec<(&Drug, f64)> = drugs
            .iter()
            .flat_map(|d| sweep.dose_grid(d).into_iter().map(move |dose| (d, dose)))
            .collect();
        assert_eq!(
            sweep.evaluate_parallel(scenario, &tasks),
            sweep.evaluate_sequential(scenario, &tasks)
        );
    }

    #[test]
    fn test_best_prefers_lower_dose_on_tie() {
        let catalogue = Catalogue::builtin().unwrap();
        let scenario = catalogue.scenario("normal").unwrap();
        let phenylephrine = catalogue.drug("phenylephrine").unwrap();
        let sweep = DoseSweep::new(SweepConfig::default().with_steps(10));
        let points = sweep.run(scenario, std::slice::from_ref(phenylephrine));

        let best = best_for_drug(&points, "phenylephrine").unwrap();
        let top = points.iter().map(|p| p.assessment.score).max().unwrap();
        assert_eq!(best.assessment.score, top);
        let first_top = points.iter().find(|p| p.assessment.score == top).unwrap();
        assert_eq!(best.dose, first_top.dose);
        assert!(best_for_drug(&points, "albuterol").is_none());
    }
}
