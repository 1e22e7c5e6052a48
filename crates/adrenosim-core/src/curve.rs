//! Dose-Response Curve Generator
//!
//! Samples a receptor's Hill response and mass-action occupancy over a
//! log-spaced concentration grid spanning four decades around EC50.

use serde::{Deserialize, Serialize};

use crate::pharmacology::{hill_equation, receptor_occupancy, ReceptorPharmacology};

/// Default number of intervals (the curve has one more sample than this)
pub const DEFAULT_CURVE_POINTS: usize = 50;

/// Lowest concentration ever sampled (nM)
pub const MIN_CURVE_CONCENTRATION_NM: f64 = 0.01;

/// One sample of a dose-response curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoseResponsePoint {
    /// Concentration (nM)
    pub concentration: f64,
    /// Hill response (% of system maximum)
    pub response: f64,
    /// Receptor occupancy (%)
    pub occupancy: f64,
    /// log10 of the concentration
    pub log_concentration: f64,
}

/// Generate `points + 1` log-spaced samples from `max(0.01, ec50/100)` to `100·ec50`.
pub fn generate_dose_response_curve(
    pharmacology: &ReceptorPharmacology,
    points: usize,
) -> Vec<DoseResponsePoint> {
    let log_min = (pharmacology.ec50 * 0.01)
        .max(MIN_CURVE_CONCENTRATION_NM)
        .log10();
    let log_max = (pharmacology.ec50 * 100.0).log10();
    let step = if points == 0 {
        0.0
    } else {
        (log_max - log_min) / points as f64
    };

    (0..=points)
        .map(|i| {
            let log_concentration = log_min + step * i as f64;
            let concentration = 10f64.powf(log_concentration);
            DoseResponsePoint {
                concentration,
                response: hill_equation(
                    concentration,
                    pharmacology.ec50,
                    pharmacology.emax,
                    pharmacology.hill_coeff,
                ),
                occupancy: receptor_occupancy(concentration, pharmacology.kd) * 100.0,
                log_concentration,
            }
        })
        .collect()
}
