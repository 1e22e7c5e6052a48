//! Drug and scenario catalogue
//!
//! Immutable reference data, validated once when it is built or loaded.
//!
//! # Example
//!
//! ```rust
//! use adrenosim_core::Catalogue;
//!
//! let catalogue = Catalogue::builtin().unwrap();
//! let scenario = catalogue.scenario("anaphylaxis").unwrap();
//! assert_eq!(scenario.optimal_drug.as_deref(), Some("epinephrine"));
//! ```

pub mod drugs;
pub mod scenarios;
pub mod validation;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::drug::Drug;
use crate::scenario::Scenario;

pub use drugs::{builtin_drugs, BUILTIN_DRUG_IDS};
pub use scenarios::{builtin_scenarios, BUILTIN_SCENARIO_IDS};
pub use validation::CatalogueError;

/// Validated set of drugs and scenarios
///
/// Deserializing goes through [`Catalogue::new`], so invalid data is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalogue")]
pub struct Catalogue {
    drugs: Vec<Drug>,
    scenarios: Vec<Scenario>,
}

/// Unvalidated wire form of a catalogue
#[derive(Deserialize)]
struct RawCatalogue {
    drugs: Vec<Drug>,
    scenarios: Vec<Scenario>,
}

impl TryFrom<RawCatalogue> for Catalogue {
    type Error = CatalogueError;

    fn try_from(raw: RawCatalogue) -> Result<Self, Self::Error> {
        Catalogue::new(raw.drugs, raw.scenarios)
    }
}

impl Catalogue {
    /// Build and validate a catalogue
    pub fn new(drugs: Vec<Drug>, scenarios: Vec<Scenario>) -> Result<Self, CatalogueError> {
        validation::validate_catalogue(&drugs, &scenarios)?;
        debug!(
            drugs = drugs.len(),
            scenarios = scenarios.len(),
            "catalogue loaded"
        );
        Ok(Catalogue { drugs, scenarios })
    }

    /// The bundled catalogue
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::new(builtin_drugs(), builtin_scenarios())
    }

    /// Parse a catalogue from JSON (`{"drugs": [...], "scenarios": [...]}`)
    pub fn from_json_str(json: &str) -> Result<Self, CatalogueError> {
        let raw: RawCatalogue = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Read a catalogue from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, CatalogueError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn drug(&self, id: &str) -> Option<&Drug> {
        self.drugs.iter().find(|d| d.id == id)
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }
}
