//! Export and import of a plan as a JSON document

use crate::error::{LoadError, RecommendationError};
use crate::planner::{Evaluation, Recommendation, RecommendationEngine};
use crate::profile::{FieldMap, Profile};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "cover-plan.json";

/// Raw field values plus the summary computed from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub fields: FieldMap,
    #[serde(default)]
    pub summary: String,
}

/// Outcome of recomputing an imported document
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub evaluation: Evaluation,
    /// The stored summary equals the recomputed one
    pub summary_matches: bool,
}

impl ExportDocument {
    pub fn new(profile: &Profile, recommendation: &Recommendation) -> Self {
        Self {
            fields: FieldMap::from_profile(profile),
            summary: recommendation.summary_text.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!("Exported plan to {:?}", path);
        Ok(())
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let document = Self::from_json(&fs::read_to_string(path)?)?;
        info!("Imported {} fields from {:?}", document.fields.len(), path);
        Ok(document)
    }

    /// Recompute from the stored fields. The stored summary is informational only.
    pub fn replay(&self, engine: &RecommendationEngine) -> Result<Replay, RecommendationError> {
        let evaluation = engine.compute_fields(&self.fields)?;
        let summary_matches = evaluation.recommendation.summary_text == self.summary;
        Ok(Replay {
            evaluation,
            summary_matches,
        })
    }
}
