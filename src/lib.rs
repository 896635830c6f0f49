//! Cover Planner - rules engine for personal insurance cover recommendations
//!
//! This library provides:
//! - Monthly premium budget from income, lifestyle loadings and priority
//! - Life, critical illness, personal accident and hospital cash sums for three tiers
//! - Premium mix and recommended tier
//! - Guidance hints, advice and a plain-text summary
//! - Rule tables loadable from CSV, profile batches and JSON export/import

pub mod error;
pub mod money;
pub mod profile;
pub mod rules;
pub mod validation;
pub mod planner;
pub mod export;

// Re-export commonly used types
pub use error::{FieldIssue, LoadError, RecommendationError};
pub use profile::{FieldMap, Preset, Profile};
pub use rules::{BasisPoints, BudgetRate, Rules, Tier, Tiered};
pub use validation::Validator;
pub use planner::{Evaluation, Plan, Recommendation, RecommendationEngine};
pub use export::ExportDocument;

/// Compute a recommendation with the standard rules
pub fn compute(profile: &Profile) -> Result<Recommendation, RecommendationError> {
    RecommendationEngine::default().compute(profile)
}
