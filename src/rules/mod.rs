//! Recommendation rules: budget bands, coverage tables, premium mix and tier thresholds

mod rate;
mod tiering;
mod budget;
mod coverage;
mod mix;
mod guidance;
pub mod loader;

pub use rate::{BasisPoints, BudgetRate};
pub use tiering::{Boundary, Tier, TierThresholds, Tiered};
pub use budget::{BudgetRules, IncomeBand};
pub use coverage::{
    CriticalIllnessBand, CriticalIllnessRules, HospitalCashRules, LifeRules, PersonalAccidentRules,
};
pub use mix::{Coverage, Mix, MixRules};
pub use guidance::GuidanceRules;
pub use loader::LoadedRules;

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for every constant the engine reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub budget: BudgetRules,
    pub life: LifeRules,
    pub critical_illness: CriticalIllnessRules,
    pub personal_accident: PersonalAccidentRules,
    pub hospital_cash: HospitalCashRules,
    pub mix: MixRules,
    pub tiering: TierThresholds,
    pub guidance: GuidanceRules,
}

impl Rules {
    /// The standard rule set
    pub fn standard() -> Self {
        Self::default()
    }

    /// Load rule tables from CSV files in a specific directory.
    /// Scalar loadings and thresholds keep their standard values.
    pub fn from_csv_path(path: &Path) -> Result<Self, LoadError> {
        let loaded = LoadedRules::load_from(path)?;
        let standard = Self::standard();

        Ok(Self {
            budget: BudgetRules {
                bands: loaded.budget_bands.clone(),
                ..standard.budget
            },
            critical_illness: CriticalIllnessRules {
                bands: loaded.critical_illness.clone(),
            },
            personal_accident: loaded.personal_accident(&standard.personal_accident),
            hospital_cash: loaded.hospital_cash,
            mix: loaded.premium_mix,
            ..standard
        })
    }

    /// Same rules with a different threshold boundary
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.tiering.boundary = boundary;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_csv_equals_standard() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(loader::DEFAULT_RULES_PATH);
        let rules = Rules::from_csv_path(&dir).expect("Failed to load rules");
        assert_eq!(rules, Rules::standard());
    }

    #[test]
    fn test_rules_json_round_trip() {
        let rules = Rules::standard().with_boundary(Boundary::Exclusive);
        let json = serde_json::to_string(&rules).unwrap();
        let back: Rules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
    }
}
