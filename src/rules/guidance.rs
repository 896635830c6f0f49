//! Thresholds that switch conditional hints and advice on

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceRules {
    /// Tier A gets the starter-budget hint below this monthly income
    pub starter_income_below: u64,
    /// Tier C gets the NCD-age hint from this age
    pub ncd_age_from: u32,
    /// Budget-discipline advice up to and including this monthly income
    pub discipline_income_up_to: u64,
}

impl Default for GuidanceRules {
    fn default() -> Self {
        Self {
            starter_income_below: 10_000,
            ncd_age_from: 40,
            discipline_income_up_to: 20_000,
        }
    }
}
