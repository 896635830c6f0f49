//! Recommendation output structures

use super::guidance::{Advice, Hint};
use crate::rules::{BudgetRate, Coverage, Mix, Tier, Tiered};
use serde::Serialize;

/// Sums assured for one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub life: u64,
    pub critical_illness: u64,
    pub personal_accident: u64,
    /// Baht per day of hospitalisation
    pub hospital_cash_per_day: u64,
}

/// Everything computed for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Monthly premium budget (baht, unrounded)
    pub budget: f64,

    /// Budget as a fraction of income (0.07 for 7%)
    pub used_percent: f64,

    /// Exact rate used for tiering
    pub used_rate: BudgetRate,

    /// Reference range (floor and cap applied to income)
    pub budget_range_min: f64,
    pub budget_range_max: f64,

    /// Years of annual income in the life base
    pub life_years: u32,

    /// Total debt plus income years, rounded to the life step
    pub life_base: u64,

    pub plans: Tiered<Plan>,

    /// Premium split across coverage categories
    pub mix: Mix,

    pub recommended_tier: Tier,

    pub hints: Tiered<Vec<Hint>>,

    pub advice: Vec<Advice>,

    /// Plain-text summary, see [`super::summary`]
    pub summary_text: String,
}

impl Recommendation {
    pub fn plan(&self, tier: Tier) -> &Plan {
        self.plans.get(tier)
    }

    pub fn recommended_plan(&self) -> &Plan {
        self.plan(self.recommended_tier)
    }

    pub fn hints_for(&self, tier: Tier) -> &[Hint] {
        self.hints.get(tier)
    }

    /// Budget split by the premium mix
    pub fn budget_split(&self) -> Vec<(Coverage, f64)> {
        self.mix.allocate(self.budget)
    }
}
