//! Monthly premium budget: income bands, loadings and the clamp

use super::{BasisPoints, BudgetRate};
use crate::profile::{BudgetMode, Priority, Profile, DEFAULT_MANUAL_BUDGET_PERCENT};
use serde::{Deserialize, Serialize};

/// An income band and its base budget rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBand {
    /// Upper income bound; `None` for the open-ended top band
    pub ceiling: Option<u64>,
    /// Whether an income equal to the ceiling falls in this band
    pub inclusive: bool,
    pub base_rate: BasisPoints,
}

impl IncomeBand {
    pub fn below(ceiling: u64, base_rate: BasisPoints) -> Self {
        Self {
            ceiling: Some(ceiling),
            inclusive: false,
            base_rate,
        }
    }

    pub fn up_to(ceiling: u64, base_rate: BasisPoints) -> Self {
        Self {
            ceiling: Some(ceiling),
            inclusive: true,
            base_rate,
        }
    }

    pub fn open(base_rate: BasisPoints) -> Self {
        Self {
            ceiling: None,
            inclusive: false,
            base_rate,
        }
    }

    pub fn contains(&self, income: u64) -> bool {
        match self.ceiling {
            None => true,
            Some(ceiling) if self.inclusive => income <= ceiling,
            Some(ceiling) => income < ceiling,
        }
    }
}

/// Budget rate rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRules {
    /// Income bands in ascending order, last one open-ended
    pub bands: Vec<IncomeBand>,

    /// Added for smokers
    pub smoker_loading: BasisPoints,

    /// Added when dependents reach `dependents_threshold`
    pub dependents_loading: BasisPoints,
    pub dependents_threshold: u32,

    /// Subtracted for a health priority
    pub health_discount: BasisPoints,

    /// Auto-mode clamp
    pub floor: BasisPoints,
    pub cap: BasisPoints,

    /// Fixed sanity band shown next to the budget in every mode
    pub reference_min: BasisPoints,
    pub reference_max: BasisPoints,
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self {
            bands: vec![
                IncomeBand::below(5_000, BasisPoints(400)),
                IncomeBand::below(10_000, BasisPoints(500)),
                IncomeBand::up_to(20_000, BasisPoints(700)),
                IncomeBand::open(BasisPoints(800)),
            ],
            smoker_loading: BasisPoints(100),
            dependents_loading: BasisPoints(100),
            dependents_threshold: 2,
            health_discount: BasisPoints(50),
            floor: BasisPoints(300),
            cap: BasisPoints(1_000),
            reference_min: BasisPoints(300),
            reference_max: BasisPoints(1_000),
        }
    }
}

impl BudgetRules {
    /// Base rate of the first band containing the income
    pub fn base_rate(&self, income: u64) -> BasisPoints {
        self.bands
            .iter()
            .find(|band| band.contains(income))
            .or_else(|| self.bands.last())
            .map(|band| band.base_rate)
            .unwrap_or(self.floor)
    }

    fn priority_adjustment(&self, priority: Priority) -> i64 {
        match priority {
            Priority::Health => -(self.health_discount.bps() as i64),
            Priority::Risk | Priority::Savings => 0,
        }
    }

    /// Auto-mode rate: band base plus loadings, clamped to [floor, cap]
    pub fn auto_rate(&self, profile: &Profile) -> BasisPoints {
        let mut delta = 0i64;
        if profile.smoker {
            delta += self.smoker_loading.bps() as i64;
        }
        if profile.dependents >= self.dependents_threshold {
            delta += self.dependents_loading.bps() as i64;
        }
        delta += self.priority_adjustment(profile.priority);

        self.base_rate(profile.income)
            .offset(delta)
            .clamp(self.floor, self.cap)
    }

    /// Rate actually used. Manual mode is an explicit override and is not clamped;
    /// an unset (zero or negative) manual percent means the 7% default.
    pub fn used_rate(&self, profile: &Profile) -> BudgetRate {
        match profile.budget_mode {
            BudgetMode::Auto => BudgetRate::Auto(self.auto_rate(profile)),
            BudgetMode::Manual => {
                let percent = profile.manual_budget_percent;
                let percent = if percent.is_finite() && percent > 0.0 {
                    percent
                } else {
                    DEFAULT_MANUAL_BUDGET_PERCENT
                };
                BudgetRate::Manual(percent / 100.0)
            }
        }
    }

    /// (min, max) reference budget for the income
    pub fn reference_range(&self, income: u64) -> (f64, f64) {
        (self.reference_min.of(income), self.reference_max.of(income))
    }
}
