//! Integer basis-point rates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A share of income in hundredths of a percent (700 = 7%)
///
/// Budget arithmetic and tier thresholds run on whole basis points so that
/// boundaries like 5.5% compare exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasisPoints(pub u32);

impl BasisPoints {
    pub const fn new(bps: u32) -> Self {
        Self(bps)
    }

    /// Convert a percentage (7.25 = 7.25%), rounding to the nearest basis point
    pub fn from_percent(percent: f64) -> Option<Self> {
        if !percent.is_finite() || percent < 0.0 {
            return None;
        }
        let bps = (percent * 100.0).round();
        if bps > u32::MAX as f64 {
            return None;
        }
        Some(Self(bps as u32))
    }

    pub fn bps(self) -> u32 {
        self.0
    }

    /// Fraction of one (700 -> 0.07)
    pub fn as_fraction(self) -> f64 {
        self.0 as f64 / 10_000.0
    }

    /// Apply the rate to an amount
    pub fn of(self, amount: u64) -> f64 {
        amount as f64 * self.0 as f64 / 10_000.0
    }

    /// Add a signed number of basis points, stopping at zero
    pub fn offset(self, delta: i64) -> Self {
        let value = (self.0 as i64 + delta).clamp(0, u32::MAX as i64);
        Self(value as u32)
    }

    /// Percent with one decimal, half rounded up (725 -> "7.3")
    pub fn percent_one_decimal(self) -> String {
        let tenths = (self.0 + 5) / 10;
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

/// Share of income the budget actually uses
///
/// Auto rates stay in whole basis points. A manual override keeps the exact
/// fraction the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRate {
    Auto(BasisPoints),
    /// Manual percent / 100
    Manual(f64),
}

impl BudgetRate {
    /// Fraction of income (0.07 for 7%)
    pub fn fraction(self) -> f64 {
        match self {
            BudgetRate::Auto(rate) => rate.as_fraction(),
            BudgetRate::Manual(fraction) => fraction,
        }
    }

    pub fn of(self, amount: u64) -> f64 {
        match self {
            BudgetRate::Auto(rate) => rate.of(amount),
            BudgetRate::Manual(fraction) => amount as f64 * fraction,
        }
    }

    /// Percent with one decimal, as shown in the summary
    pub fn percent_one_decimal(self) -> String {
        match self {
            BudgetRate::Auto(rate) => rate.percent_one_decimal(),
            BudgetRate::Manual(fraction) => format!("{:.1}", fraction * 100.0),
        }
    }
}

impl fmt::Display for BudgetRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetRate::Auto(rate) => write!(f, "{} (auto)", rate),
            BudgetRate::Manual(fraction) => write!(f, "{:.4}% (manual)", fraction * 100.0),
        }
    }
}
