//! Coverage tiers and the budget thresholds that pick one

use super::{BasisPoints, BudgetRate};
use serde::{Deserialize, Serialize};

/// One of the three coverage packages, in increasing order of cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tier::A => "Starter",
            Tier::B => "Balanced",
            Tier::C => "Extended",
        }
    }

}

/// A value per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Tiered<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Tiered<T> {
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, tier: Tier) -> &T {
        match tier {
            Tier::A => &self.a,
            Tier::B => &self.b,
            Tier::C => &self.c,
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Tiered<U> {
        Tiered {
            a: f(&self.a),
            b: f(&self.b),
            c: f(&self.c),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }
}

/// Whether a rate sitting exactly on a threshold belongs to the lower tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// rate <= threshold stays in the lower tier
    #[default]
    Inclusive,
    /// rate < threshold stays in the lower tier
    Exclusive,
}

/// Budget share thresholds for the recommended tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Highest rate that still recommends tier A
    pub a_max: BasisPoints,
    /// Highest rate that still recommends tier B
    pub b_max: BasisPoints,
    pub boundary: Boundary,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            a_max: BasisPoints(550),
            b_max: BasisPoints(850),
            boundary: Boundary::Inclusive,
        }
    }
}

impl TierThresholds {
    fn within(&self, rate: BasisPoints, threshold: BasisPoints) -> bool {
        match self.boundary {
            Boundary::Inclusive => rate <= threshold,
            Boundary::Exclusive => rate < threshold,
        }
    }

    fn within_fraction(&self, fraction: f64, threshold: BasisPoints) -> bool {
        match self.boundary {
            Boundary::Inclusive => fraction <= threshold.as_fraction(),
            Boundary::Exclusive => fraction < threshold.as_fraction(),
        }
    }

    pub fn classify(&self, rate: BasisPoints) -> Tier {
        if self.within(rate, self.a_max) {
            Tier::A
        } else if self.within(rate, self.b_max) {
            Tier::B
        } else {
            Tier::C
        }
    }

    /// Exact fraction of income, for manual rates
    pub fn classify_fraction(&self, fraction: f64) -> Tier {
        if self.within_fraction(fraction, self.a_max) {
            Tier::A
        } else if self.within_fraction(fraction, self.b_max) {
            Tier::B
        } else {
            Tier::C
        }
    }

    pub fn classify_rate(&self, rate: BudgetRate) -> Tier {
        match rate {
            BudgetRate::Auto(rate) => self.classify(rate),
            BudgetRate::Manual(fraction) => self.classify_fraction(fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_inclusive() {
        let thresholds = TierThresholds::default();

        assert_eq!(thresholds.classify(BasisPoints(500)), Tier::A);
        assert_eq!(thresholds.classify(BasisPoints(550)), Tier::A);
        assert_eq!(thresholds.classify(BasisPoints(551)), Tier::B);
        assert_eq!(thresholds.classify(BasisPoints(850)), Tier::B);
        assert_eq!(thresholds.classify(BasisPoints(900)), Tier::C);
    }

    #[test]
    fn test_classify_exclusive() {
        let thresholds = TierThresholds {
            boundary: Boundary::Exclusive,
            ..TierThresholds::default()
        };

        assert_eq!(thresholds.classify(BasisPoints(549)), Tier::A);
        assert_eq!(thresholds.classify(BasisPoints(550)), Tier::B);
        assert_eq!(thresholds.classify(BasisPoints(850)), Tier::C);
    }

    #[test]
    fn test_classify_manual_fraction() {
        let inclusive = TierThresholds::default();
        let exclusive = TierThresholds {
            boundary: Boundary::Exclusive,
            ..TierThresholds::default()
        };

        assert_eq!(inclusive.classify_fraction(5.5 / 100.0), Tier::A);
        assert_eq!(exclusive.classify_fraction(5.5 / 100.0), Tier::B);
        assert_eq!(inclusive.classify_fraction(5.504 / 100.0), Tier::B);
        assert_eq!(inclusive.classify_fraction(8.5 / 100.0), Tier::B);
        assert_eq!(inclusive.classify_fraction(8.51 / 100.0), Tier::C);
        assert_eq!(inclusive.classify_rate(BudgetRate::Auto(BasisPoints(550))), Tier::A);
    }

    #[test]
    fn test_tiered_access() {
        let sums = Tiered::new(300_000u64, 500_000, 700_000);
        let boosted = sums.map(|s| s + 100_000);

        assert_eq!(*boosted.get(Tier::A), 400_000);
        assert_eq!(boosted.iter().map(|(_, v)| *v).max(), Some(800_000));
        assert_eq!(Tier::C.name(), "Extended");
    }
}
