//! Sums assured per tier for the four coverage categories

use super::Tiered;
use crate::money::{round_to_step, scale_to_step};
use crate::profile::{HospitalPreference, Occupation, Profile};
use serde::{Deserialize, Serialize};

/// Life cover: outstanding debt plus a multi-year income replacement window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeRules {
    /// Life sums are rounded to this step
    pub rounding_step: u64,
    /// Years of income replaced without many dependents
    pub base_years: u32,
    /// Years of income replaced once dependents reach the threshold
    pub dependents_years: u32,
    pub dependents_threshold: u32,
    /// Tier multipliers of the life base, in percent
    pub tier_factors: Tiered<u32>,
}

impl Default for LifeRules {
    fn default() -> Self {
        Self {
            rounding_step: 50_000,
            base_years: 3,
            dependents_years: 5,
            dependents_threshold: 2,
            tier_factors: Tiered::new(75, 100, 125),
        }
    }
}

impl LifeRules {
    pub fn years(&self, dependents: u32) -> u32 {
        if dependents >= self.dependents_threshold {
            self.dependents_years
        } else {
            self.base_years
        }
    }

    /// Rounded life base: total debt + annual income x years
    pub fn base(&self, profile: &Profile) -> u64 {
        let replacement = profile
            .annual_income()
            .saturating_mul(self.years(profile.dependents) as u64);
        round_to_step(profile.total_debt().saturating_add(replacement), self.rounding_step)
    }

    /// Life sum per tier, each rounded to the step
    pub fn tiers(&self, base: u64) -> Tiered<u64> {
        self.tier_factors
            .map(|&factor| scale_to_step(base, factor, self.rounding_step))
    }
}

/// Critical illness sums for an age band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalIllnessBand {
    /// Inclusive lower age
    pub min_age: u32,
    /// Exclusive upper age; `None` for the last band
    pub max_age: Option<u32>,
    pub sums: Tiered<u64>,
}

impl CriticalIllnessBand {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && self.max_age.map_or(true, |max| age < max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalIllnessRules {
    /// Contiguous age bands starting at 0
    pub bands: Vec<CriticalIllnessBand>,
}

impl Default for CriticalIllnessRules {
    fn default() -> Self {
        Self {
            bands: vec![
                CriticalIllnessBand {
                    min_age: 0,
                    max_age: Some(30),
                    sums: Tiered::new(200_000, 400_000, 800_000),
                },
                CriticalIllnessBand {
                    min_age: 30,
                    max_age: Some(45),
                    sums: Tiered::new(300_000, 500_000, 1_000_000),
                },
                CriticalIllnessBand {
                    min_age: 45,
                    max_age: None,
                    sums: Tiered::new(400_000, 600_000, 1_000_000),
                },
            ],
        }
    }
}

impl CriticalIllnessRules {
    pub fn sums_for_age(&self, age: u32) -> Tiered<u64> {
        self.bands
            .iter()
            .find(|band| band.contains(age))
            .or_else(|| self.bands.last())
            .map(|band| band.sums)
            .unwrap_or_default()
    }
}

/// Personal accident: fixed tiers plus an occupation boost on every tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalAccidentRules {
    pub base: Tiered<u64>,
    pub low_boost: u64,
    pub med_boost: u64,
    pub high_boost: u64,
}

impl Default for PersonalAccidentRules {
    fn default() -> Self {
        Self {
            base: Tiered::new(300_000, 500_000, 700_000),
            low_boost: 0,
            med_boost: 100_000,
            high_boost: 200_000,
        }
    }
}

impl PersonalAccidentRules {
    pub fn boost(&self, occupation: Occupation) -> u64 {
        match occupation {
            Occupation::Low => self.low_boost,
            Occupation::Med => self.med_boost,
            Occupation::High => self.high_boost,
        }
    }

    pub fn sums_for(&self, occupation: Occupation) -> Tiered<u64> {
        let boost = self.boost(occupation);
        self.base.map(|&sum| sum.saturating_add(boost))
    }
}

/// Daily hospital cash benefit by hospital preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalCashRules {
    pub public: Tiered<u64>,
    pub private: Tiered<u64>,
}

impl Default for HospitalCashRules {
    fn default() -> Self {
        Self {
            public: Tiered::new(1_000, 1_500, 2_000),
            private: Tiered::new(800, 1_200, 1_500),
        }
    }
}

impl HospitalCashRules {
    pub fn per_day(&self, hospital: HospitalPreference) -> Tiered<u64> {
        match hospital {
            HospitalPreference::Public => self.public,
            HospitalPreference::Private => self.private,
        }
    }
}
