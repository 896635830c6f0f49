//! Quick-fill personas

use super::{HospitalPreference, Occupation, Priority, Profile, Sex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Salaried employee with a mortgage, a car loan and one dependent
    Salaried,
    /// Self-employed, no debt, health first
    Freelance,
    /// Two-child household with a mortgage
    Family,
    /// First job, no dependents, no debt
    Starter,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Salaried,
        Preset::Freelance,
        Preset::Family,
        Preset::Starter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Salaried => "salaried",
            Preset::Freelance => "freelance",
            Preset::Family => "family",
            Preset::Starter => "starter",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Preset::ALL
            .iter()
            .copied()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(code.trim()))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Salaried => "age 38, income 20,000, 1 dependent, 1,050,000 debt",
            Preset::Freelance => {
                "age 30, income 15,000, medium-risk work, private hospital, health priority"
            }
            Preset::Family => "age 35, income 22,000, 2 dependents, 750,000 debt",
            Preset::Starter => "age 28, income 9,000, medium-risk work, no debt",
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            Preset::Salaried => Profile {
                sex: Sex::Male,
                dependents: 1,
                home_debt: 800_000,
                car_debt: 250_000,
                ..Profile::new(38, 20_000)
            },
            Preset::Freelance => Profile {
                occupation: Occupation::Med,
                hospital: HospitalPreference::Private,
                priority: Priority::Health,
                ..Profile::new(30, 15_000)
            },
            Preset::Family => Profile {
                sex: Sex::Female,
                dependents: 2,
                home_debt: 600_000,
                car_debt: 150_000,
                ..Profile::new(35, 22_000)
            },
            Preset::Starter => Profile {
                occupation: Occupation::Med,
                ..Profile::new(28, 9_000)
            },
        }
    }
}
