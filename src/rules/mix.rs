//! Premium mix: how the monthly budget splits across coverage categories

use crate::profile::Priority;
use serde::{Deserialize, Serialize};

/// Coverage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    Life,
    CriticalIllness,
    PersonalAccident,
    HospitalCash,
}

impl Coverage {
    pub const ALL: [Coverage; 4] = [
        Coverage::Life,
        Coverage::CriticalIllness,
        Coverage::PersonalAccident,
        Coverage::HospitalCash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Coverage::Life => "Life",
            Coverage::CriticalIllness => "Critical illness",
            Coverage::PersonalAccident => "Personal accident",
            Coverage::HospitalCash => "Hospital cash",
        }
    }
}

/// Percent of the budget per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mix {
    pub life: u8,
    pub critical_illness: u8,
    pub personal_accident: u8,
    pub hospital_cash: u8,
}

impl Mix {
    pub const fn new(
        life: u8,
        critical_illness: u8,
        personal_accident: u8,
        hospital_cash: u8,
    ) -> Self {
        Self {
            life,
            critical_illness,
            personal_accident,
            hospital_cash,
        }
    }

    pub fn share(&self, coverage: Coverage) -> u8 {
        match coverage {
            Coverage::Life => self.life,
            Coverage::CriticalIllness => self.critical_illness,
            Coverage::PersonalAccident => self.personal_accident,
            Coverage::HospitalCash => self.hospital_cash,
        }
    }

    pub fn total(&self) -> u32 {
        Coverage::ALL.iter().map(|&c| self.share(c) as u32).sum()
    }

    /// Budget amount per category
    pub fn allocate(&self, budget: f64) -> Vec<(Coverage, f64)> {
        Coverage::ALL
            .iter()
            .map(|&c| (c, budget * self.share(c) as f64 / 100.0))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixRules {
    pub risk: Mix,
    pub health: Mix,
    pub savings: Mix,
}

impl Default for MixRules {
    fn default() -> Self {
        Self {
            risk: Mix::new(50, 25, 15, 10),
            health: Mix::new(40, 35, 15, 10),
            savings: Mix::new(55, 20, 15, 10),
        }
    }
}

impl MixRules {
    pub fn for_priority(&self, priority: Priority) -> Mix {
        match priority {
            Priority::Risk => self.risk,
            Priority::Health => self.health,
            Priority::Savings => self.savings,
        }
    }
}
