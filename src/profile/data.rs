//! Applicant profile: the inputs a recommendation is computed from

use serde::{Deserialize, Serialize};

/// Manual budget used when none was entered (percent of monthly income)
pub const DEFAULT_MANUAL_BUDGET_PERCENT: f64 = 7.0;

fn default_manual_budget_percent() -> f64 {
    DEFAULT_MANUAL_BUDGET_PERCENT
}

/// Sex of the applicant. Informational only, no formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    /// Not stated
    #[default]
    Na,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Na => "na",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            "na" => Some(Sex::Na),
            _ => None,
        }
    }
}

/// Occupational accident risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupation {
    /// Office and desk work
    #[default]
    Low,
    /// Some travel or light manual work
    Med,
    /// Field work, heavy machinery, riders
    High,
}

impl Occupation {
    pub const ALL: [Occupation; 3] = [Occupation::Low, Occupation::Med, Occupation::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Occupation::Low => "low",
            Occupation::Med => "med",
            Occupation::High => "high",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Occupation::Low),
            "med" => Some(Occupation::Med),
            "high" => Some(Occupation::High),
            _ => None,
        }
    }
}

/// Where the applicant usually gets inpatient care
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalPreference {
    #[default]
    Public,
    Private,
}

impl HospitalPreference {
    pub const ALL: [HospitalPreference; 2] =
        [HospitalPreference::Public, HospitalPreference::Private];

    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalPreference::Public => "public",
            HospitalPreference::Private => "private",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "public" => Some(HospitalPreference::Public),
            "private" => Some(HospitalPreference::Private),
            _ => None,
        }
    }
}

/// What the applicant wants the budget to lean towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Protect against severe events (default mix)
    #[default]
    Risk,
    /// Health and illness cover first
    Health,
    /// Savings-linked life cover
    Savings,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Risk, Priority::Health, Priority::Savings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Risk => "risk",
            Priority::Health => "health",
            Priority::Savings => "savings",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "risk" => Some(Priority::Risk),
            "health" => Some(Priority::Health),
            "savings" => Some(Priority::Savings),
            _ => None,
        }
    }
}

/// How the premium budget percentage is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetMode {
    /// Derived from income band and loadings, clamped
    #[default]
    Auto,
    /// Explicit percentage, not clamped
    Manual,
}

impl BudgetMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetMode::Auto => "auto",
            BudgetMode::Manual => "manual",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(BudgetMode::Auto),
            "manual" => Some(BudgetMode::Manual),
            _ => None,
        }
    }
}

/// A single applicant's inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in whole years
    pub age: u32,

    #[serde(default)]
    pub sex: Sex,

    /// Monthly income in baht
    pub income: u64,

    /// Number of people financially dependent on the applicant
    #[serde(default)]
    pub dependents: u32,

    #[serde(default)]
    pub smoker: bool,

    #[serde(default)]
    pub occupation: Occupation,

    #[serde(default)]
    pub hospital: HospitalPreference,

    /// Outstanding mortgage balance
    #[serde(default)]
    pub home_debt: u64,

    /// Outstanding car loan balance
    #[serde(default)]
    pub car_debt: u64,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub budget_mode: BudgetMode,

    /// Percent of income, only read in manual mode
    #[serde(default = "default_manual_budget_percent")]
    pub manual_budget_percent: f64,
}

impl Profile {
    /// Create a profile with every secondary field at its default
    pub fn new(age: u32, income: u64) -> Self {
        Self {
            age,
            sex: Sex::default(),
            income,
            dependents: 0,
            smoker: false,
            occupation: Occupation::default(),
            hospital: HospitalPreference::default(),
            home_debt: 0,
            car_debt: 0,
            priority: Priority::default(),
            budget_mode: BudgetMode::default(),
            manual_budget_percent: DEFAULT_MANUAL_BUDGET_PERCENT,
        }
    }

    /// Switch to manual budgeting at the given percent of income
    pub fn with_manual_budget(mut self, percent: f64) -> Self {
        self.budget_mode = BudgetMode::Manual;
        self.manual_budget_percent = percent;
        self
    }

    /// Home and car debt combined
    pub fn total_debt(&self) -> u64 {
        self.home_debt.saturating_add(self.car_debt)
    }

    pub fn annual_income(&self) -> u64 {
        self.income.saturating_mul(12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new(30, 15_000);

        assert_eq!(profile.sex, Sex::Na);
        assert_eq!(profile.dependents, 0);
        assert!(!profile.smoker);
        assert_eq!(profile.occupation, Occupation::Low);
        assert_eq!(profile.hospital, HospitalPreference::Public);
        assert_eq!(profile.priority, Priority::Risk);
        assert_eq!(profile.budget_mode, BudgetMode::Auto);
        assert_eq!(profile.manual_budget_percent, 7.0);
    }

    #[test]
    fn test_enum_codes() {
        for occupation in Occupation::ALL {
            assert_eq!(Occupation::from_code(occupation.as_str()), Some(occupation));
        }
        for priority in Priority::ALL {
            assert_eq!(Priority::from_code(priority.as_str()), Some(priority));
        }
        assert_eq!(HospitalPreference::from_code(" Private "), Some(HospitalPreference::Private));
        assert_eq!(Sex::from_code("unknown"), None);
        assert_eq!(BudgetMode::from_code("MANUAL"), Some(BudgetMode::Manual));
    }

    #[test]
    fn test_debt_and_income_totals() {
        let profile = Profile {
            home_debt: 800_000,
            car_debt: 250_000,
            ..Profile::new(38, 20_000)
        };

        assert_eq!(profile.total_debt(), 1_050_000);
        assert_eq!(profile.annual_income(), 240_000);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"age": 40, "income": 30000}"#).unwrap();
        assert_eq!(profile, Profile::new(40, 30_000));
    }
}
