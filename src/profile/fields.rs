//! String field map: a profile as the raw form values a presenter stores,
//! exports and imports

use super::Profile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Age,
    Sex,
    Income,
    Dependents,
    Smoker,
    Occupation,
    Hospital,
    HomeDebt,
    CarDebt,
    Priority,
    BudgetMode,
    ManualBudget,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Age,
        Field::Sex,
        Field::Income,
        Field::Dependents,
        Field::Smoker,
        Field::Occupation,
        Field::Hospital,
        Field::HomeDebt,
        Field::CarDebt,
        Field::Priority,
        Field::BudgetMode,
        Field::ManualBudget,
    ];

    /// Key used in stored and exported field maps
    pub fn key(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::Income => "income",
            Field::Dependents => "dependents",
            Field::Smoker => "smoker",
            Field::Occupation => "occupation",
            Field::Hospital => "hospital",
            Field::HomeDebt => "homeDebt",
            Field::CarDebt => "carDebt",
            Field::Priority => "priority",
            Field::BudgetMode => "budgetMode",
            Field::ManualBudget => "manualBudget",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Field::ALL.iter().copied().find(|field| field.key() == key.trim())
    }
}

/// Raw form values keyed by field. Unknown keys are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<Field, String>")]
pub struct FieldMap {
    values: BTreeMap<Field, String>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a profile the way the form would hold it
    pub fn from_profile(profile: &Profile) -> Self {
        let mut map = Self::new();
        map.set(Field::Age, profile.age.to_string());
        map.set(Field::Sex, profile.sex.as_str());
        map.set(Field::Income, profile.income.to_string());
        map.set(Field::Dependents, profile.dependents.to_string());
        map.set(Field::Smoker, if profile.smoker { "yes" } else { "no" });
        map.set(Field::Occupation, profile.occupation.as_str());
        map.set(Field::Hospital, profile.hospital.as_str());
        map.set(Field::HomeDebt, profile.home_debt.to_string());
        map.set(Field::CarDebt, profile.car_debt.to_string());
        map.set(Field::Priority, profile.priority.as_str());
        map.set(Field::BudgetMode, profile.budget_mode.as_str());
        map.set(Field::ManualBudget, profile.manual_budget_percent.to_string());
        map
    }

    /// Build from (key, value) pairs, e.g. a CSV header and record
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            if let Some(field) = Field::from_key(key) {
                map.set(field, value);
            }
        }
        map
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Trimmed value; blank counts as absent
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .get(&field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, String>> for FieldMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        Self::from_pairs(raw.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl From<FieldMap> for BTreeMap<Field, String> {
    fn from(map: FieldMap) -> Self {
        map.values
    }
}
