//! CSV-based rule table loader
//!
//! Loads the table-shaped rules from CSV files in data/rules/

use super::{
    BasisPoints, CriticalIllnessBand, HospitalCashRules, IncomeBand, Mix, MixRules,
    PersonalAccidentRules, Tiered,
};
use crate::error::LoadError;
use crate::profile::{HospitalPreference, Occupation, Priority};
use csv::{ReaderBuilder, Trim};
use log::info;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Default path to the rules directory
pub const DEFAULT_RULES_PATH: &str = "data/rules";

pub const BUDGET_BANDS_FILE: &str = "budget_bands.csv";
pub const CRITICAL_ILLNESS_FILE: &str = "critical_illness.csv";
pub const PERSONAL_ACCIDENT_FILE: &str = "personal_accident.csv";
pub const HOSPITAL_CASH_FILE: &str = "hospital_cash.csv";
pub const PREMIUM_MIX_FILE: &str = "premium_mix.csv";

#[derive(Debug, Deserialize)]
struct BudgetBandRow {
    #[serde(rename = "IncomeCeiling")]
    income_ceiling: Option<u64>,
    #[serde(rename = "Inclusive")]
    inclusive: Option<bool>,
    #[serde(rename = "BasePercent")]
    base_percent: f64,
}

#[derive(Debug, Deserialize)]
struct CriticalIllnessRow {
    #[serde(rename = "MinAge")]
    min_age: u32,
    #[serde(rename = "MaxAge")]
    max_age: Option<u32>,
    #[serde(rename = "TierA")]
    tier_a: u64,
    #[serde(rename = "TierB")]
    tier_b: u64,
    #[serde(rename = "TierC")]
    tier_c: u64,
}

#[derive(Debug, Deserialize)]
struct PersonalAccidentRow {
    #[serde(rename = "Occupation")]
    occupation: String,
    #[serde(rename = "Boost")]
    boost: u64,
}

#[derive(Debug, Deserialize)]
struct HospitalCashRow {
    #[serde(rename = "Hospital")]
    hospital: String,
    #[serde(rename = "TierA")]
    tier_a: u64,
    #[serde(rename = "TierB")]
    tier_b: u64,
    #[serde(rename = "TierC")]
    tier_c: u64,
}

#[derive(Debug, Deserialize)]
struct PremiumMixRow {
    #[serde(rename = "Priority")]
    priority: String,
    #[serde(rename = "Life")]
    life: u8,
    #[serde(rename = "CriticalIllness")]
    critical_illness: u8,
    #[serde(rename = "PersonalAccident")]
    personal_accident: u8,
    #[serde(rename = "HospitalCash")]
    hospital_cash: u8,
}

/// Rule tables as read from disk, already checked for consistency
#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub budget_bands: Vec<IncomeBand>,
    pub critical_illness: Vec<CriticalIllnessBand>,
    pub personal_accident_boosts: Vec<(Occupation, u64)>,
    pub hospital_cash: HospitalCashRules,
    pub premium_mix: MixRules,
}

impl LoadedRules {
    /// Load every table from a rules directory
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let loaded = Self {
            budget_bands: load_budget_bands(path)?,
            critical_illness: load_critical_illness(path)?,
            personal_accident_boosts: load_personal_accident(path)?,
            hospital_cash: load_hospital_cash(path)?,
            premium_mix: load_premium_mix(path)?,
        };
        info!("Loaded rule tables from {}", path.display());
        Ok(loaded)
    }

    /// Apply the occupation boosts to a base accident table
    pub fn personal_accident(&self, base: &PersonalAccidentRules) -> PersonalAccidentRules {
        let mut rules = base.clone();
        for &(occupation, boost) in &self.personal_accident_boosts {
            match occupation {
                Occupation::Low => rules.low_boost = boost,
                Occupation::Med => rules.med_boost = boost,
                Occupation::High => rules.high_boost = boost,
            }
        }
        rules
    }
}

fn read_rows<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<(u64, T)>, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(dir.join(file))?;
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: T = record.deserialize(Some(&headers))?;
        rows.push((line, row));
    }

    Ok(rows)
}

fn invalid_row(file: &str, line: u64, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidRow {
        file: file.to_string(),
        line,
        reason: reason.into(),
    }
}

fn invalid_rules(file: &str, reason: impl Into<String>) -> LoadError {
    LoadError::InvalidRules {
        file: file.to_string(),
        reason: reason.into(),
    }
}

/// Load income bands. Ceilings must ascend and only the last band may be open.
pub fn load_budget_bands(path: &Path) -> Result<Vec<IncomeBand>, LoadError> {
    let file = BUDGET_BANDS_FILE;
    let mut bands: Vec<IncomeBand> = Vec::new();

    for (line, row) in read_rows::<BudgetBandRow>(path, file)? {
        let base_rate = BasisPoints::from_percent(row.base_percent).ok_or_else(|| {
            invalid_row(file, line, format!("bad BasePercent {}", row.base_percent))
        })?;

        if let Some(previous) = bands.last() {
            match (previous.ceiling, row.income_ceiling) {
                (None, _) => return Err(invalid_row(file, line, "band after the open-ended band")),
                (Some(prev), Some(next)) if next < prev => {
                    return Err(invalid_row(file, line, "income ceilings must ascend"))
                }
                _ => {}
            }
        }

        bands.push(IncomeBand {
            ceiling: row.income_ceiling,
            inclusive: row.inclusive.unwrap_or(false),
            base_rate,
        });
    }

    if bands.last().map_or(false, |band| band.ceiling.is_none()) {
        Ok(bands)
    } else {
        Err(invalid_rules(file, "last band must have an empty IncomeCeiling"))
    }
}

/// Load critical illness age bands. Bands must be contiguous from age 0 and end open.
pub fn load_critical_illness(path: &Path) -> Result<Vec<CriticalIllnessBand>, LoadError> {
    let file = CRITICAL_ILLNESS_FILE;
    let mut bands: Vec<CriticalIllnessBand> = Vec::new();

    for (line, row) in read_rows::<CriticalIllnessRow>(path, file)? {
        let expected_min = match bands.last() {
            None => 0,
            Some(previous) => previous
                .max_age
                .ok_or_else(|| invalid_row(file, line, "band after the open-ended band"))?,
        };
        if row.min_age != expected_min {
            return Err(invalid_row(
                file,
                line,
                format!("MinAge {} should be {}", row.min_age, expected_min),
            ));
        }
        if let Some(max) = row.max_age {
            if max <= row.min_age {
                return Err(invalid_row(file, line, "MaxAge must exceed MinAge"));
            }
        }

        bands.push(CriticalIllnessBand {
            min_age: row.min_age,
            max_age: row.max_age,
            sums: Tiered::new(row.tier_a, row.tier_b, row.tier_c),
        });
    }

    if bands.last().map_or(false, |band| band.max_age.is_none()) {
        Ok(bands)
    } else {
        Err(invalid_rules(file, "last band must have an empty MaxAge"))
    }
}

/// Load occupation boosts. Every occupation class must appear.
pub fn load_personal_accident(path: &Path) -> Result<Vec<(Occupation, u64)>, LoadError> {
    let file = PERSONAL_ACCIDENT_FILE;
    let mut boosts = Vec::new();

    for (line, row) in read_rows::<PersonalAccidentRow>(path, file)? {
        let occupation = Occupation::from_code(&row.occupation).ok_or_else(|| {
            invalid_row(file, line, format!("unknown Occupation: {}", row.occupation))
        })?;
        boosts.push((occupation, row.boost));
    }

    for occupation in Occupation::ALL {
        if !boosts.iter().any(|(o, _)| *o == occupation) {
            return Err(invalid_rules(file, format!("missing occupation {}", occupation.as_str())));
        }
    }

    Ok(boosts)
}

/// Load daily hospital cash per hospital preference
pub fn load_hospital_cash(path: &Path) -> Result<HospitalCashRules, LoadError> {
    let file = HOSPITAL_CASH_FILE;
    let mut public = None;
    let mut private = None;

    for (line, row) in read_rows::<HospitalCashRow>(path, file)? {
        let sums = Tiered::new(row.tier_a, row.tier_b, row.tier_c);
        match HospitalPreference::from_code(&row.hospital) {
            Some(HospitalPreference::Public) => public = Some(sums),
            Some(HospitalPreference::Private) => private = Some(sums),
            None => {
                let message = format!("unknown Hospital: {}", row.hospital);
                return Err(invalid_row(file, line, message));
            }
        }
    }

    match (public, private) {
        (Some(public), Some(private)) => Ok(HospitalCashRules { public, private }),
        _ => Err(invalid_rules(file, "both public and private rows are required")),
    }
}

/// Load the premium mix per priority. Every row must sum to 100.
pub fn load_premium_mix(path: &Path) -> Result<MixRules, LoadError> {
    let file = PREMIUM_MIX_FILE;
    let mut risk = None;
    let mut health = None;
    let mut savings = None;

    for (line, row) in read_rows::<PremiumMixRow>(path, file)? {
        let mix = Mix::new(
            row.life,
            row.critical_illness,
            row.personal_accident,
            row.hospital_cash,
        );
        if mix.total() != 100 {
            return Err(invalid_row(file, line, format!("mix sums to {}, not 100", mix.total())));
        }
        match Priority::from_code(&row.priority) {
            Some(Priority::Risk) => risk = Some(mix),
            Some(Priority::Health) => health = Some(mix),
            Some(Priority::Savings) => savings = Some(mix),
            None => {
                let message = format!("unknown Priority: {}", row.priority);
                return Err(invalid_row(file, line, message));
            }
        }
    }

    match (risk, health, savings) {
        (Some(risk), Some(health), Some(savings)) => Ok(MixRules { risk, health, savings }),
        _ => Err(invalid_rules(file, "risk, health and savings rows are required")),
    }
}
