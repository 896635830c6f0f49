//! Input validation and raw form value resolution
//!
//! Hard preconditions (age and income) block a recommendation. Everything
//! else is recovered locally: missing or unreadable values fall back to their
//! defaults and out-of-range values are capped, each with a warning.

use crate::error::{FieldIssue, RecommendationError};
use crate::profile::{
    BudgetMode, Field, FieldMap, HospitalPreference, Occupation, Priority, Profile, Sex,
    DEFAULT_MANUAL_BUDGET_PERCENT,
};
use log::warn;

/// Accepted ranges
#[derive(Debug, Clone, PartialEq)]
struct ValidationLimits {
    min_age: u32,
    max_age: u32,
    /// Incomes above this only warn
    practical_max_income: u64,
    max_dependents: u32,
    /// Applies to each debt separately
    max_debt: u64,
    /// Manual percents above this only warn
    practical_max_manual_percent: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 70,
            practical_max_income: 1_000_000,
            max_dependents: 10,
            max_debt: 100_000_000,
            practical_max_manual_percent: 100.0,
        }
    }
}

/// A profile resolved from raw values, with the recoveries applied on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub profile: Profile,
    pub warnings: Vec<FieldIssue>,
}

/// Raw numeric form value
#[derive(Debug, Clone, Copy, PartialEq)]
enum RawNumber {
    Missing,
    Whole(u64),
    Unreadable,
}

/// Parse like a number input: fractions floor, negatives and text are unreadable
fn parse_whole(raw: Option<&str>) -> RawNumber {
    let Some(raw) = raw else {
        return RawNumber::Missing;
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => RawNumber::Whole(value.floor() as u64),
        _ => RawNumber::Unreadable,
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    fn age_issue(&self) -> FieldIssue {
        FieldIssue::new(
            Field::Age,
            format!("must be between {} and {}", self.limits.min_age, self.limits.max_age),
        )
    }

    /// Hard preconditions. Every violation is reported, not just the first.
    pub fn check(&self, profile: &Profile) -> Result<(), RecommendationError> {
        let mut issues = Vec::new();

        if profile.age < self.limits.min_age || profile.age > self.limits.max_age {
            issues.push(self.age_issue());
        }
        if profile.income == 0 {
            issues.push(FieldIssue::new(Field::Income, "must be greater than 0"));
        }
        if profile.budget_mode == BudgetMode::Manual && !profile.manual_budget_percent.is_finite() {
            issues.push(FieldIssue::new(Field::ManualBudget, "must be a finite percentage"));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(RecommendationError::invalid(issues))
        }
    }

    /// Cap secondary fields to their limits and default an unset manual percent
    pub fn sanitize(&self, mut profile: Profile) -> (Profile, Vec<FieldIssue>) {
        let mut warnings = Vec::new();

        if profile.dependents > self.limits.max_dependents {
            warnings.push(FieldIssue::new(
                Field::Dependents,
                format!("{} capped at {}", profile.dependents, self.limits.max_dependents),
            ));
            profile.dependents = self.limits.max_dependents;
        }
        if profile.home_debt > self.limits.max_debt {
            warnings.push(FieldIssue::new(
                Field::HomeDebt,
                format!("{} capped at {}", profile.home_debt, self.limits.max_debt),
            ));
            profile.home_debt = self.limits.max_debt;
        }
        if profile.car_debt > self.limits.max_debt {
            warnings.push(FieldIssue::new(
                Field::CarDebt,
                format!("{} capped at {}", profile.car_debt, self.limits.max_debt),
            ));
            profile.car_debt = self.limits.max_debt;
        }
        if profile.income > self.limits.practical_max_income {
            warnings.push(FieldIssue::new(
                Field::Income,
                format!("above the practical cap of {}", self.limits.practical_max_income),
            ));
        }
        if profile.budget_mode == BudgetMode::Manual {
            let percent = profile.manual_budget_percent;
            if percent.is_finite() && percent <= 0.0 {
                warnings.push(FieldIssue::new(
                    Field::ManualBudget,
                    format!("{} is not set, using {}", percent, DEFAULT_MANUAL_BUDGET_PERCENT),
                ));
                profile.manual_budget_percent = DEFAULT_MANUAL_BUDGET_PERCENT;
            } else if percent > self.limits.practical_max_manual_percent {
                warnings.push(FieldIssue::new(
                    Field::ManualBudget,
                    format!("{}% is more than the whole income", percent),
                ));
            }
        }

        for warning in &warnings {
            warn!("{}", warning);
        }
        (profile, warnings)
    }

    /// Resolve raw form values into a checked profile
    pub fn resolve(&self, fields: &FieldMap) -> Result<Resolved, RecommendationError> {
        let mut warnings = Vec::new();
        let mut issues = Vec::new();
        let mut profile = Profile::new(0, 0);

        match parse_whole(fields.get(Field::Age)) {
            RawNumber::Whole(age) => profile.age = age.min(u32::MAX as u64) as u32,
            RawNumber::Missing | RawNumber::Unreadable => issues.push(self.age_issue()),
        }
        match parse_whole(fields.get(Field::Income)) {
            RawNumber::Whole(income) => profile.income = income,
            RawNumber::Missing | RawNumber::Unreadable => {
                issues.push(FieldIssue::new(Field::Income, "must be greater than 0"))
            }
        }

        let dependents = whole_or_zero(fields, Field::Dependents, &mut warnings);
        profile.dependents = dependents.min(u32::MAX as u64) as u32;
        profile.home_debt = whole_or_zero(fields, Field::HomeDebt, &mut warnings);
        profile.car_debt = whole_or_zero(fields, Field::CarDebt, &mut warnings);

        let w = &mut warnings;
        profile.sex = code_or_default(fields, Field::Sex, Sex::from_code, w);
        profile.occupation = code_or_default(fields, Field::Occupation, Occupation::from_code, w);
        profile.hospital =
            code_or_default(fields, Field::Hospital, HospitalPreference::from_code, w);
        profile.priority = code_or_default(fields, Field::Priority, Priority::from_code, w);
        profile.budget_mode = code_or_default(fields, Field::BudgetMode, BudgetMode::from_code, w);
        profile.smoker = code_or_default(fields, Field::Smoker, parse_yes_no, w);

        let manual = fields.get(Field::ManualBudget).map(str::parse::<f64>);
        profile.manual_budget_percent = match manual {
            None => DEFAULT_MANUAL_BUDGET_PERCENT,
            Some(Ok(percent)) if percent.is_finite() && percent > 0.0 => percent,
            Some(Ok(percent)) if percent == 0.0 => DEFAULT_MANUAL_BUDGET_PERCENT,
            Some(_) => {
                warnings.push(FieldIssue::new(
                    Field::ManualBudget,
                    format!("unreadable, using {}", DEFAULT_MANUAL_BUDGET_PERCENT),
                ));
                DEFAULT_MANUAL_BUDGET_PERCENT
            }
        };

        let (profile, capped) = self.sanitize(profile);
        warnings.extend(capped);

        if let Err(err) = self.check(&profile) {
            for issue in err.issues() {
                if !issues.iter().any(|i: &FieldIssue| i.field == issue.field) {
                    issues.push(issue.clone());
                }
            }
        }
        if !issues.is_empty() {
            issues.sort_by_key(|issue| issue.field);
            return Err(RecommendationError::invalid(issues));
        }

        Ok(Resolved { profile, warnings })
    }
}

fn parse_yes_no(code: &str) -> Option<bool> {
    match code.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn whole_or_zero(fields: &FieldMap, field: Field, warnings: &mut Vec<FieldIssue>) -> u64 {
    match parse_whole(fields.get(field)) {
        RawNumber::Whole(value) => value,
        RawNumber::Missing => 0,
        RawNumber::Unreadable => {
            let issue = FieldIssue::new(field, "not a non-negative number, using 0");
            warn!("{}", issue);
            warnings.push(issue);
            0
        }
    }
}

fn code_or_default<T: Default>(
    fields: &FieldMap,
    field: Field,
    parse: impl Fn(&str) -> Option<T>,
    warnings: &mut Vec<FieldIssue>,
) -> T {
    match fields.get(field) {
        None => T::default(),
        Some(raw) => parse(raw).unwrap_or_else(|| {
            let issue =
                FieldIssue::new(field, format!("unknown value '{}', using the default", raw));
            warn!("{}", issue);
            warnings.push(issue);
            T::default()
        }),
    }
}
