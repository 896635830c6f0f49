//! Tier hints and profile advice

use crate::profile::{HospitalPreference, Occupation, Profile};
use crate::rules::{GuidanceRules, Tiered};
use serde::{Serialize, Serializer};
use std::fmt;

/// Short note shown under a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    ClearMajorDebts,
    PublicHospitalCash,
    PrivateInpatientLater,
    StarterBudget,
    BalancedCover,
    ProtectDependents,
    RaiseAccidentCover,
    LongTermIllnessCover,
    NcdAgeIllnessCover,
}

impl Hint {
    pub fn text(&self) -> &'static str {
        match self {
            Hint::ClearMajorDebts => {
                "Focus on paying down major debts and covering severe events first"
            }
            Hint::PublicHospitalCash => "Use public-hospital rights and add daily hospital cash",
            Hint::PrivateInpatientLater => {
                "You use private hospitals often; consider inpatient (IPD) cover later"
            }
            Hint::StarterBudget => "Keep the budget at 3–6% of monthly income to start",
            Hint::BalancedCover => "Balance life, critical illness, accident and income-loss cover",
            Hint::ProtectDependents => "Raise life cover to protect your dependents",
            Hint::RaiseAccidentCover => "Riskier occupation: raise personal accident cover",
            Hint::LongTermIllnessCover => {
                "Add critical illness and daily hospital cash for the long term"
            }
            Hint::NcdAgeIllnessCover => "NCD-risk age: push critical illness cover higher",
        }
    }
}

/// Profile-level advice line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    DependentsLifeCover,
    PublicHospitalCash,
    PrivateRoomLimit,
    FieldWorkExclusions,
    SmokerHealthCheck,
    NonSmokerPremiums,
    BudgetDiscipline,
}

impl Advice {
    pub fn text(&self) -> &'static str {
        match self {
            Advice::DependentsLifeCover => {
                "People depend on you: keep life cover at least total debt plus 2–3 years of expenses"
            }
            Advice::PublicHospitalCash => {
                "Frequent public-hospital use: hospital cash helps replace lost income"
            }
            Advice::PrivateRoomLimit => {
                "Private-hospital use: check each hospital's IPD room-rate limit"
            }
            Advice::FieldWorkExclusions => {
                "Field work: raise PA cover and read the occupation exclusions"
            }
            Advice::SmokerHealthCheck => {
                "Smoking may raise premiums; get a health check before applying"
            }
            Advice::NonSmokerPremiums => "Non-smokers usually get better premiums",
            Advice::BudgetDiscipline => {
                "Hold the budget at 5–10% of monthly income and raise it as income grows"
            }
        }
    }
}

macro_rules! text_display {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.text())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.text())
            }
        }
    )*};
}

text_display!(Hint, Advice);

/// Hints per tier, always-on hint first
pub fn tier_hints(profile: &Profile, rules: &GuidanceRules) -> Tiered<Vec<Hint>> {
    let mut a = vec![Hint::ClearMajorDebts];
    a.push(match profile.hospital {
        HospitalPreference::Public => Hint::PublicHospitalCash,
        HospitalPreference::Private => Hint::PrivateInpatientLater,
    });
    if profile.income < rules.starter_income_below {
        a.push(Hint::StarterBudget);
    }

    let mut b = vec![Hint::BalancedCover];
    if profile.dependents > 0 {
        b.push(Hint::ProtectDependents);
    }
    if profile.occupation != Occupation::Low {
        b.push(Hint::RaiseAccidentCover);
    }

    let mut c = vec![Hint::LongTermIllnessCover];
    if profile.age >= rules.ncd_age_from {
        c.push(Hint::NcdAgeIllnessCover);
    }

    Tiered::new(a, b, c)
}

/// Advice lines in display order
pub fn advice(profile: &Profile, rules: &GuidanceRules) -> Vec<Advice> {
    let mut lines = Vec::new();

    if profile.dependents > 0 {
        lines.push(Advice::DependentsLifeCover);
    }
    lines.push(match profile.hospital {
        HospitalPreference::Public => Advice::PublicHospitalCash,
        HospitalPreference::Private => Advice::PrivateRoomLimit,
    });
    if profile.occupation == Occupation::High {
        lines.push(Advice::FieldWorkExclusions);
    }
    lines.push(if profile.smoker {
        Advice::SmokerHealthCheck
    } else {
        Advice::NonSmokerPremiums
    });
    if profile.income <= rules.discipline_income_up_to {
        lines.push(Advice::BudgetDiscipline);
    }

    lines
}
