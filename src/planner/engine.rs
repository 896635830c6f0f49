//! Recommendation engine: budget, coverage tiers and guidance for one profile

use super::guidance;
use super::recommendation::{Plan, Recommendation};
use super::summary;
use crate::error::{FieldIssue, RecommendationError};
use crate::profile::{FieldMap, Profile};
use crate::rules::{Rules, Tier, Tiered};
use crate::validation::Validator;
use log::debug;

/// A recommendation computed from raw field values
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Profile after defaults and caps were applied
    pub profile: Profile,
    /// Recoveries made while resolving the fields
    pub warnings: Vec<FieldIssue>,
    pub recommendation: Recommendation,
}

/// Main recommendation engine
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    rules: Rules,
    validator: Validator,
}

impl RecommendationEngine {
    /// Create an engine with the given rules and the default validation limits
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            validator: Validator::default(),
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Compute the recommendation for a single profile
    ///
    /// Pure: the same profile and rules always produce an equal result.
    pub fn compute(&self, profile: &Profile) -> Result<Recommendation, RecommendationError> {
        self.validator.check(profile)?;
        let rules = &self.rules;

        // Budget
        let used_rate = rules.budget.used_rate(profile);
        let budget = used_rate.of(profile.income);
        let (budget_range_min, budget_range_max) = rules.budget.reference_range(profile.income);
        debug!(
            "age {} income {}: rate {}, budget {:.2}",
            profile.age, profile.income, used_rate, budget
        );

        // Coverage
        let life_years = rules.life.years(profile.dependents);
        let life_base = rules.life.base(profile);
        let plans = self.assemble_plans(profile, life_base);
        debug!("life base {} over {} years", life_base, life_years);

        let mix = rules.mix.for_priority(profile.priority);
        let recommended_tier = rules.tiering.classify_rate(used_rate);
        debug!("recommended tier {} at {}", recommended_tier.as_str(), used_rate);

        let mut recommendation = Recommendation {
            budget,
            used_percent: used_rate.fraction(),
            used_rate,
            budget_range_min,
            budget_range_max,
            life_years,
            life_base,
            plans,
            mix,
            recommended_tier,
            hints: guidance::tier_hints(profile, &rules.guidance),
            advice: guidance::advice(profile, &rules.guidance),
            summary_text: String::new(),
        };
        recommendation.summary_text = summary::render(&recommendation);

        Ok(recommendation)
    }

    fn assemble_plans(&self, profile: &Profile, life_base: u64) -> Tiered<Plan> {
        let life = self.rules.life.tiers(life_base);
        let critical_illness = self.rules.critical_illness.sums_for_age(profile.age);
        let personal_accident = self.rules.personal_accident.sums_for(profile.occupation);
        let hospital_cash = self.rules.hospital_cash.per_day(profile.hospital);

        let plan = |tier: Tier| Plan {
            life: *life.get(tier),
            critical_illness: *critical_illness.get(tier),
            personal_accident: *personal_accident.get(tier),
            hospital_cash_per_day: *hospital_cash.get(tier),
        };
        Tiered::new(plan(Tier::A), plan(Tier::B), plan(Tier::C))
    }

    /// Resolve raw field values, then compute
    pub fn compute_fields(&self, fields: &FieldMap) -> Result<Evaluation, RecommendationError> {
        let resolved = self.validator.resolve(fields)?;
        let recommendation = self.compute(&resolved.profile)?;
        Ok(Evaluation {
            profile: resolved.profile,
            warnings: resolved.warnings,
            recommendation,
        })
    }

    /// Compute each profile independently
    pub fn compute_batch(
        &self,
        profiles: &[Profile],
    ) -> Vec<Result<Recommendation, RecommendationError>> {
        profiles.iter().map(|p| self.compute(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Field, Occupation, Preset, Priority};
    use crate::rules::{BasisPoints, Boundary, BudgetRate, Coverage, Mix};
    use approx::assert_relative_eq;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Rules::standard())
    }

    #[test]
    fn test_salaried_preset() {
        let rec = engine().compute(&Preset::Salaried.profile()).unwrap();

        assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(700)));
        assert_relative_eq!(rec.used_percent, 0.07);
        assert_relative_eq!(rec.budget, 1_400.0);
        assert_relative_eq!(rec.budget_range_min, 600.0);
        assert_relative_eq!(rec.budget_range_max, 2_000.0);
        assert_eq!(rec.life_years, 3);
        assert_eq!(rec.life_base, 1_750_000);

        assert_eq!(
            rec.plans.a,
            Plan {
                life: 1_300_000,
                critical_illness: 300_000,
                personal_accident: 300_000,
                hospital_cash_per_day: 1_000,
            }
        );
        assert_eq!(rec.plans.b.life, 1_750_000);
        assert_eq!(rec.plans.c.life, 2_200_000);
        assert_eq!(rec.plans.c.critical_illness, 1_000_000);
        assert_eq!(rec.plans.c.hospital_cash_per_day, 2_000);
        assert_eq!(rec.mix, Mix::new(50, 25, 15, 10));
        assert_eq!(rec.recommended_tier, Tier::B);
    }

    #[test]
    fn test_starter_preset() {
        let rec = engine().compute(&Preset::Starter.profile()).unwrap();

        assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(500)));
        assert_relative_eq!(rec.budget, 450.0);
        assert_eq!(rec.life_base, 300_000);
        assert_eq!(rec.plans.a.life, 250_000);
        assert_eq!(rec.plans.c.life, 400_000);
        assert_eq!(
            rec.plans.map(|p| p.critical_illness),
            Tiered::new(200_000, 400_000, 800_000)
        );
        assert_eq!(
            rec.plans.map(|p| p.personal_accident),
            Tiered::new(400_000, 600_000, 800_000)
        );
        assert_eq!(rec.recommended_tier, Tier::A);
    }

    #[test]
    fn test_family_preset() {
        let rec = engine().compute(&Preset::Family.profile()).unwrap();

        assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(900)));
        assert_relative_eq!(rec.budget, 1_980.0);
        assert_eq!(rec.life_years, 5);
        assert_eq!(rec.life_base, 2_050_000);
        assert_eq!(rec.plans.a.life, 1_550_000);
        assert_eq!(rec.plans.c.life, 2_550_000);
        assert_eq!(rec.recommended_tier, Tier::C);
    }

    #[test]
    fn test_minimum_income() {
        let rec = engine().compute(&Profile::new(30, 1)).unwrap();

        assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(400)));
        assert_eq!(rec.life_base, 0);
        assert_eq!(rec.plans.map(|p| p.life), Tiered::new(0, 0, 0));
    }

    #[test]
    fn test_rate_on_threshold_depends_on_boundary() {
        let profile = Profile {
            smoker: true,
            dependents: 2,
            priority: Priority::Health,
            ..Profile::new(30, 4_000)
        };

        let inclusive = engine().compute(&profile).unwrap();
        assert_eq!(inclusive.used_rate, BudgetRate::Auto(BasisPoints(550)));
        assert_eq!(inclusive.recommended_tier, Tier::A);

        let rules = Rules::standard().with_boundary(Boundary::Exclusive);
        let exclusive = RecommendationEngine::new(rules).compute(&profile).unwrap();
        assert_eq!(exclusive.recommended_tier, Tier::B);
    }

    #[test]
    fn test_manual_budget_is_not_clamped() {
        let profile = Profile::new(30, 30_000).with_manual_budget(15.0);
        let rec = engine().compute(&profile).unwrap();

        assert_eq!(rec.used_rate, BudgetRate::Manual(0.15));
        assert_relative_eq!(rec.used_percent, 0.15);
        assert_relative_eq!(rec.budget, 4_500.0);
        assert_eq!(rec.recommended_tier, Tier::C);
    }

    #[test]
    fn test_manual_budget_uses_exact_percent() {
        let profile = Profile::new(30, 100_000).with_manual_budget(5.504);
        let rec = engine().compute(&profile).unwrap();

        assert_relative_eq!(rec.used_percent, 0.05504);
        assert_relative_eq!(rec.budget, 5_504.0, epsilon = 1e-6);
        assert_eq!(rec.recommended_tier, Tier::B);
        assert!(rec.summary_text.starts_with("Recommended budget/month: ฿5,504 (≈ 5.5% of income"));
    }

    #[test]
    fn test_manual_budget_above_range_is_accepted() {
        let profile = Profile::new(30, 10_000).with_manual_budget(120.0);
        let rec = engine().compute(&profile).unwrap();

        assert_relative_eq!(rec.used_percent, 1.2);
        assert_relative_eq!(rec.budget, 12_000.0);
        assert_eq!(rec.recommended_tier, Tier::C);
    }

    #[test]
    fn test_manual_budget_at_zero_means_default() {
        let profile = Profile::new(30, 10_000).with_manual_budget(0.0);
        let rec = engine().compute(&profile).unwrap();

        assert_relative_eq!(rec.used_percent, 0.07);
        assert_relative_eq!(rec.budget, 700.0);
    }

    #[test]
    fn test_used_percent_is_a_fraction() {
        for preset in Preset::ALL {
            let rec = engine().compute(&preset.profile()).unwrap();
            assert!(
                (0.03..=0.10).contains(&rec.used_percent),
                "{:?}: {}",
                preset,
                rec.used_percent
            );
        }
    }

    #[test]
    fn test_recommended_plan_and_budget_split() {
        let rec = engine().compute(&Preset::Salaried.profile()).unwrap();

        assert_eq!(rec.recommended_plan(), &rec.plans.b);
        let split = rec.budget_split();
        assert_eq!(split.len(), 4);
        assert_eq!(split[0].0, Coverage::Life);
        assert_relative_eq!(split[0].1, 700.0);
        assert_relative_eq!(split.iter().map(|(_, amount)| amount).sum::<f64>(), rec.budget);
    }

    #[test]
    fn test_invalid_profile_is_rejected() {
        let err = engine().compute(&Profile::new(17, 20_000)).unwrap_err();
        assert!(err.concerns(Field::Age));
        let err = engine().compute(&Profile::new(30, 0)).unwrap_err();
        assert!(err.concerns(Field::Income));
    }

    #[test]
    fn test_compute_is_deterministic() {
        let profile = Profile {
            occupation: Occupation::High,
            ..Preset::Freelance.profile()
        };
        let engine = engine();
        assert_eq!(engine.compute(&profile).unwrap(), engine.compute(&profile).unwrap());
    }

    #[test]
    fn test_summary_text() {
        let rec = engine().compute(&Preset::Salaried.profile()).unwrap();
        let lines: Vec<&str> = rec.summary_text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "Recommended budget/month: ฿1,400 (≈ 7.0% of income; reference range ฿600–฿2,000)"
        );
        assert_eq!(lines[1], "Base life cover (total debt + income × 3 years): ฿1,750,000");
        assert_eq!(
            lines[2],
            "A: Life ฿1,300,000 | CI ฿300,000 | PA ฿300,000 | Cash 1,000 THB/day"
        );
        assert_eq!(lines[5], summary::DISCLAIMER);
    }

    #[test]
    fn test_compute_fields_reports_warnings() {
        let mut fields = FieldMap::from_profile(&Preset::Salaried.profile());
        fields.set(Field::Dependents, "25");

        let evaluation = engine().compute_fields(&fields).unwrap();
        assert_eq!(evaluation.profile.dependents, 10);
        assert_eq!(evaluation.warnings.len(), 1);
        assert_eq!(evaluation.recommendation.life_years, 5);
    }

    #[test]
    fn test_compute_batch_keeps_order() {
        let profiles = vec![
            Preset::Starter.profile(),
            Profile::new(80, 10_000),
            Preset::Family.profile(),
        ];
        let results = engine().compute_batch(&profiles);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().recommended_tier, Tier::A);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().recommended_tier, Tier::C);
    }
}
