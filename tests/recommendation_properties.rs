use cover_planner::export::ExportDocument;
use cover_planner::profile::{BudgetMode, HospitalPreference, Occupation, Priority, Profile, Sex};
use cover_planner::rules::{BasisPoints, BudgetRate, Tier};
use cover_planner::RecommendationEngine;
use proptest::prelude::*;

fn occupation() -> impl Strategy<Value = Occupation> {
    prop_oneof![Just(Occupation::Low), Just(Occupation::Med), Just(Occupation::High)]
}

fn hospital() -> impl Strategy<Value = HospitalPreference> {
    prop_oneof![Just(HospitalPreference::Public), Just(HospitalPreference::Private)]
}

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::Risk), Just(Priority::Health), Just(Priority::Savings)]
}

fn sex() -> impl Strategy<Value = Sex> {
    prop_oneof![Just(Sex::Male), Just(Sex::Female), Just(Sex::Na)]
}

/// Valid profiles in auto mode
fn auto_profile() -> impl Strategy<Value = Profile> {
    (
        (18u32..=70, 1u64..=1_000_000, 0u32..=10, any::<bool>()),
        (sex(), occupation(), hospital(), priority()),
        (0u64..=100_000_000, 0u64..=100_000_000),
    )
        .prop_map(|((age, income, dependents, smoker), codes, (home_debt, car_debt))| {
            let (sex, occupation, hospital, priority) = codes;
            Profile {
                sex,
                dependents,
                smoker,
                occupation,
                hospital,
                home_debt,
                car_debt,
                priority,
                ..Profile::new(age, income)
            }
        })
}

/// Valid profiles in either mode
fn any_profile() -> impl Strategy<Value = Profile> {
    (auto_profile(), prop::option::of(1u32..=10_000)).prop_map(|(profile, manual)| match manual {
        Some(bps) => profile.with_manual_budget(bps as f64 / 100.0),
        None => profile,
    })
}

proptest! {
    #[test]
    fn life_cover_grows_with_tier(profile in any_profile()) {
        let rec = RecommendationEngine::default().compute(&profile).unwrap();
        prop_assert!(rec.plans.a.life <= rec.plans.b.life);
        prop_assert!(rec.plans.b.life <= rec.plans.c.life);
        prop_assert_eq!(rec.plans.b.life, rec.life_base);
    }

    #[test]
    fn mix_sums_to_100(profile in any_profile()) {
        let rec = RecommendationEngine::default().compute(&profile).unwrap();
        prop_assert_eq!(rec.mix.total(), 100);
    }

    #[test]
    fn auto_rate_stays_within_floor_and_cap(profile in auto_profile()) {
        let rec = RecommendationEngine::default().compute(&profile).unwrap();
        match rec.used_rate {
            BudgetRate::Auto(rate) => {
                prop_assert!(rate >= BasisPoints(300) && rate <= BasisPoints(1_000));
            }
            BudgetRate::Manual(_) => prop_assert!(false, "auto profile used a manual rate"),
        }
        prop_assert!((0.03..=0.10).contains(&rec.used_percent));
    }

    #[test]
    fn manual_rate_is_taken_as_given(profile in auto_profile(), percent in 0.01f64..150.0) {
        let profile = profile.with_manual_budget(percent);
        let rec = RecommendationEngine::default().compute(&profile).unwrap();
        prop_assert_eq!(rec.used_rate, BudgetRate::Manual(percent / 100.0));
        prop_assert_eq!(rec.used_percent, percent / 100.0);
    }

    #[test]
    fn compute_is_idempotent(profile in any_profile()) {
        let engine = RecommendationEngine::default();
        prop_assert_eq!(engine.compute(&profile).unwrap(), engine.compute(&profile).unwrap());
    }

    #[test]
    fn export_round_trip_reproduces_recommendation(profile in any_profile()) {
        let engine = RecommendationEngine::default();
        let rec = engine.compute(&profile).unwrap();
        let document = ExportDocument::new(&profile, &rec);

        let json = document.to_json().unwrap();
        let replay = ExportDocument::from_json(&json).unwrap().replay(&engine).unwrap();

        prop_assert!(replay.summary_matches);
        prop_assert_eq!(&replay.evaluation.profile, &profile);
        prop_assert_eq!(replay.evaluation.recommendation, rec);
    }

    #[test]
    fn summary_always_has_six_lines(profile in any_profile()) {
        let rec = RecommendationEngine::default().compute(&profile).unwrap();
        prop_assert_eq!(rec.summary_text.lines().count(), 6);
    }

    #[test]
    fn out_of_range_age_is_rejected(
        age in prop_oneof![0u32..18, 71u32..200],
        income in 1u64..1_000_000,
    ) {
        let engine = RecommendationEngine::default();
        prop_assert!(engine.compute(&Profile::new(age, income)).is_err());
    }
}

#[test]
fn test_age_and_income_edges() {
    let engine = RecommendationEngine::default();

    assert!(engine.compute(&Profile::new(18, 20_000)).is_ok());
    assert!(engine.compute(&Profile::new(70, 20_000)).is_ok());
    assert!(engine.compute(&Profile::new(17, 20_000)).is_err());
    assert!(engine.compute(&Profile::new(71, 20_000)).is_err());
    assert!(engine.compute(&Profile::new(30, 0)).is_err());

    let rec = engine.compute(&Profile::new(30, 1)).unwrap();
    assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(400)));
}

#[test]
fn test_high_risk_smoker_reaches_cap() {
    let profile = Profile {
        smoker: true,
        dependents: 3,
        occupation: Occupation::High,
        ..Profile::new(50, 80_000)
    };
    let rec = cover_planner::compute(&profile).unwrap();

    assert_eq!(rec.used_rate, BudgetRate::Auto(BasisPoints(1_000)));
    assert_eq!(rec.recommended_tier, Tier::C);
    assert_eq!(profile.budget_mode, BudgetMode::Auto);
}
