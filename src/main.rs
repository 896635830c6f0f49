//! Cover Planner CLI
//!
//! Command-line presenter for cover recommendations

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use cover_planner::export::{ExportDocument, DEFAULT_EXPORT_FILE};
use cover_planner::planner::Evaluation;
use cover_planner::profile::{Field, FieldMap, Preset};
use cover_planner::money::format_baht;
use cover_planner::rules::loader::DEFAULT_RULES_PATH;
use cover_planner::rules::{Boundary, Rules, Tier};
use cover_planner::RecommendationEngine;
use std::path::{Path, PathBuf};

const RULES_ENV: &str = "COVER_PLANNER_RULES";

#[derive(Parser)]
#[command(name = "cover_planner", version, about = "Personal insurance cover planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a recommendation for one profile
    Recommend(RecommendArgs),
    /// List the built-in profile presets
    Presets,
    /// Recompute a plan from an exported document
    Import {
        file: PathBuf,
        #[command(flatten)]
        rules: RulesArgs,
        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the effective rules as JSON
    Rules {
        #[command(flatten)]
        rules: RulesArgs,
    },
}

#[derive(clap::Args)]
struct RulesArgs {
    /// Directory with rule CSV files (falls back to $COVER_PLANNER_RULES)
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = DEFAULT_RULES_PATH)]
    rules: Option<PathBuf>,

    /// A rate exactly on a tier threshold goes to the higher tier
    #[arg(long)]
    exclusive: bool,
}

impl RulesArgs {
    fn engine(&self) -> Result<RecommendationEngine> {
        let dir = self
            .rules
            .clone()
            .or_else(|| std::env::var_os(RULES_ENV).map(PathBuf::from));

        let rules = match dir {
            Some(dir) => Rules::from_csv_path(&dir)
                .with_context(|| format!("loading rules from {}", dir.display()))?,
            None => Rules::standard(),
        };
        let boundary = if self.exclusive {
            Boundary::Exclusive
        } else {
            Boundary::Inclusive
        };
        Ok(RecommendationEngine::new(rules.with_boundary(boundary)))
    }
}

#[derive(clap::Args)]
struct RecommendArgs {
    /// Start from a preset (salaried, freelance, family, starter)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<Preset>,

    #[arg(long)]
    age: Option<u32>,
    /// Monthly income in baht
    #[arg(long)]
    income: Option<u64>,
    /// male, female or na
    #[arg(long)]
    sex: Option<String>,
    #[arg(long)]
    dependents: Option<u32>,
    #[arg(long)]
    smoker: bool,
    /// low, med or high
    #[arg(long)]
    occupation: Option<String>,
    /// public or private
    #[arg(long)]
    hospital: Option<String>,
    #[arg(long)]
    home_debt: Option<u64>,
    #[arg(long)]
    car_debt: Option<u64>,
    /// risk, health or savings
    #[arg(long)]
    priority: Option<String>,
    /// Fixed budget as percent of income instead of the automatic rate
    #[arg(long, value_name = "PERCENT")]
    manual_budget: Option<f64>,

    #[command(flatten)]
    rules: RulesArgs,

    /// Print the recommendation as JSON
    #[arg(long)]
    json: bool,

    /// Write an export document (default cover-plan.json)
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    export: Option<PathBuf>,
}

impl RecommendArgs {
    fn field_map(&self) -> FieldMap {
        let mut fields = self
            .preset
            .map(|preset| FieldMap::from_profile(&preset.profile()))
            .unwrap_or_default();

        let numbers = [
            (Field::Age, self.age.map(u64::from)),
            (Field::Income, self.income),
            (Field::Dependents, self.dependents.map(u64::from)),
            (Field::HomeDebt, self.home_debt),
            (Field::CarDebt, self.car_debt),
        ];
        for (field, value) in numbers {
            if let Some(value) = value {
                fields.set(field, value.to_string());
            }
        }

        let codes = [
            (Field::Sex, &self.sex),
            (Field::Occupation, &self.occupation),
            (Field::Hospital, &self.hospital),
            (Field::Priority, &self.priority),
        ];
        for (field, value) in codes {
            if let Some(value) = value {
                fields.set(field, value.as_str());
            }
        }

        if self.smoker {
            fields.set(Field::Smoker, "yes");
        }
        if let Some(percent) = self.manual_budget {
            fields.set(Field::BudgetMode, "manual");
            fields.set(Field::ManualBudget, percent.to_string());
        }
        fields
    }
}

fn parse_preset(code: &str) -> Result<Preset, String> {
    Preset::from_code(code).ok_or_else(|| {
        let known: Vec<&str> = Preset::ALL.iter().map(|p| p.as_str()).collect();
        format!("unknown preset '{}' (expected one of {})", code, known.join(", "))
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Recommend(args) => recommend(&args),
        Commands::Presets => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.as_str(), preset.description());
            }
            Ok(())
        }
        Commands::Import { file, rules, json } => import(&file, &rules, json),
        Commands::Rules { rules } => {
            let engine = rules.engine()?;
            println!("{}", serde_json::to_string_pretty(engine.rules())?);
            Ok(())
        }
    }
}

fn recommend(args: &RecommendArgs) -> Result<()> {
    let fields = args.field_map();
    if fields.is_empty() {
        bail!("give a --preset or at least --age and --income");
    }
    let engine = args.rules.engine()?;
    let evaluation = engine.compute_fields(&fields)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation.recommendation)?);
    } else {
        print_evaluation(&evaluation);
    }

    if let Some(path) = &args.export {
        ExportDocument::new(&evaluation.profile, &evaluation.recommendation)
            .write_to(path)
            .with_context(|| format!("writing {}", path.display()))?;
        eprintln!("Plan exported to {}", path.display());
    }
    Ok(())
}

fn import(file: &Path, rules: &RulesArgs, json: bool) -> Result<()> {
    let engine = rules.engine()?;
    let document =
        ExportDocument::read_from(file).with_context(|| format!("reading {}", file.display()))?;
    let replay = document.replay(&engine)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&replay.evaluation.recommendation)?);
    } else {
        print_evaluation(&replay.evaluation);
        println!();
        if replay.summary_matches {
            println!("Stored summary matches the recomputed plan.");
        } else {
            println!(
                "Stored summary differs from the recomputed plan; showing the recomputed one."
            );
        }
    }
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    let rec = &evaluation.recommendation;

    for warning in &evaluation.warnings {
        eprintln!("warning: {}", warning);
    }

    println!("{}", rec.summary_text);
    println!();
    let plan = rec.recommended_plan();
    println!(
        "Recommended tier: {} ({}), life {}",
        rec.recommended_tier.as_str(),
        rec.recommended_tier.name(),
        format_baht(plan.life as f64)
    );

    println!("\nPremium mix:");
    for (coverage, amount) in rec.budget_split() {
        let share = rec.mix.share(coverage);
        println!(
            "  {:<18} {:>3}% {:>10} {}",
            coverage.label(),
            share,
            format_baht(amount),
            "#".repeat(share as usize / 2)
        );
    }

    for tier in Tier::ALL {
        println!("\nTier {} ({}):", tier.as_str(), tier.name());
        for hint in rec.hints_for(tier) {
            println!("  - {}", hint);
        }
    }

    println!("\nAdvice:");
    for advice in &rec.advice {
        println!("  - {}", advice);
    }
}
