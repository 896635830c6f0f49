//! Run recommendations for a CSV batch of profiles
//!
//! One output row per input row, in input order. Rows that fail validation
//! are reported with their error instead of stopping the batch.

use anyhow::{Context, Result};
use clap::Parser;
use cover_planner::profile::{load_field_maps, ProfileRow};
use cover_planner::{Evaluation, RecommendationEngine, RecommendationError, Rules};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Compute cover recommendations for a CSV of profiles")]
struct Args {
    /// CSV with a header row of field keys (age,income,dependents,...)
    input: PathBuf,

    /// Output CSV
    #[arg(short, long, default_value = "recommendations.csv")]
    output: PathBuf,

    /// Directory with rule CSV files
    #[arg(long, value_name = "DIR")]
    rules: Option<PathBuf>,
}

/// One output row
#[derive(Debug, Default, Serialize)]
struct BatchRow {
    line: u64,
    status: &'static str,
    age: Option<u32>,
    income: Option<u64>,
    used_percent: Option<f64>,
    budget: Option<f64>,
    life_base: Option<u64>,
    life_a: Option<u64>,
    life_b: Option<u64>,
    life_c: Option<u64>,
    tier: Option<&'static str>,
    warnings: String,
    error: String,
}

impl BatchRow {
    fn from_result(line: u64, result: &Result<Evaluation, RecommendationError>) -> Self {
        match result {
            Ok(evaluation) => {
                let rec = &evaluation.recommendation;
                BatchRow {
                    line,
                    status: "ok",
                    age: Some(evaluation.profile.age),
                    income: Some(evaluation.profile.income),
                    used_percent: Some(rec.used_percent),
                    budget: Some(rec.budget),
                    life_base: Some(rec.life_base),
                    life_a: Some(rec.plans.a.life),
                    life_b: Some(rec.plans.b.life),
                    life_c: Some(rec.plans.c.life),
                    tier: Some(rec.recommended_tier.as_str()),
                    warnings: join(&evaluation.warnings),
                    error: String::new(),
                }
            }
            Err(err) => BatchRow {
                line,
                status: "invalid",
                error: join(err.issues()),
                ..Default::default()
            },
        }
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading profiles from {}...", args.input.display());
    let rows: Vec<ProfileRow> =
        load_field_maps(&args.input).with_context(|| format!("loading {}", args.input.display()))?;
    println!("Loaded {} profiles in {:?}", rows.len(), start.elapsed());

    let rules = match &args.rules {
        Some(dir) => Rules::from_csv_path(dir)
            .with_context(|| format!("loading rules from {}", dir.display()))?,
        None => Rules::standard(),
    };
    let engine = RecommendationEngine::new(rules);

    println!("Computing recommendations...");
    let compute_start = Instant::now();

    // par_iter keeps input order on collect
    let results: Vec<BatchRow> = rows
        .par_iter()
        .map(|row| BatchRow::from_result(row.line, &engine.compute_fields(&row.fields)))
        .collect();

    println!("Computed in {:?}", compute_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &results {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output.display());

    let ok = results.iter().filter(|r| r.status == "ok").count();
    let mut per_tier = [0usize; 3];
    for row in &results {
        match row.tier {
            Some("A") => per_tier[0] += 1,
            Some("B") => per_tier[1] += 1,
            Some("C") => per_tier[2] += 1,
            _ => {}
        }
    }

    println!("\nBatch Summary:");
    println!("  Profiles:  {}", results.len());
    println!("  Valid:     {}", ok);
    println!("  Invalid:   {}", results.len() - ok);
    println!("  Tier A/B/C: {}/{}/{}", per_tier[0], per_tier[1], per_tier[2]);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
