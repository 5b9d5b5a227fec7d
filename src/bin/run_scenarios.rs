//! Run projections for every scenario in a CSV or JSON file
//!
//! Outputs one summary row per scenario

use anyhow::{Context, Result};
use clap::Parser;
use compound_interest::format::format_currency;
use compound_interest::scenario::{
    load_scenarios_csv, load_scenarios_json, write_summary_csv, ScenarioRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Project a batch of savings scenarios")]
struct Args {
    /// Scenario file (.csv with a header row, or .json array)
    scenarios: PathBuf,

    /// Summary CSV to write
    #[arg(short, long, default_value = "scenario_summary.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.scenarios.display());

    let is_json = args
        .scenarios
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let scenarios = if is_json {
        load_scenarios_json(&args.scenarios)
    } else {
        load_scenarios_csv(&args.scenarios)
    }
    .context("Failed to load scenarios")?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let proj_start = Instant::now();
    let results = ScenarioRunner::default().run(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_summary_csv(&results, BufWriter::new(file)).context("Failed to write summary")?;
    println!("Output written to {}", args.output.display());

    println!("\nScenario Summary:");
    for result in &results {
        println!(
            "  {:<20} {:>4} months  Invested={:>16}  Interest={:>16}  Final={:>16}",
            result.name,
            result.total_months,
            format_currency(result.summary.total_invested),
            format_currency(result.summary.total_interest),
            format_currency(result.summary.final_amount),
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
