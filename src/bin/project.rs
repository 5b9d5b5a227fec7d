//! Project a single savings scenario and print the summary totals

use anyhow::{Context, Result};
use clap::Parser;
use compound_interest::{
    format_currency, project, ChartData, HorizonUnit, ProjectionInput, RateBasis,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Compound interest projection")]
struct Args {
    /// Read the input from a JSON file instead of flags
    #[arg(long, conflicts_with_all = ["initial", "monthly", "rate", "period"])]
    input: Option<PathBuf>,

    /// Initial lump sum
    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// Monthly contribution
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,

    /// Interest rate in percent
    #[arg(long, default_value_t = 0.0)]
    rate: f64,

    #[arg(long, value_enum, default_value_t = RateBasis::Annual)]
    rate_basis: RateBasis,

    /// Projection length
    #[arg(long, default_value_t = 0)]
    period: u32,

    #[arg(long, value_enum, default_value_t = HorizonUnit::Years)]
    period_unit: HorizonUnit,

    /// Write the month table to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print chart data as JSON
    #[arg(long)]
    chart: bool,

    /// Print the chart hover text for this month
    #[arg(long)]
    month: Option<u32>,
}

fn load_input(args: &Args) -> Result<ProjectionInput> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("Invalid projection input in {}", path.display()))
        }
        None => Ok(ProjectionInput {
            initial_value: args.initial,
            monthly_contribution: args.monthly,
            nominal_rate: args.rate,
            rate_basis: args.rate_basis,
            horizon: args.period,
            horizon_unit: args.period_unit,
        }),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let input = load_input(&args)?;
    let series = project(&input);
    let summary = series.summary();

    println!("Months:          {}", series.total_months());
    println!("Monthly rate:    {:.6}%", series.monthly_rate() * 100.0);
    println!("Total invested:  {}", format_currency(summary.total_invested));
    println!("Total interest:  {}", format_currency(summary.total_interest));
    println!(
        "Final amount:    {} ({})",
        format_currency(summary.final_amount),
        ChartData::tick_label(summary.final_amount)
    );

    let chart = ChartData::from(&series);

    if let Some(month) = args.month {
        match chart.tooltip(month as usize) {
            Some(lines) => {
                println!();
                for line in lines {
                    println!("{}", line);
                }
            }
            None => println!("Month {} is past the end of the projection", month),
        }
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        series
            .write_csv(BufWriter::new(file))
            .context("Failed to write month table")?;
        println!("Month table written to {}", path.display());
    }

    if args.chart {
        let json = chart.to_json().context("Failed to serialize chart data")?;
        println!("{}", json);
    }

    Ok(())
}
