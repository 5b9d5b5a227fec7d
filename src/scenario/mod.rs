//! Batch projection of named scenarios
//!
//! Scenarios load from CSV (one row per scenario, raw field text) or JSON
//! (already-normalized inputs) and project in parallel.

use crate::input::{ProjectionInput, RawInput};
use crate::projection::{project, ProjectionSeries, ProjectionSummary};
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures reading or writing scenario files
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named projection input. In JSON the input fields sit beside the name:
/// `{"name": "a", "initial_value": 10, "horizon": 5}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(flatten)]
    pub input: ProjectionInput,
}

/// CSV row: field text as a user would type it. Missing columns read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ScenarioRow {
    name: String,
    initial_value: String,
    monthly_contribution: String,
    nominal_rate: String,
    rate_basis: String,
    horizon: String,
    horizon_unit: String,
}

impl From<ScenarioRow> for Scenario {
    fn from(row: ScenarioRow) -> Self {
        let raw = RawInput {
            initial_value: row.initial_value,
            monthly_contribution: row.monthly_contribution,
            nominal_rate: row.nominal_rate,
            rate_basis: row.rate_basis,
            horizon: row.horizon,
            horizon_unit: row.horizon_unit,
        };
        Scenario {
            name: row.name,
            input: raw.normalize(),
        }
    }
}

/// Load scenarios from a CSV file with a header row
pub fn load_scenarios_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let file = open(path.as_ref())?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: io::Read>(
    reader: R,
) -> Result<Vec<Scenario>, ScenarioError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for row in rdr.deserialize::<ScenarioRow>() {
        scenarios.push(Scenario::from(row?));
    }

    debug!("Loaded {} scenarios from CSV", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from a JSON array
pub fn load_scenarios_json<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let file = open(path.as_ref())?;
    let scenarios: Vec<Scenario> = serde_json::from_reader(io::BufReader::new(file))?;
    debug!("Loaded {} scenarios from JSON", scenarios.len());
    Ok(scenarios)
}

fn open(path: &Path) -> Result<File, ScenarioError> {
    File::open(path).map_err(|source| ScenarioError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Projection outcome for one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub total_months: u32,
    pub summary: ProjectionSummary,
    /// Full month table, only kept when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<ProjectionSeries>,
}

/// Runs many scenarios in parallel
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Keep every month, not just the summary
    pub detailed_output: bool,
}

impl ScenarioRunner {
    pub fn new(detailed_output: bool) -> Self {
        Self { detailed_output }
    }

    /// Project every scenario. Results keep the input order.
    pub fn run(&self, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
        info!("Running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| {
                let series = project(&scenario.input);
                ScenarioResult {
                    name: scenario.name.clone(),
                    total_months: series.total_months(),
                    summary: series.summary(),
                    series: self.detailed_output.then_some(series),
                }
            })
            .collect()
    }
}

/// Write one summary row per result
pub fn write_summary_csv<W: io::Write>(
    results: &[ScenarioResult],
    writer: W,
) -> Result<(), ScenarioError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Name", "Months", "TotalInvested", "TotalInterest", "FinalAmount"])?;

    for result in results {
        wtr.write_record(&[
            result.name.clone(),
            result.total_months.to_string(),
            format!("{:.2}", result.summary.total_invested),
            format!("{:.2}", result.summary.total_interest),
            format!("{:.2}", result.summary.final_amount),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
