//! Projection inputs and raw field normalization
//!
//! Hosts read six text values from their widgets. Nothing here rejects input:
//! anything missing or unparseable becomes 0 before it reaches the projection.

mod parse;

pub use parse::{parse_horizon, parse_money, parse_rate};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Whether the stated rate is annual or already monthly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RateBasis {
    /// Annual effective rate, converted to the equivalent monthly rate
    #[default]
    Annual,
    /// Monthly rate, used as-is
    Monthly,
}

impl RateBasis {
    /// Map a selector value. Only "annual" selects the annual basis.
    pub fn from_field(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("annual") {
            RateBasis::Annual
        } else {
            RateBasis::Monthly
        }
    }
}

/// Unit of the projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HorizonUnit {
    Months,
    #[default]
    Years,
}

impl HorizonUnit {
    /// Map a selector value. Only "years" selects years.
    pub fn from_field(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("years") {
            HorizonUnit::Years
        } else {
            HorizonUnit::Months
        }
    }
}

/// Normalized input for a single projection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionInput {
    /// Lump sum at month 0 (currency units)
    pub initial_value: f64,

    /// Amount added at the end of every month (currency units)
    pub monthly_contribution: f64,

    /// Rate in percentage points (5.0 = 5%)
    pub nominal_rate: f64,

    pub rate_basis: RateBasis,

    /// Projection length, in `horizon_unit`
    pub horizon: u32,

    pub horizon_unit: HorizonUnit,
}

/// Field text exactly as read from the host widgets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInput {
    pub initial_value: String,
    pub monthly_contribution: String,
    pub nominal_rate: String,
    pub rate_basis: String,
    pub horizon: String,
    pub horizon_unit: String,
}

impl RawInput {
    /// Normalize every field. Never fails.
    pub fn normalize(&self) -> ProjectionInput {
        ProjectionInput {
            initial_value: parse_money(&self.initial_value),
            monthly_contribution: parse_money(&self.monthly_contribution),
            nominal_rate: parse_rate(&self.nominal_rate),
            rate_basis: RateBasis::from_field(&self.rate_basis),
            horizon: parse_horizon(&self.horizon),
            horizon_unit: HorizonUnit::from_field(&self.horizon_unit),
        }
    }
}

impl From<&RawInput> for ProjectionInput {
    fn from(raw: &RawInput) -> Self {
        raw.normalize()
    }
}
