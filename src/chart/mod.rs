//! Chart feed for a time-series renderer
//!
//! The core hands the renderer plain arrays: month labels plus one dataset
//! per series line. Drawing and styling beyond the line color stay with the
//! renderer.

use crate::format::{format_axis_tick, format_currency};
use crate::projection::ProjectionSeries;
use serde::Serialize;

pub const ACCUMULATED_LABEL: &str = "Accumulated Total";
pub const INVESTED_LABEL: &str = "Total Invested";
pub const INTEREST_LABEL: &str = "Total Interest";

/// One line on the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    /// Line color as a hex string
    pub color: &'static str,
    pub data: Vec<f64>,
}

impl ChartDataset {
    /// Tooltip text for one point, e.g. "Total Invested: $1,200.00"
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.data
            .get(index)
            .map(|value| format!("{}: {}", self.label, format_currency(*value)))
    }
}

/// Labels and datasets ready to hand to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<u32>,
    /// Accumulated, invested, interest (in that order)
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    pub fn from_series(series: &ProjectionSeries) -> Self {
        Self {
            labels: series.labels(),
            datasets: vec![
                ChartDataset {
                    label: ACCUMULATED_LABEL,
                    color: "#3498db",
                    data: series.accumulated(),
                },
                ChartDataset {
                    label: INVESTED_LABEL,
                    color: "#e74c3c",
                    data: series.invested(),
                },
                ChartDataset {
                    label: INTEREST_LABEL,
                    color: "#f39c12",
                    data: series.interest(),
                },
            ],
        }
    }

    pub fn tooltip_title(month: u32) -> String {
        format!("Month {}", month)
    }

    /// Value-axis tick text ("$1.5M", "$250K", "$900")
    pub fn tick_label(value: f64) -> String {
        format_axis_tick(value)
    }

    /// Hover text for one month: the title, then one line per dataset
    pub fn tooltip(&self, index: usize) -> Option<Vec<String>> {
        let month = *self.labels.get(index)?;
        let mut lines = vec![Self::tooltip_title(month)];
        lines.extend(self.datasets.iter().filter_map(|ds| ds.tooltip_label(index)));
        Some(lines)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&ProjectionSeries> for ChartData {
    fn from(series: &ProjectionSeries) -> Self {
        Self::from_series(series)
    }
}
