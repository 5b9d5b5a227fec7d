//! Projection output series

use serde::Serialize;
use std::io;

/// Values at the end of a single month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub month: u32,
    /// Balance including growth and contributions
    pub accumulated: f64,
    /// Initial value plus all contributions so far
    pub invested: f64,
    /// accumulated - invested
    pub interest: f64,
}

/// Totals shown alongside the chart, read from the final month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionSummary {
    pub total_invested: f64,
    pub total_interest: f64,
    pub final_amount: f64,
}

/// Month 0 through the final month, in order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionSeries {
    monthly_rate: f64,
    points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub(super) fn new(monthly_rate: f64, points: Vec<ProjectionPoint>) -> Self {
        debug_assert!(!points.is_empty());
        Self { monthly_rate, points }
    }

    /// Effective monthly rate used for the projection (fraction, not percent)
    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    /// Number of points (total months + 1)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_months(&self) -> u32 {
        self.last().month
    }

    /// Final month
    pub fn last(&self) -> &ProjectionPoint {
        &self.points[self.points.len() - 1]
    }

    pub fn summary(&self) -> ProjectionSummary {
        let last = self.last();
        ProjectionSummary {
            total_invested: last.invested,
            total_interest: last.interest,
            final_amount: last.accumulated,
        }
    }

    /// Month indices, used as chart labels
    pub fn labels(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.month).collect()
    }

    pub fn accumulated(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.accumulated).collect()
    }

    pub fn invested(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.invested).collect()
    }

    pub fn interest(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.interest).collect()
    }

    /// Write the month table as CSV (amounts rounded to cents)
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(["Month", "Accumulated", "Invested", "Interest"])?;

        for point in &self.points {
            wtr.write_record(&[
                point.month.to_string(),
                format!("{:.2}", point.accumulated),
                format!("{:.2}", point.invested),
                format!("{:.2}", point.interest),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
