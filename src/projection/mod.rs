//! Projection engine for lump sum plus monthly contribution growth

mod engine;
mod series;

pub use engine::{monthly_rate, project, total_months};
pub use series::{ProjectionPoint, ProjectionSeries, ProjectionSummary};

// ============================================================================
// Rate Conversion
// ============================================================================
// Annual rates are treated as annual *effective* rates. The monthly rate is
// the one that compounds to the annual rate over 12 months, so 12% annual is
// about 0.9489% monthly, not 1%.

/// Number of compounding periods per year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest projection in months (500 years); longer horizons are capped
pub const MAX_HORIZON_MONTHS: u32 = 6_000;
