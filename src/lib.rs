//! Compound Interest - month-by-month savings projection and live input formatting
//!
//! This library provides:
//! - Normalization of raw field text into a projection input
//! - Monthly compounding projection (accumulated, invested, interest)
//! - Grouped-thousands formatting that keeps the cursor on the edited digit
//! - Chart feed and summary text for a rendering host
//! - Batch projection of scenario files

pub mod chart;
pub mod format;
pub mod input;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use chart::ChartData;
pub use format::{format_currency, format_live_input, LiveInput};
pub use input::{HorizonUnit, ProjectionInput, RateBasis, RawInput};
pub use projection::{project, ProjectionPoint, ProjectionSeries, ProjectionSummary};
pub use scenario::{Scenario, ScenarioError, ScenarioRunner};
