//! Monthly compounding recurrence

use super::series::{ProjectionPoint, ProjectionSeries};
use super::{MAX_HORIZON_MONTHS, MONTHS_PER_YEAR};
use crate::input::{HorizonUnit, ProjectionInput, RateBasis};
use log::debug;

/// Effective monthly rate (as a fraction) for a rate in percentage points
pub fn monthly_rate(nominal_rate: f64, basis: RateBasis) -> f64 {
    match basis {
        RateBasis::Annual => {
            (1.0 + nominal_rate / 100.0).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
        }
        RateBasis::Monthly => nominal_rate / 100.0,
    }
}

/// Horizon converted to months, capped at `MAX_HORIZON_MONTHS`
pub fn total_months(horizon: u32, unit: HorizonUnit) -> u32 {
    let months = match unit {
        HorizonUnit::Years => horizon.saturating_mul(MONTHS_PER_YEAR),
        HorizonUnit::Months => horizon,
    };
    months.min(MAX_HORIZON_MONTHS)
}

/// Project month 0 through the end of the horizon.
///
/// Each month applies growth to the running balance first, then adds the
/// contribution (ordinary annuity timing):
///
/// ```text
/// accumulated(0) = initial
/// accumulated(m) = accumulated(m-1) * (1 + r) + contribution
/// invested(m)    = initial + contribution * m
/// interest(m)    = accumulated(m) - invested(m)
/// ```
pub fn project(input: &ProjectionInput) -> ProjectionSeries {
    let rate = monthly_rate(input.nominal_rate, input.rate_basis);
    let months = total_months(input.horizon, input.horizon_unit);

    debug!(
        "Projecting {} months at monthly rate {:.8} (initial={}, contribution={})",
        months, rate, input.initial_value, input.monthly_contribution
    );

    let mut points = Vec::with_capacity(months as usize + 1);
    let mut accumulated = input.initial_value;

    for month in 0..=months {
        if month > 0 {
            accumulated = accumulated * (1.0 + rate) + input.monthly_contribution;
        }
        let invested = input.initial_value + input.monthly_contribution * month as f64;

        points.push(ProjectionPoint {
            month,
            accumulated,
            invested,
            interest: accumulated - invested,
        });
    }

    ProjectionSeries::new(rate, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawInput;
    use approx::assert_relative_eq;

    fn months(initial: f64, monthly: f64, rate: f64, basis: RateBasis, n: u32) -> ProjectionInput {
        ProjectionInput {
            initial_value: initial,
            monthly_contribution: monthly,
            nominal_rate: rate,
            rate_basis: basis,
            horizon: n,
            horizon_unit: HorizonUnit::Months,
        }
    }

    fn years(initial: f64, monthly: f64, rate: f64, basis: RateBasis, n: u32) -> ProjectionInput {
        ProjectionInput {
            horizon_unit: HorizonUnit::Years,
            ..months(initial, monthly, rate, basis, n)
        }
    }

    #[test]
    fn test_annual_rate_is_effective() {
        // 12% annual is NOT 1% monthly
        let r = monthly_rate(12.0, RateBasis::Annual);
        assert!((r - 0.0094888).abs() < 1e-6);
        assert_relative_eq!((1.0 + r).powi(12), 1.12, epsilon = 1e-12);

        assert_eq!(monthly_rate(1.0, RateBasis::Monthly), 0.01);
        assert_eq!(monthly_rate(0.0, RateBasis::Annual), 0.0);
    }

    #[test]
    fn test_total_months() {
        assert_eq!(total_months(12, HorizonUnit::Months), 12);
        assert_eq!(total_months(30, HorizonUnit::Years), 360);
        assert_eq!(total_months(0, HorizonUnit::Years), 0);
        assert_eq!(total_months(500, HorizonUnit::Years), MAX_HORIZON_MONTHS);
        assert_eq!(total_months(u32::MAX, HorizonUnit::Years), MAX_HORIZON_MONTHS);
        assert_eq!(total_months(u32::MAX, HorizonUnit::Months), MAX_HORIZON_MONTHS);
    }

    #[test]
    fn test_oversized_horizon_is_capped() {
        let input = RawInput {
            initial_value: "1,000".to_string(),
            horizon: "99999999999".to_string(),
            horizon_unit: "months".to_string(),
            ..Default::default()
        }
        .normalize();

        let series = project(&input);
        assert_eq!(series.len(), MAX_HORIZON_MONTHS as usize + 1);
        assert_eq!(series.total_months(), MAX_HORIZON_MONTHS);
        assert_eq!(series.last().accumulated, 1000.0);
    }

    #[test]
    fn test_one_year_scenario() {
        let series = project(&months(1000.0, 100.0, 12.0, RateBasis::Annual, 12));

        assert_eq!(series.len(), 13);
        let last = series.last();
        assert_eq!(last.month, 12);
        assert_eq!(last.invested, 2200.0);
        // 1000 * 1.12 + 100 * (1.12 - 1) / r
        assert!((last.accumulated - 2384.65).abs() < 0.05);
        assert!((last.interest - 184.65).abs() < 0.05);
    }

    #[test]
    fn test_point_count_and_months() {
        let series = project(&years(500.0, 50.0, 4.0, RateBasis::Annual, 3));

        assert_eq!(series.len(), 37);
        for (i, point) in series.points().iter().enumerate() {
            assert_eq!(point.month, i as u32);
            assert_eq!(point.interest, point.accumulated - point.invested);
        }
    }

    #[test]
    fn test_month_zero_is_initial_state() {
        let series = project(&years(2500.0, 300.0, 8.0, RateBasis::Annual, 5));
        let first = &series.points()[0];

        assert_eq!(first.month, 0);
        assert_eq!(first.accumulated, 2500.0);
        assert_eq!(first.invested, 2500.0);
        assert_eq!(first.interest, 0.0);
    }

    #[test]
    fn test_zero_horizon_single_point() {
        let series = project(&months(1000.0, 100.0, 5.0, RateBasis::Annual, 0));

        assert_eq!(series.len(), 1);
        assert_eq!(series.last().accumulated, 1000.0);
        assert_eq!(series.total_months(), 0);
    }

    #[test]
    fn test_contribution_added_after_growth() {
        // 1% monthly, first month: 1000 * 1.01 + 100 (not (1000 + 100) * 1.01)
        let series = project(&months(1000.0, 100.0, 1.0, RateBasis::Monthly, 1));
        assert_relative_eq!(series.last().accumulated, 1110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let series = project(&years(1000.0, 100.0, 0.0, RateBasis::Annual, 2));

        for point in series.points() {
            assert_eq!(point.accumulated, point.invested);
            assert_eq!(point.interest, 0.0);
        }
    }

    #[test]
    fn test_accumulated_non_decreasing() {
        let series = project(&years(100.0, 25.0, 6.5, RateBasis::Annual, 40));

        for pair in series.points().windows(2) {
            assert!(pair[1].accumulated >= pair[0].accumulated);
        }
    }

    #[test]
    fn test_years_equal_months() {
        let by_year = project(&years(1000.0, 100.0, 12.0, RateBasis::Annual, 1));
        let by_month = project(&months(1000.0, 100.0, 12.0, RateBasis::Annual, 12));

        assert_eq!(by_year.points(), by_month.points());
    }

    #[test]
    fn test_rate_basis_equivalence() {
        let annual = 7.0;
        let monthly_pct = monthly_rate(annual, RateBasis::Annual) * 100.0;

        let a = project(&years(5000.0, 200.0, annual, RateBasis::Annual, 10));
        let m = project(&years(5000.0, 200.0, monthly_pct, RateBasis::Monthly, 10));

        assert_eq!(a.len(), m.len());
        for (pa, pm) in a.points().iter().zip(m.points()) {
            assert_eq!(pa.month, pm.month);
            assert_relative_eq!(pa.accumulated, pm.accumulated, max_relative = 1e-12);
            assert_eq!(pa.invested, pm.invested);
            assert_relative_eq!(pa.interest, pm.interest, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_ten_year_monthly_rate() {
        // 0.5% monthly, 250/month for 120 months
        let series = project(&years(1000.0, 250.0, 0.5, RateBasis::Monthly, 10));
        let last = series.last();

        assert!((last.accumulated - 42789.23).abs() < 0.01);
        assert_eq!(last.invested, 31_000.0);
    }
}
