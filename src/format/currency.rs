//! Currency text for summary labels, tooltips, and chart axis ticks

use super::group_thousands;

/// Format as US dollars with two decimals ("$1,234.56", "-$12.30").
/// Non-finite values render as "$0.00".
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let body = format!("${}.{}", group_thousands(whole), cents);

    // Values that round to zero lose their sign
    if value < 0.0 && fixed != "0.00" {
        format!("-{}", body)
    } else {
        body
    }
}

/// Compact label for the value axis ("$1.5M", "$250K", "$900")
pub fn format_axis_tick(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.0}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${}", sign, abs_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(2384.64979), "$2,384.65");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-12.3), "-$12.30");
        assert_eq!(format_currency(-4500.0), "-$4,500.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(format_axis_tick(0.0), "$0");
        assert_eq!(format_axis_tick(500.0), "$500");
        assert_eq!(format_axis_tick(1_000.0), "$1K");
        assert_eq!(format_axis_tick(45_000.0), "$45K");
        assert_eq!(format_axis_tick(1_500_000.0), "$1.5M");
        assert_eq!(format_axis_tick(-20_000.0), "-$20K");
    }
}
