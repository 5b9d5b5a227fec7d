//! Lenient numeric parsing for raw field text
//!
//! Each parser reads the longest numeric prefix of the text and ignores the
//! rest, so "12abc" reads as 12. No prefix, or a non-finite result, reads as 0.

/// Parse a money field, ignoring grouping commas ("1,234.5" -> 1234.5)
pub fn parse_money(text: &str) -> f64 {
    let stripped: String = text.chars().filter(|c| *c != ',').collect();
    leading_decimal(&stripped).unwrap_or(0.0)
}

/// Parse a rate field (raw decimal text, no grouping)
pub fn parse_rate(text: &str) -> f64 {
    leading_decimal(text).unwrap_or(0.0)
}

/// Parse a horizon field as a whole count. Negative counts read as 0.
pub fn parse_horizon(text: &str) -> u32 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = bytes[start..].iter().take_while(|b| b.is_ascii_digit());
    let value = digits.fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });

    if negative { 0 } else { value }
}

fn leading_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // Exponent only counts when it has at least one digit
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
