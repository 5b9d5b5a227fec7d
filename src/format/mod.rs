//! Display formatting: live grouped input, currency text, axis ticks
//!
//! All output uses the en-US convention ("," grouping, "." decimals, "$").

mod currency;
mod live;

pub use currency::{format_axis_tick, format_currency};
pub use live::{format_live_input, LiveInput};

/// Grouping separator inserted every three digits
pub const GROUP_SEPARATOR: char = ',';

/// Insert grouping separators into a run of ASCII digits ("1234567" -> "1,234,567")
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}
