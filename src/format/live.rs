//! Live formatting for money fields while the user types
//!
//! Separators appear and disappear as digits are typed, which shifts character
//! offsets. The cursor is anchored on the number of digits before it, not on
//! its character offset, so it stays next to the digit being edited.

use super::group_thousands;
use log::trace;
use serde::Serialize;

/// Formatted field text and the cursor position to restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveInput {
    pub text: String,
    /// Character offset into `text`
    pub cursor: usize,
}

/// Reformat `raw` with grouping separators and remap the cursor.
///
/// `cursor` is a character offset into `raw`; offsets past the end are
/// treated as the end. Only integers are produced: every non-digit is
/// dropped, leading zeros collapse, and a zero value yields empty text.
pub fn format_live_input(raw: &str, cursor: usize) -> LiveInput {
    let digits_before_cursor = raw
        .chars()
        .take(cursor)
        .filter(|c| c.is_ascii_digit())
        .count();

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let significant = digits.trim_start_matches('0');

    let text = if significant.is_empty() {
        String::new()
    } else {
        group_thousands(significant)
    };

    let mut new_cursor = 0;
    let mut digit_count = 0;
    for (i, c) in text.chars().enumerate() {
        if digit_count >= digits_before_cursor {
            break;
        }
        new_cursor = i + 1;
        if c.is_ascii_digit() {
            digit_count += 1;
        }
    }

    trace!("live format {:?}@{} -> {:?}@{}", raw, cursor, text, new_cursor);

    LiveInput { text, cursor: new_cursor }
}
