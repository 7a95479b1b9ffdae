//! # Time Ordering
//!
//! Sort keys for `"HH:MM"` time labels.

use crate::primitives::TIME_SEPARATOR;

/// Rank a time label by its hour.
///
/// Takes the text before the first `:` and parses it as an integer hour.
/// Labels whose hour does not parse rank `-1`, so they sort first.
/// Minutes are not considered.
#[must_use]
pub fn time_rank(label: &str) -> i64 {
    let hour = label.split(TIME_SEPARATOR).next().unwrap_or_default();
    hour.parse().unwrap_or(-1)
}
