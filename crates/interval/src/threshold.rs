//! Probability that the next value clears a pass threshold.
//!
//! The interval is treated as a uniform probability mass; the returned
//! percentage is the share of that mass at or above the threshold.

use crate::interval::ConfidenceInterval;

/// Pass threshold applied when a caller does not supply one.
pub const DEFAULT_PASS_THRESHOLD: f64 = 0.9;

/// Percentage (0–100) of the interval's mass above `threshold`, or `None`
/// when a bound is missing (NaN or infinite).
///
/// Branches, in order:
/// - interval entirely below the threshold → 0.0
/// - interval entirely at/above the threshold → 100.0 (this also covers a
///   zero-width interval sitting on the threshold, keeping the general
///   branch free of a division by zero)
/// - otherwise `100 · (upper − max(lower, threshold)) / (upper − lower)`,
///   reached only when `upper > lower` strictly.
pub fn probability_above(interval: &ConfidenceInterval, threshold: f64) -> Option<f64> {
    if !interval.is_finite() {
        return None;
    }
    let (lower, upper) = (interval.lower(), interval.upper());
    if upper < threshold {
        return Some(0.0);
    }
    if lower >= threshold {
        return Some(100.0);
    }
    let above = upper - lower.max(threshold);
    Some(100.0 * above / (upper - lower))
}
