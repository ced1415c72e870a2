//! The three confidence-interval estimators.
//!
//! Each formula is an independently testable pure function; [`estimate()`]
//! dispatches on the method tag and computes only the interval that was
//! asked for.

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::IntervalError;
use crate::interval::ConfidenceInterval;
use crate::method::CiMethod;

/// Confidence level behind the t-distribution critical value.
const CONFIDENCE_LEVEL: f64 = 0.95;

/// Half-width multiplier of the normal-distribution method. A deliberate
/// round heuristic for a ~95% interval, not the calibrated 1.96.
const NORMAL_MULTIPLIER: f64 = 2.0;

/// Computes the interval for the requested method.
///
/// `native` carries the model's own 95% forecast bounds,
/// `last_rolling_std` the final rolling standard deviation, and `window`
/// the rolling window size (consumed by the t method only).
///
/// # Errors
///
/// [`IntervalError::InsufficientWindow`] when the t method is requested
/// with `window < 2`.
pub fn estimate(
    method: CiMethod,
    predicted: f64,
    native: (f64, f64),
    last_rolling_std: f64,
    window: usize,
) -> Result<ConfidenceInterval, IntervalError> {
    match method {
        CiMethod::ArimaDistribution => Ok(arima_interval(native)),
        CiMethod::NormalDistribution => Ok(normal_interval(predicted, last_rolling_std)),
        CiMethod::TDistribution => t_interval(predicted, last_rolling_std, window),
    }
}

/// The model's native forecast interval, passed through unchanged apart
/// from bound-order normalisation.
pub fn arima_interval(native: (f64, f64)) -> ConfidenceInterval {
    ConfidenceInterval::new(native.0, native.1)
}

/// `predicted ± 2 · std` — the rough normal-distribution interval.
pub fn normal_interval(predicted: f64, std: f64) -> ConfidenceInterval {
    let half_width = NORMAL_MULTIPLIER * std;
    ConfidenceInterval::new(predicted - half_width, predicted + half_width)
}

/// Standard-error interval under a Student-t with `window - 1` degrees of
/// freedom: `predicted ± t(0.975, w−1) · std / √w`.
///
/// # Errors
///
/// [`IntervalError::InsufficientWindow`] when `window < 2` (no degrees of
/// freedom left).
pub fn t_interval(
    predicted: f64,
    std: f64,
    window: usize,
) -> Result<ConfidenceInterval, IntervalError> {
    if window < 2 {
        return Err(IntervalError::InsufficientWindow { window });
    }
    let df = (window - 1) as f64;
    let alpha = 1.0 - CONFIDENCE_LEVEL;
    let t_critical = StudentsT::new(0.0, 1.0, df)
        .expect("degrees of freedom are at least 1")
        .inverse_cdf(1.0 - alpha / 2.0);
    let standard_error = std / (window as f64).sqrt();
    let half_width = t_critical * standard_error;
    Ok(ConfidenceInterval::new(
        predicted - half_width,
        predicted + half_width,
    ))
}
