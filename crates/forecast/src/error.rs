//! The pipeline's single typed failure.

use mentor_arima::ArimaError;
use mentor_interval::IntervalError;
use mentor_rolling::RollingError;

/// Error type for the forecast pipeline.
///
/// Callers pattern-match on the variant to learn which stage failed; the
/// underlying cause travels inside. Order-search failures never appear
/// here — the selector absorbs them through its fallback stages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ForecastError {
    /// The series or options violate the input contract.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Fitting the selected order to the series failed numerically.
    #[error("model fit failed: {0}")]
    ModelFit(#[from] ArimaError),

    /// Confidence-interval estimation failed (unknown method tag or a
    /// window without degrees of freedom).
    #[error("confidence interval: {0}")]
    Interval(#[from] IntervalError),
}

impl From<RollingError> for ForecastError {
    // Rolling-statistics failures are input-contract violations.
    fn from(err: RollingError) -> Self {
        ForecastError::InvalidInput {
            reason: err.to_string(),
        }
    }
}
