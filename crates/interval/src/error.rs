//! Error types for the mentor-interval crate.

/// Error type for confidence-interval estimation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IntervalError {
    /// Returned when a method tag does not name one of the three
    /// recognised estimators.
    #[error(
        "unknown confidence-interval method {name:?} (expected t_distribution, \
         normal_distribution, or arima_distribution)"
    )]
    UnknownMethod {
        /// The unrecognised tag as supplied.
        name: String,
    },

    /// Returned when the t-distribution method is asked for with a window
    /// too small to leave any degrees of freedom.
    #[error("t-distribution interval needs a window of at least 2, got {window}")]
    InsufficientWindow {
        /// The offending window size.
        window: usize,
    },
}
