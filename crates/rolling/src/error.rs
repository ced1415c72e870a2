//! Error types for the mentor-rolling crate.

/// Error type for rolling-statistics computation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RollingError {
    /// Returned when the input series is empty.
    #[error("score series is empty")]
    EmptySeries,

    /// Returned when the input series contains a NaN or infinite value.
    #[error("score series contains a non-finite value at index {index}")]
    NonFiniteScore {
        /// Index of the first offending value.
        index: usize,
    },

    /// Returned when the window size is zero or exceeds the series length.
    #[error("invalid window size {window} for series of length {n}")]
    InvalidWindow {
        /// Requested window size.
        window: usize,
        /// Series length.
        n: usize,
    },
}
