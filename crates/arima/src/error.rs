//! Error types for the mentor-arima crate.

/// Error type for all fallible operations in the mentor-arima crate.
///
/// Covers input validation, numerical issues, and optimization failures
/// during ARIMA model fitting. Order-search failures are not represented
/// here: the selector absorbs them via its fallback stages.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArimaError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the series is too short for the requested order,
    /// including a differencing degree at or beyond the series length.
    #[error("insufficient data for order ({p},{d},{q}): got {n} observations, need at least {min}")]
    InsufficientData {
        /// AR order requested.
        p: usize,
        /// Differencing degree requested.
        d: usize,
        /// MA order requested.
        q: usize,
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the (differenced) data has zero variance, leaving the
    /// Gaussian likelihood undefined.
    #[error("differenced data is constant (zero variance)")]
    ConstantData,

    /// Returned when the state-space covariance has no stationary solution.
    #[error("fitted model is non-stationary")]
    NonStationary,

    /// Returned when the likelihood optimization fails to converge or
    /// produces non-finite estimates.
    #[error("optimisation failed to converge")]
    OptimizationFailed,
}
