//! Per-request forecast options.

use mentor_arima::SelectionConfig;
use mentor_interval::{CiMethod, threshold::DEFAULT_PASS_THRESHOLD};

use crate::error::ForecastError;

/// Options for one forecast request.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use mentor_forecast::ForecastOptions;
/// use mentor_interval::CiMethod;
///
/// let options = ForecastOptions::new()
///     .with_window(10)
///     .with_method(CiMethod::ArimaDistribution);
/// assert_eq!(options.window(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct ForecastOptions {
    window: usize,
    method: CiMethod,
    threshold: f64,
    selection: SelectionConfig,
}

impl ForecastOptions {
    /// Creates options with defaults: `window = 5`,
    /// `method = t_distribution`, `threshold = 0.9`, and the default
    /// [`SelectionConfig`].
    pub fn new() -> Self {
        Self {
            window: 5,
            method: CiMethod::TDistribution,
            threshold: DEFAULT_PASS_THRESHOLD,
            selection: SelectionConfig::new(),
        }
    }

    /// Sets the rolling-window size.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the confidence-interval method.
    pub fn with_method(mut self, method: CiMethod) -> Self {
        self.method = method;
        self
    }

    /// Sets the pass threshold the probability is measured against.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the order-search bounds.
    pub fn with_selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    /// Returns the rolling-window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the confidence-interval method.
    pub fn method(&self) -> CiMethod {
        self.method
    }

    /// Returns the pass threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the order-search bounds.
    pub fn selection(&self) -> &SelectionConfig {
        &self.selection
    }

    /// Validates the options independently of any series.
    ///
    /// Checks that the window is positive, the threshold is finite, and
    /// the t-distribution method has at least one degree of freedom
    /// (`window >= 2`) — rejected here, before any model fitting.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.window == 0 {
            return Err(ForecastError::InvalidInput {
                reason: "window size must be positive".to_string(),
            });
        }
        if !self.threshold.is_finite() {
            return Err(ForecastError::InvalidInput {
                reason: format!("threshold must be finite, got {}", self.threshold),
            });
        }
        if self.method == CiMethod::TDistribution && self.window < 2 {
            return Err(mentor_interval::IntervalError::InsufficientWindow {
                window: self.window,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ForecastOptions::new();
        assert_eq!(options.window(), 5);
        assert_eq!(options.method(), CiMethod::TDistribution);
        assert_eq!(options.threshold(), 0.9);
        assert_eq!(options.selection().max_p(), 5);
    }

    #[test]
    fn builder_chaining() {
        let options = ForecastOptions::new()
            .with_window(10)
            .with_method(CiMethod::NormalDistribution)
            .with_threshold(0.75)
            .with_selection(SelectionConfig::new().with_max_p(2));
        assert_eq!(options.window(), 10);
        assert_eq!(options.method(), CiMethod::NormalDistribution);
        assert_eq!(options.threshold(), 0.75);
        assert_eq!(options.selection().max_p(), 2);
    }

    #[test]
    fn validate_ok() {
        assert!(ForecastOptions::new().validate().is_ok());
    }

    #[test]
    fn validate_zero_window() {
        let err = ForecastOptions::new().with_window(0).validate().unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput { .. }));
    }

    #[test]
    fn validate_non_finite_threshold() {
        let err = ForecastOptions::new()
            .with_threshold(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput { .. }));
    }

    #[test]
    fn validate_t_method_needs_two_point_window() {
        let err = ForecastOptions::new().with_window(1).validate().unwrap_err();
        assert!(matches!(err, ForecastError::Interval(_)));

        // The other methods accept a single-point window.
        assert!(
            ForecastOptions::new()
                .with_window(1)
                .with_method(CiMethod::ArimaDistribution)
                .validate()
                .is_ok()
        );
    }
}
