//! The assembled forecast result.

use mentor_arima::ArimaOrder;
use mentor_interval::ConfidenceInterval;
use serde::Serialize;

/// The outcome of one forecast request, returned to the caller and then
/// discarded — no state survives across requests.
#[derive(Clone, Debug, Serialize)]
pub struct ForecastResult {
    /// Percentage (0–100) of the interval's mass above the pass
    /// threshold; `None` when the interval was degenerate.
    probability_of_exceeding_threshold: Option<f64>,
    /// One-step-ahead point forecast of the next simulation score.
    predicted_simulation_score: f64,
    /// The ARIMA order the search settled on.
    arima_best_order: ArimaOrder,
    /// The confidence interval the probability was derived from.
    confidence_interval_range: ConfidenceInterval,
}

impl ForecastResult {
    pub(crate) fn new(
        probability_of_exceeding_threshold: Option<f64>,
        predicted_simulation_score: f64,
        arima_best_order: ArimaOrder,
        confidence_interval_range: ConfidenceInterval,
    ) -> Self {
        Self {
            probability_of_exceeding_threshold,
            predicted_simulation_score,
            arima_best_order,
            confidence_interval_range,
        }
    }

    /// Returns the pass probability, if the interval admitted one.
    pub fn probability_of_exceeding_threshold(&self) -> Option<f64> {
        self.probability_of_exceeding_threshold
    }

    /// Returns the predicted next simulation score.
    pub fn predicted_simulation_score(&self) -> f64 {
        self.predicted_simulation_score
    }

    /// Returns the selected ARIMA order.
    pub fn arima_best_order(&self) -> ArimaOrder {
        self.arima_best_order
    }

    /// Returns the confidence interval behind the probability.
    pub fn confidence_interval_range(&self) -> ConfidenceInterval {
        self.confidence_interval_range
    }
}
