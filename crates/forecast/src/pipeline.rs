//! The orchestrated forecast pipeline.

use tracing::debug;

use mentor_arima::select_order;
use mentor_interval::{CiMethod, estimate, threshold::probability_above};
use mentor_rolling::RollingStats;

use crate::error::ForecastError;
use crate::options::ForecastOptions;
use crate::result::ForecastResult;

/// Runs the full pipeline over one score series.
///
/// Stages run strictly in sequence: rolling statistics, order selection,
/// model fit + one-step forecast, the requested confidence interval, and
/// the pass probability. Input is validated first even though the caller
/// is expected to have validated it already; any stage failure is
/// returned as a single [`ForecastError`] and no partial result escapes.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ForecastError::InvalidInput`] | series/window/threshold contract violated |
/// | [`ForecastError::ModelFit`] | fitting the selected order failed |
/// | [`ForecastError::Interval`] | interval estimation failed |
#[tracing::instrument(skip(scores, options), fields(n = scores.len(), window = options.window(), method = %options.method()))]
pub fn forecast(scores: &[f64], options: &ForecastOptions) -> Result<ForecastResult, ForecastError> {
    options.validate()?;
    validate_scores(scores, options.window())?;

    let stats = RollingStats::compute(scores, options.window())?;
    debug!(last_std = stats.last_std(), "rolling statistics computed");

    let order = select_order(scores, options.selection());
    debug!(%order, "order selected");

    let fit = order.fit(scores)?;
    let outcome = fit.forecast_one();
    debug!(predicted = outcome.predicted(), "one-step forecast produced");

    let interval = estimate(
        options.method(),
        outcome.predicted(),
        (outcome.lower(), outcome.upper()),
        stats.last_std(),
        options.window(),
    )?;

    let probability = probability_above(&interval, options.threshold());

    Ok(ForecastResult::new(
        probability,
        outcome.predicted(),
        outcome.order(),
        interval,
    ))
}

/// The wire-facing entry point: parses the method tag before anything
/// else runs, so an unknown tag fails without a single model fit.
pub fn forecast_with_method_tag(
    scores: &[f64],
    window: usize,
    method_tag: &str,
) -> Result<ForecastResult, ForecastError> {
    let method: CiMethod = method_tag.parse()?;
    let options = ForecastOptions::new().with_window(window).with_method(method);
    forecast(scores, &options)
}

/// Fail-fast validation of the series against the input contract. Runs
/// before the order selector is ever invoked.
fn validate_scores(scores: &[f64], window: usize) -> Result<(), ForecastError> {
    if scores.len() < 2 {
        return Err(ForecastError::InvalidInput {
            reason: format!("need at least 2 scores, got {}", scores.len()),
        });
    }
    for (i, &score) in scores.iter().enumerate() {
        if !score.is_finite() {
            return Err(ForecastError::InvalidInput {
                reason: format!("score at index {i} is not finite"),
            });
        }
        if !(0.0..=1.0).contains(&score) {
            return Err(ForecastError::InvalidInput {
                reason: format!("score at index {i} ({score}) is outside [0, 1]"),
            });
        }
    }
    if window > scores.len() {
        return Err(ForecastError::InvalidInput {
            reason: format!(
                "window size {window} exceeds series length {}",
                scores.len()
            ),
        });
    }
    Ok(())
}
