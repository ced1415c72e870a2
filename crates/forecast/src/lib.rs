//! # mentor-forecast
//!
//! The end-to-end forecasting pipeline for one exam-simulation score
//! series:
//!
//! ```text
//! rolling statistics -> order selection -> ARIMA fit + one-step forecast
//!     -> confidence interval (requested method) -> pass probability
//! ```
//!
//! One invocation of [`forecast()`] processes one series synchronously,
//! with no shared state between invocations. Failures from any stage are
//! converted into a single typed [`ForecastError`]; a partial result never
//! escapes.
//!
//! ```
//! use mentor_forecast::{ForecastOptions, forecast};
//!
//! let scores = [0.9, 0.88, 0.75, 0.78, 0.74, 0.69];
//! let result = forecast(&scores, &ForecastOptions::new())?;
//! assert!(result.predicted_simulation_score().is_finite());
//! # Ok::<(), mentor_forecast::ForecastError>(())
//! ```

mod error;
mod options;
mod pipeline;
mod result;

pub use error::ForecastError;
pub use options::ForecastOptions;
pub use pipeline::{forecast, forecast_with_method_tag};
pub use result::ForecastResult;
