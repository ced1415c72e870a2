//! # mentor-arima
//!
//! ARIMA(p,d,q) model fitting and one-step-ahead forecasting via
//! state-space maximum likelihood (Kalman filter), plus automatic order
//! selection with a staged fallback policy.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     S["select_order(&data, &config)"] -->|"staged search"| A["ArimaOrder"]
//!     A -->|".fit(&data)?"| B["ArimaFit"]
//!     B --> C[".forecast_one() — point forecast + native 95% interval"]
//!     B --> D[".aic() — Akaike Information Criterion"]
//! ```
//!
//! Fitting differences the series `d` times, centres it, and estimates the
//! ARMA(p,q) coefficients by exact Gaussian maximum likelihood over an
//! unconstrained PACF parametrization. The one-step-ahead forecast and its
//! variance fall out of the terminal Kalman state; undoing the differencing
//! puts the prediction back on the original scale.
//!
//! ## Order selection
//!
//! [`select_order()`] never fails: a stepwise search is tried first, an
//! exhaustive grid second, and a fixed default order is the terminal
//! fallback. See the function documentation for the exact policy.

mod difference;
mod error;
mod fit;
mod order;
mod selection;

pub(crate) mod kalman;
pub(crate) mod linalg;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod state_space;

pub use error::ArimaError;
pub use fit::{ArimaFit, ArimaForecast};
pub use order::ArimaOrder;
pub use selection::{SelectionConfig, select_order};
