//! Fitted ARIMA model results and the one-step-ahead forecast.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::order::ArimaOrder;

/// Two-sided significance level of the model's native forecast interval.
const NATIVE_ALPHA: f64 = 0.05;

/// A fitted ARIMA(p,d,q) model produced by [`ArimaOrder::fit()`].
///
/// Holds the estimated AR (`phi`) and MA (`theta`) coefficients,
/// innovation variance (`sigma2`), one-step prediction residuals,
/// log-likelihood, and the one-step-ahead predictive distribution on the
/// original (undifferenced) scale. Ephemeral: it lives inside a single
/// forecast operation and is dropped once [`ArimaFit::forecast_one()`]
/// has been extracted.
#[derive(Clone, Debug)]
pub struct ArimaFit {
    order: ArimaOrder,
    ar: Vec<f64>,
    ma: Vec<f64>,
    sigma2: f64,
    residuals: Vec<f64>,
    log_likelihood: f64,
    mean: f64,
    predicted: f64,
    forecast_var: f64,
}

impl ArimaFit {
    /// Creates a new `ArimaFit` (crate-internal constructor).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        order: ArimaOrder,
        ar: Vec<f64>,
        ma: Vec<f64>,
        sigma2: f64,
        residuals: Vec<f64>,
        log_likelihood: f64,
        mean: f64,
        predicted: f64,
        forecast_var: f64,
    ) -> Self {
        Self {
            order,
            ar,
            ma,
            sigma2,
            residuals,
            log_likelihood,
            mean,
            predicted,
            forecast_var,
        }
    }

    /// Returns the fitted `(p,d,q)` order.
    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the one-step-ahead prediction residuals on the differenced
    /// scale.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the maximised log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the mean of the differenced series the ARMA core was
    /// fitted to.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the one-step-ahead point forecast on the original scale.
    pub fn predicted(&self) -> f64 {
        self.predicted
    }

    /// Computes the Akaike Information Criterion for this fit.
    ///
    /// AIC = 2k - 2 * log_likelihood with k = p + q + 1 (coefficients
    /// plus the innovation variance). Lower is better; the order search
    /// ranks candidates by this value.
    pub fn aic(&self) -> f64 {
        let k = (self.order.p() + self.order.q() + 1) as f64;
        2.0 * k - 2.0 * self.log_likelihood
    }

    /// Extracts the one-step-ahead forecast: the point prediction plus the
    /// model's native two-sided 95% interval.
    pub fn forecast_one(&self) -> ArimaForecast {
        let z = Normal::new(0.0, 1.0)
            .expect("standard normal parameters are valid")
            .inverse_cdf(1.0 - NATIVE_ALPHA / 2.0);
        let half_width = z * self.forecast_var.sqrt();
        ArimaForecast {
            predicted: self.predicted,
            lower: self.predicted - half_width,
            upper: self.predicted + half_width,
            order: self.order,
        }
    }
}

/// One-step-ahead forecast outcome: the point prediction, the model's
/// native 95% interval, and the order that produced it.
#[derive(Clone, Copy, Debug)]
pub struct ArimaForecast {
    predicted: f64,
    lower: f64,
    upper: f64,
    order: ArimaOrder,
}

impl ArimaForecast {
    /// Returns the point forecast.
    pub fn predicted(&self) -> f64 {
        self.predicted
    }

    /// Returns the native interval's lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the native interval's upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the order that produced this forecast.
    pub fn order(&self) -> ArimaOrder {
        self.order
    }
}
