//! Nelder-Mead maximum-likelihood fitting of an ARIMA(p,d,q) model.
//!
//! Wraps the `argmin` crate to minimize the negative concentrated
//! log-likelihood over unconstrained PACF parameters, after differencing
//! and centring the data.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;

use crate::difference::difference_with_tails;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::kalman;
use crate::order::ArimaOrder;
use crate::params;
use crate::state_space::StateSpace;

/// Fits an ARIMA(p,d,q) model to data via exact MLE.
///
/// Pipeline:
/// 1. Validate data against the order.
/// 2. Difference `d` times, recording the integration tails.
/// 3. Centre (subtract the differenced-series mean).
/// 4. Optimize the concentrated log-likelihood via Nelder-Mead
///    (skipped for the parameterless (0,0) ARMA core).
/// 5. Run a full Kalman pass for sigma2, residuals, log-likelihood, and
///    the one-step-ahead predictive state; map the prediction back onto
///    the original scale.
pub(crate) fn fit_arima(order: ArimaOrder, data: &[f64]) -> Result<ArimaFit, ArimaError> {
    let (p, d, q) = (order.p(), order.d(), order.q());

    // 1. Validate
    if data.is_empty() {
        return Err(ArimaError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }
    // The differenced series must keep at least max(p, q, 1) + 1 points.
    let min_len = d + p.max(q).max(1) + 1;
    if data.len() < min_len {
        return Err(ArimaError::InsufficientData {
            p,
            d,
            q,
            n: data.len(),
            min: min_len,
        });
    }

    // 2. Difference
    let (diffed, tails) = difference_with_tails(data, d);
    let spread = diffed.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        - diffed.iter().cloned().fold(f64::INFINITY, f64::min);
    if spread.abs() < f64::EPSILON {
        return Err(ArimaError::ConstantData);
    }

    // 3. Centre
    let n = diffed.len() as f64;
    let mean = diffed.iter().sum::<f64>() / n;
    let centred: Vec<f64> = diffed.iter().map(|x| x - mean).collect();

    // 4. Optimize ARMA coefficients (none to optimize for (0,0))
    let (ar, ma) = if p == 0 && q == 0 {
        (Vec::new(), Vec::new())
    } else {
        let dim = p + q;
        let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
        simplex.push(vec![0.0; dim]);
        for i in 0..dim {
            let mut vertex = vec![0.0; dim];
            vertex[i] = 0.5;
            simplex.push(vertex);
        }

        let cost = ArimaCost { data: &centred, p };
        let solver = NelderMead::new(simplex)
            .with_sd_tolerance(1e-8)
            .map_err(|_| ArimaError::OptimizationFailed)?;
        let result = Executor::new(cost, solver)
            .configure(|state| state.max_iters(1000))
            .run()
            .map_err(|_| ArimaError::OptimizationFailed)?;

        let best = result
            .state()
            .best_param
            .as_ref()
            .ok_or(ArimaError::OptimizationFailed)?;
        let (alpha, beta) = best.split_at(p);
        (
            params::unconstrained_to_coeffs(alpha),
            params::unconstrained_to_coeffs(beta),
        )
    };

    // 5. Full Kalman pass and forecast assembly
    let ss = StateSpace::new(&ar, &ma);
    let pass = kalman::filter(&ss, &centred)?;

    // Undo centring, then undo differencing via the recorded tails.
    let predicted = pass.next_mean + mean + tails.iter().sum::<f64>();
    let forecast_var = pass.sigma2 * pass.next_var_scale;
    if !predicted.is_finite() || !forecast_var.is_finite() || forecast_var < 0.0 {
        return Err(ArimaError::OptimizationFailed);
    }

    Ok(ArimaFit::new(
        order,
        ar,
        ma,
        pass.sigma2,
        pass.residuals,
        pass.log_likelihood,
        mean,
        predicted,
        forecast_var,
    ))
}

/// Cost function for argmin: negative concentrated log-likelihood.
struct ArimaCost<'a> {
    data: &'a [f64],
    p: usize,
}

impl CostFunction for ArimaCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, raw: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (alpha, beta) = raw.split_at(self.p);
        let ar = params::unconstrained_to_coeffs(alpha);
        let ma = params::unconstrained_to_coeffs(beta);
        let ss = StateSpace::new(&ar, &ma);

        match kalman::concentrated_loglik(&ss, self.data) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(f64::MAX),
        }
    }
}
