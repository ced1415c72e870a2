//! Kalman filter for ARMA likelihood evaluation and one-step prediction.
//!
//! A univariate filter over the companion-form state space from
//! [`crate::state_space`], evaluating the exact Gaussian log-likelihood by
//! prediction-error decomposition with the innovation variance `sigma2`
//! concentrated out. The terminal predicted state doubles as the
//! one-step-ahead forecast and its (scaled) variance.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

use crate::error::ArimaError;
use crate::linalg;
use crate::state_space::StateSpace;

/// Output of a full filtering pass over the data.
pub(crate) struct KalmanPass {
    /// Concentrated innovation-variance estimate.
    pub(crate) sigma2: f64,
    /// Maximised Gaussian log-likelihood.
    pub(crate) log_likelihood: f64,
    /// One-step-ahead prediction errors, one per observation.
    pub(crate) residuals: Vec<f64>,
    /// Predicted mean of the next observation (centred scale).
    pub(crate) next_mean: f64,
    /// Predicted variance of the next observation, as a multiple of
    /// `sigma2`.
    pub(crate) next_var_scale: f64,
}

/// Stationary state covariance: the solution of `P = T P Tᵀ + R Rᵀ`
/// (unit innovation variance), obtained by solving the vectorized
/// `(I - T ⊗ T) vec(P) = vec(R Rᵀ)` system.
fn stationary_cov(ss: &StateSpace) -> Result<Array2<f64>, ArimaError> {
    let r = ss.r();
    let t = ss.t();
    let rrt = ss.rrt();
    let dim = r * r;

    let mut a = Array2::zeros((dim, dim));
    let mut b = Array1::zeros(dim);
    for i in 0..r {
        for j in 0..r {
            let row = i * r + j;
            for k in 0..r {
                for l in 0..r {
                    a[[row, k * r + l]] -= t[[i, k]] * t[[j, l]];
                }
            }
            a[[row, row]] += 1.0;
            b[row] = rrt[[i, j]];
        }
    }

    let x = linalg::solve(a, b).ok_or(ArimaError::NonStationary)?;
    let mut p = Array2::zeros((r, r));
    for i in 0..r {
        for j in 0..r {
            p[[i, j]] = x[i * r + j];
        }
    }
    // The observed component's prior variance must be a positive finite
    // number for the first filter step to be well-defined.
    if !p[[0, 0]].is_finite() || p[[0, 0]] <= 0.0 {
        return Err(ArimaError::NonStationary);
    }
    Ok(p)
}

/// Runs the filter over `data`, returning likelihood terms, residuals, and
/// the one-step-ahead predictive state.
pub(crate) fn filter(ss: &StateSpace, data: &[f64]) -> Result<KalmanPass, ArimaError> {
    let r = ss.r();
    let t = ss.t();
    let rrt = ss.rrt();

    let mut a: Array1<f64> = Array1::zeros(r);
    let mut p = stationary_cov(ss)?;

    let mut residuals = Vec::with_capacity(data.len());
    let mut sum_sq = 0.0;
    let mut sum_log_f = 0.0;

    for &y in data {
        // Observation is the first state component, so the innovation
        // variance (scaled by sigma2) is just P[0,0].
        let f = p[[0, 0]];
        if !f.is_finite() || f <= 0.0 {
            return Err(ArimaError::OptimizationFailed);
        }
        let v = y - a[0];
        residuals.push(v);
        sum_sq += v * v / f;
        sum_log_f += f.ln();

        // Gain numerator: T * (first column of P).
        let tpz = t.dot(&p.column(0).to_owned());
        a = t.dot(&a) + &tpz * (v / f);

        let mut p_next = t.dot(&p).dot(&t.t()) + rrt;
        for i in 0..r {
            for j in 0..r {
                p_next[[i, j]] -= tpz[i] * tpz[j] / f;
            }
        }
        p = p_next;
    }

    let n = data.len() as f64;
    let sigma2 = sum_sq / n;
    if !sigma2.is_finite() || sigma2 <= 0.0 {
        return Err(ArimaError::OptimizationFailed);
    }
    let log_likelihood =
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + 1.0 + sigma2.ln()) - 0.5 * sum_log_f;

    Ok(KalmanPass {
        sigma2,
        log_likelihood,
        residuals,
        next_mean: a[0],
        next_var_scale: p[[0, 0]],
    })
}

/// Concentrated log-likelihood only — what the optimizer's cost function
/// evaluates at every candidate parameter vector.
pub(crate) fn concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArimaError> {
    filter(ss, data).map(|pass| pass.log_likelihood)
}
