//! Unconstrained parametrization of stationary/invertible coefficients.
//!
//! The optimizer works in an unconstrained space; these helpers map its
//! parameters onto valid AR/MA polynomial coefficients via partial
//! autocorrelations (Jones 1980, Monahan 1984).
//!
//! **Not part of the public API.**

/// Maps unconstrained parameters to stationary/invertible coefficients.
///
/// Each parameter is squashed into (-1, 1) with `tanh`, giving a valid
/// partial autocorrelation sequence; the Levinson-Durbin recursion then
/// expands that sequence into polynomial coefficients. Applied to the AR
/// block this enforces stationarity, applied to the MA block it enforces
/// invertibility.
pub(crate) fn unconstrained_to_coeffs(raw: &[f64]) -> Vec<f64> {
    let k = raw.len();
    if k == 0 {
        return Vec::new();
    }

    let pacf: Vec<f64> = raw.iter().map(|a| a.tanh()).collect();

    let mut phi = vec![0.0; k];
    let mut prev = vec![0.0; k];
    phi[0] = pacf[0];

    for m in 1..k {
        prev.copy_from_slice(&phi);
        phi[m] = pacf[m];
        for j in 0..m {
            phi[j] = prev[j] - pacf[m] * prev[m - 1 - j];
        }
    }

    phi
}
