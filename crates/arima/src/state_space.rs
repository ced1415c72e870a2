//! Companion-form state-space representation of an ARMA(p,q) model.
//!
//! ```text
//! x[t+1] = T * x[t] + R * e[t]     (state transition)
//! y[t]   = x[t][0]                  (observation picks the first state)
//! ```
//!
//! with `e[t] ~ N(0, sigma2)`. The Kalman filter consumes `T`, `R`, and the
//! precomputed rank-1 product `R·Rᵀ`.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, Axis};

/// State-space matrices for an ARMA(p,q) model with state dimension
/// `r = max(p, q+1)`, minimum 1.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    t: Array2<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    /// Builds the companion form from AR (`phi`) and MA (`theta`)
    /// coefficients. Validation happens upstream; this never panics.
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let p = ar.len();
        let q = ma.len();
        let r = p.max(q + 1).max(1);

        // T: AR coefficients down the first column, ones on the
        // super-diagonal.
        let mut t = Array2::zeros((r, r));
        for (i, &phi) in ar.iter().enumerate() {
            t[[i, 0]] = phi;
        }
        for i in 0..r.saturating_sub(1) {
            t[[i, i + 1]] = 1.0;
        }

        // R = [1, theta_1, ..., theta_q, 0, ...], then RRᵀ as its outer
        // product.
        let mut r_vec = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, &theta) in ma.iter().enumerate() {
            r_vec[j + 1] = theta;
        }
        let rrt = r_vec
            .view()
            .insert_axis(Axis(1))
            .dot(&r_vec.view().insert_axis(Axis(0)));

        Self { r, t, rrt }
    }

    /// State dimension `r = max(p, q+1)`, minimum 1.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// Transition matrix `T` (r x r).
    pub(crate) fn t(&self) -> &Array2<f64> {
        &self.t
    }

    /// Precomputed `R·Rᵀ` (r x r).
    pub(crate) fn rrt(&self) -> &Array2<f64> {
        &self.rrt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ar1_dimension_and_entries() {
        let ss = StateSpace::new(&[0.6], &[]);
        assert_eq!(ss.r(), 1);
        assert_abs_diff_eq!(ss.t()[[0, 0]], 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.rrt()[[0, 0]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ma1_needs_two_states() {
        let ss = StateSpace::new(&[], &[0.8]);
        assert_eq!(ss.r(), 2);
        // T = [[0, 1], [0, 0]]
        assert_abs_diff_eq!(ss.t()[[0, 1]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.t()[[0, 0]], 0.0, epsilon = 1e-12);
        // RRᵀ = [[1, 0.8], [0.8, 0.64]]
        assert_abs_diff_eq!(ss.rrt()[[0, 1]], 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.rrt()[[1, 1]], 0.64, epsilon = 1e-12);
    }

    #[test]
    fn arma22_companion_layout() {
        let ss = StateSpace::new(&[0.5, -0.3], &[0.4, 0.2]);
        assert_eq!(ss.r(), 3);
        assert_abs_diff_eq!(ss.t()[[0, 0]], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.t()[[1, 0]], -0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.t()[[0, 1]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.t()[[1, 2]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.t()[[2, 0]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn white_noise_collapses_to_scalar() {
        let ss = StateSpace::new(&[], &[]);
        assert_eq!(ss.r(), 1);
        assert_abs_diff_eq!(ss.t()[[0, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ss.rrt()[[0, 0]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rrt_is_symmetric_rank_one() {
        let ss = StateSpace::new(&[0.7], &[0.3]);
        let rrt = ss.rrt();
        for i in 0..ss.r() {
            for j in 0..ss.r() {
                assert_abs_diff_eq!(rrt[[i, j]], rrt[[j, i]], epsilon = 1e-12);
            }
        }
        // det of a rank-1 2x2 block is 0
        let det = rrt[[0, 0]] * rrt[[1, 1]] - rrt[[0, 1]] * rrt[[1, 0]];
        assert_abs_diff_eq!(det, 0.0, epsilon = 1e-12);
    }
}
