//! Small dense linear solves for the Kalman filter initialization.
//!
//! The stationary covariance equation vectorizes to a system of dimension
//! `r*r` with `r <= max_order + 1`, small enough that a pivoted Gaussian
//! elimination beats pulling in a LAPACK binding.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

/// Pivot magnitudes below this are treated as singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Solves `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Returns `None` when the matrix is singular (or numerically close to it).
/// Consumes its arguments; callers pass clones if they need them again.
pub(crate) fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Option<Array1<f64>> {
    let n = b.len();
    debug_assert_eq!(a.nrows(), n);
    debug_assert_eq!(a.ncols(), n);

    // Forward elimination.
    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| {
                a[[i, col]]
                    .abs()
                    .partial_cmp(&a[[j, col]].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("column range is non-empty");
        if a[[pivot_row, col]].abs() < PIVOT_TOLERANCE {
            return None;
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap([pivot_row, k], [col, k]);
            }
            b.swap(pivot_row, col);
        }
        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }

    if x.iter().all(|v| v.is_finite()) { Some(x) } else { None }
}
