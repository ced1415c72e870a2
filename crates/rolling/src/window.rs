//! Rolling-window statistics over a score series.

use crate::error::RollingError;
use crate::stats;

/// Rolling statistics derived from one score series and a window size.
///
/// Four parallel sequences, each the same length as the input series:
/// mean, sample standard deviation, momentum (first difference), and
/// z-score. Computed once by [`RollingStats::compute()`] and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct RollingStats {
    mean: Vec<f64>,
    std: Vec<f64>,
    momentum: Vec<f64>,
    z_score: Vec<f64>,
}

impl RollingStats {
    /// Computes rolling statistics for `scores` with the given trailing
    /// window size.
    ///
    /// Position `i` uses the trailing `min(i + 1, window)` values, so the
    /// leading edge is computed over a partial window rather than left
    /// undefined. Momentum at position 0 is 0.0 (no prior value), and the
    /// z-score is 0.0 wherever the window standard deviation is 0.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`RollingError::EmptySeries`] | `scores` is empty |
    /// | [`RollingError::NonFiniteScore`] | any score is NaN or infinite |
    /// | [`RollingError::InvalidWindow`] | `window == 0` or `window > scores.len()` |
    pub fn compute(scores: &[f64], window: usize) -> Result<Self, RollingError> {
        if scores.is_empty() {
            return Err(RollingError::EmptySeries);
        }
        if let Some(index) = scores.iter().position(|x| !x.is_finite()) {
            return Err(RollingError::NonFiniteScore { index });
        }
        let n = scores.len();
        if window == 0 || window > n {
            return Err(RollingError::InvalidWindow { window, n });
        }

        let mut mean = Vec::with_capacity(n);
        let mut std = Vec::with_capacity(n);
        let mut momentum = Vec::with_capacity(n);
        let mut z_score = Vec::with_capacity(n);

        for i in 0..n {
            let start = (i + 1).saturating_sub(window);
            let trailing = &scores[start..=i];

            let m = stats::mean(trailing);
            let s = stats::sd(trailing);

            mean.push(m);
            std.push(s);
            momentum.push(if i == 0 { 0.0 } else { scores[i] - scores[i - 1] });
            z_score.push(if s == 0.0 { 0.0 } else { (scores[i] - m) / s });
        }

        Ok(Self {
            mean,
            std,
            momentum,
            z_score,
        })
    }

    /// Rolling means, one per input position.
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Rolling sample standard deviations, one per input position.
    pub fn std(&self) -> &[f64] {
        &self.std
    }

    /// First differences (`score[i] - score[i-1]`), 0.0 at position 0.
    pub fn momentum(&self) -> &[f64] {
        &self.momentum
    }

    /// Z-scores against the rolling mean/std, 0.0 where std is 0.
    pub fn z_score(&self) -> &[f64] {
        &self.z_score
    }

    /// Standard deviation at the final position — the dispersion estimate
    /// the confidence-interval methods consume.
    pub fn last_std(&self) -> f64 {
        *self.std.last().expect("series is non-empty by construction")
    }
}
