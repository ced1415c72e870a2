//! Differencing and the bookkeeping needed to undo it for a forecast.

/// First difference of a series: `data[i+1] - data[i]`.
/// One element shorter than the input.
pub(crate) fn difference(data: &[f64]) -> Vec<f64> {
    data.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Applies `d` rounds of differencing, recording the final value at each
/// level along the way.
///
/// The returned `tails` hold the last element of the series at levels
/// `0..d` (level 0 = original). A one-step-ahead forecast `w` on the
/// fully differenced scale maps back to the original scale as
/// `w + tails.iter().sum()`.
pub(crate) fn difference_with_tails(data: &[f64], d: usize) -> (Vec<f64>, Vec<f64>) {
    let mut current = data.to_vec();
    let mut tails = Vec::with_capacity(d);
    for _ in 0..d {
        tails.push(*current.last().expect("length checked by caller"));
        current = difference(&current);
    }
    (current, tails)
}
