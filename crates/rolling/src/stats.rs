//! Scalar statistical helpers shared by the rolling-window computation.

/// Variance below this floor is treated as zero.
///
/// Summing a window of identical floats can leave a residual on the order
/// of machine epsilon squared; clamping keeps constant windows at exactly
/// zero dispersion instead of producing astronomical z-scores.
const VARIANCE_FLOOR: f64 = 1e-12;

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 for fewer than 2
/// elements, and clamps sub-floor values to 0.0.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    let var = data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n as f64 - 1.0);
    if var < VARIANCE_FLOOR { 0.0 } else { var }
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 for fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sd() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sd(&data), 2.138090, epsilon = 1e-6);
    }

    #[test]
    fn test_sd_single() {
        assert_eq!(sd(&[0.75]), 0.0);
    }

    #[test]
    fn test_variance_two() {
        // [0.3, 0.7]: mean = 0.5, sum of squares = 0.08, var = 0.08
        assert_relative_eq!(variance(&[0.3, 0.7]), 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_constant_is_exactly_zero() {
        // 0.1 does not sum exactly in binary; the floor must absorb the dust.
        assert_eq!(variance(&[0.1, 0.1, 0.1]), 0.0);
        assert_eq!(sd(&[0.1, 0.1, 0.1, 0.1, 0.1]), 0.0);
    }

    #[test]
    fn test_variance_small_but_real_spread() {
        let data = [0.50, 0.51, 0.52];
        assert!(variance(&data) > 0.0);
    }
}
