//! ARIMA model order (unfitted specification).

use serde::{Serialize, Serializer};

use crate::error::ArimaError;
use crate::fit::ArimaFit;

/// An unfitted ARIMA(p,d,q) specification: `p` autoregressive terms,
/// differencing degree `d`, and `q` moving-average terms.
///
/// This is the entry point of the fitting workflow: build an order (by
/// hand or via [`select_order`](crate::select_order)), then call
/// [`ArimaOrder::fit()`] to obtain an [`ArimaFit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArimaOrder {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaOrder {
    /// Creates a new ARIMA(p,d,q) order.
    ///
    /// # Example
    ///
    /// ```
    /// use mentor_arima::ArimaOrder;
    ///
    /// let order = ArimaOrder::new(2, 1, 2);
    /// assert_eq!((order.p(), order.d(), order.q()), (2, 1, 2));
    /// ```
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing degree (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Fits this order to observed data via exact maximum likelihood
    /// (differencing, then a Kalman-filter ARMA likelihood).
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::EmptyData`] | `data` is empty |
    /// | [`ArimaError::InsufficientData`] | too few observations for `(p,d,q)` |
    /// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArimaError::ConstantData`] | differenced data has zero variance |
    /// | [`ArimaError::NonStationary`] | no stationary state covariance |
    /// | [`ArimaError::OptimizationFailed`] | optimizer fails to converge |
    pub fn fit(&self, data: &[f64]) -> Result<ArimaFit, ArimaError> {
        crate::optimizer::fit_arima(*self, data)
    }
}

impl std::fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.p, self.d, self.q)
    }
}

// Serialized as the bare triple `[p, d, q]`.
impl Serialize for ArimaOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.p, self.d, self.q).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_round_trip() {
        let order = ArimaOrder::new(1, 0, 2);
        assert_eq!(order.p(), 1);
        assert_eq!(order.d(), 0);
        assert_eq!(order.q(), 2);
    }

    #[test]
    fn order_is_copy_and_eq() {
        let a = ArimaOrder::new(2, 1, 2);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, ArimaOrder::new(2, 0, 2));
    }

    #[test]
    fn order_display() {
        assert_eq!(ArimaOrder::new(2, 1, 2).to_string(), "(2,1,2)");
    }

    #[test]
    fn fit_empty_data() {
        let err = ArimaOrder::new(1, 0, 0).fit(&[]).unwrap_err();
        assert!(matches!(err, ArimaError::EmptyData));
    }

    #[test]
    fn fit_non_finite_data() {
        let err = ArimaOrder::new(1, 0, 0)
            .fit(&[0.5, f64::NAN, 0.7, 0.8])
            .unwrap_err();
        assert!(matches!(err, ArimaError::NonFiniteData));
    }

    #[test]
    fn fit_differencing_beyond_length() {
        let err = ArimaOrder::new(0, 4, 0).fit(&[0.5, 0.6, 0.7]).unwrap_err();
        assert!(matches!(err, ArimaError::InsufficientData { d: 4, .. }));
    }

    #[test]
    fn fit_constant_data() {
        let err = ArimaOrder::new(1, 0, 0)
            .fit(&[0.8, 0.8, 0.8, 0.8, 0.8])
            .unwrap_err();
        assert!(matches!(err, ArimaError::ConstantData));
    }
}
