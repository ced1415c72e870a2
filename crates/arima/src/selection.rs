//! Staged ARIMA order selection.
//!
//! The policy is an explicit ordered list of search strategies with a
//! single terminal default:
//!
//! 1. Series of 3 or fewer points skip the search and get `(1,0,0)`.
//! 2. A stepwise neighbourhood search (in the manner of
//!    Hyndman-Khandakar) is tried first.
//! 3. If it fails or lands on the degenerate `(0,0,0)`, an exhaustive
//!    grid over the same order space is tried.
//! 4. If that also fails or is degenerate, the fixed order `(2,1,2)` is
//!    returned.
//!
//! `(0,0,0)` means "no structure found" and is never the final answer for
//! a series longer than 3 points. Search failures never escape: every
//! stage falls through to the next, and the terminal default always
//! exists.

use std::collections::HashSet;

use tracing::debug;

use crate::difference::difference;
use crate::order::ArimaOrder;

/// Series at or below this length skip the search entirely.
const SHORT_SERIES_MAX: usize = 3;

/// Order returned for short series.
const SHORT_SERIES_ORDER: ArimaOrder = ArimaOrder::new(1, 0, 0);

/// "No structure found" — triggers the next fallback stage.
const DEGENERATE_ORDER: ArimaOrder = ArimaOrder::new(0, 0, 0);

/// Terminal default when every search stage fails.
const FALLBACK_ORDER: ArimaOrder = ArimaOrder::new(2, 1, 2);

/// Stepwise search starts from the classic seed orders.
const STARTING_ORDERS: [(usize, usize); 4] = [(2, 2), (0, 0), (1, 0), (0, 1)];

/// Lag-1 autocorrelation at or above this is treated as a unit root and
/// differenced away.
const ACF1_DIFFERENCE_THRESHOLD: f64 = 0.9;

/// The strategies tried, in order.
const STRATEGIES: [SearchStrategy; 2] = [SearchStrategy::Stepwise, SearchStrategy::Grid];

#[derive(Clone, Copy, Debug)]
enum SearchStrategy {
    Stepwise,
    Grid,
}

/// Bounds for the order search.
///
/// The caps bound the combinatorial cost of the grid stage; the defaults
/// match pmdarima's non-seasonal search space. Any wall-clock budget is
/// the caller's concern, imposed around the whole pipeline.
///
/// # Example
///
/// ```
/// use mentor_arima::SelectionConfig;
///
/// let config = SelectionConfig::new().with_max_p(3).with_max_q(3);
/// assert_eq!(config.max_p(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SelectionConfig {
    max_p: usize,
    max_d: usize,
    max_q: usize,
}

impl SelectionConfig {
    /// Creates a configuration with defaults `max_p = 5`, `max_d = 2`,
    /// `max_q = 5`.
    pub fn new() -> Self {
        Self {
            max_p: 5,
            max_d: 2,
            max_q: 5,
        }
    }

    /// Sets the maximum AR order searched.
    pub fn with_max_p(mut self, max_p: usize) -> Self {
        self.max_p = max_p;
        self
    }

    /// Sets the maximum differencing degree.
    pub fn with_max_d(mut self, max_d: usize) -> Self {
        self.max_d = max_d;
        self
    }

    /// Sets the maximum MA order searched.
    pub fn with_max_q(mut self, max_q: usize) -> Self {
        self.max_q = max_q;
        self
    }

    /// Returns the maximum AR order searched.
    pub fn max_p(&self) -> usize {
        self.max_p
    }

    /// Returns the maximum differencing degree.
    pub fn max_d(&self) -> usize {
        self.max_d
    }

    /// Returns the maximum MA order searched.
    pub fn max_q(&self) -> usize {
        self.max_q
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects an ARIMA order for `data` under the staged fallback policy.
///
/// Never fails: search errors and degenerate results fall through to the
/// next stage, ending at the fixed default `(2,1,2)`.
#[tracing::instrument(skip(data), fields(n = data.len()))]
pub fn select_order(data: &[f64], config: &SelectionConfig) -> ArimaOrder {
    if data.len() <= SHORT_SERIES_MAX {
        debug!(order = %SHORT_SERIES_ORDER, "series too short for a search");
        return SHORT_SERIES_ORDER;
    }

    let d = choose_d(data, config.max_d());
    debug!(d, "differencing degree chosen");

    for strategy in STRATEGIES {
        match run_strategy(strategy, data, d, config) {
            Some(order) if order != DEGENERATE_ORDER => {
                debug!(%order, ?strategy, "search selected an order");
                return order;
            }
            Some(_) => debug!(?strategy, "search found no structure, falling through"),
            None => debug!(?strategy, "search failed, falling through"),
        }
    }

    debug!(order = %FALLBACK_ORDER, "all searches exhausted, using fixed fallback");
    FALLBACK_ORDER
}

fn run_strategy(
    strategy: SearchStrategy,
    data: &[f64],
    d: usize,
    config: &SelectionConfig,
) -> Option<ArimaOrder> {
    match strategy {
        SearchStrategy::Stepwise => stepwise_search(data, d, config),
        SearchStrategy::Grid => grid_search(data, d, config),
    }
}

/// Picks the differencing degree once, before either search stage, so AIC
/// values stay comparable across candidates: a series whose lag-1
/// autocorrelation looks like a unit root is differenced, up to `max_d`,
/// as long as differencing does not collapse it to a constant.
fn choose_d(data: &[f64], max_d: usize) -> usize {
    let mut current = data.to_vec();
    let mut d = 0;
    while d < max_d && current.len() > SHORT_SERIES_MAX + 1 {
        if lag1_autocorrelation(&current) < ACF1_DIFFERENCE_THRESHOLD {
            break;
        }
        let next = difference(&current);
        if is_constant(&next) {
            break;
        }
        current = next;
        d += 1;
    }
    d
}

/// Stepwise neighbourhood search: seed orders first, then walk p/q
/// neighbours of the incumbent while the AIC improves. Candidates that
/// fail to fit are skipped.
fn stepwise_search(data: &[f64], d: usize, config: &SelectionConfig) -> Option<ArimaOrder> {
    let mut tried: HashSet<(usize, usize)> = HashSet::new();
    let mut best: Option<((usize, usize), f64)> = None;

    for &(p, q) in STARTING_ORDERS.iter() {
        if p <= config.max_p() && q <= config.max_q() {
            evaluate(data, p, d, q, &mut tried, &mut best);
        }
    }

    loop {
        let ((p, q), _) = best?;
        // p/q of 0 wrap to usize::MAX and fall outside the caps.
        let neighbours = [
            (p + 1, q),
            (p.wrapping_sub(1), q),
            (p, q + 1),
            (p, q.wrapping_sub(1)),
            (p + 1, q + 1),
            (p.wrapping_sub(1), q.wrapping_sub(1)),
        ];
        for (np, nq) in neighbours {
            if np <= config.max_p() && nq <= config.max_q() {
                evaluate(data, np, d, nq, &mut tried, &mut best);
            }
        }
        let ((new_p, new_q), _) = best?;
        if (new_p, new_q) == (p, q) {
            break;
        }
    }

    best.map(|((p, q), _)| ArimaOrder::new(p, d, q))
}

/// Exhaustive grid over the full `(p, q)` space at the chosen `d`,
/// ranked by AIC.
fn grid_search(data: &[f64], d: usize, config: &SelectionConfig) -> Option<ArimaOrder> {
    let mut tried: HashSet<(usize, usize)> = HashSet::new();
    let mut best: Option<((usize, usize), f64)> = None;

    for p in 0..=config.max_p() {
        for q in 0..=config.max_q() {
            evaluate(data, p, d, q, &mut tried, &mut best);
        }
    }

    best.map(|((p, q), _)| ArimaOrder::new(p, d, q))
}

/// Fits one candidate and folds it into the incumbent if it improves the
/// AIC. Fit failures are logged and skipped.
fn evaluate(
    data: &[f64],
    p: usize,
    d: usize,
    q: usize,
    tried: &mut HashSet<(usize, usize)>,
    best: &mut Option<((usize, usize), f64)>,
) {
    if !tried.insert((p, q)) {
        return;
    }
    match ArimaOrder::new(p, d, q).fit(data) {
        Ok(fit) => {
            let aic = fit.aic();
            if aic.is_finite() && best.map_or(true, |(_, incumbent)| aic < incumbent) {
                *best = Some(((p, q), aic));
            }
        }
        Err(err) => debug!(p, d, q, %err, "candidate order failed to fit"),
    }
}

fn lag1_autocorrelation(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    let denom: f64 = data.iter().map(|&x| (x - mean) * (x - mean)).sum();
    if denom < 1e-12 {
        return 0.0;
    }
    let num: f64 = data
        .windows(2)
        .map(|w| (w[0] - mean) * (w[1] - mean))
        .sum();
    num / denom
}

fn is_constant(data: &[f64]) -> bool {
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    !(max - min).is_finite() || (max - min).abs() < f64::EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SelectionConfig::new();
        assert_eq!(config.max_p(), 5);
        assert_eq!(config.max_d(), 2);
        assert_eq!(config.max_q(), 5);
    }

    #[test]
    fn config_builder_chaining() {
        let config = SelectionConfig::new()
            .with_max_p(3)
            .with_max_d(1)
            .with_max_q(2);
        assert_eq!(config.max_p(), 3);
        assert_eq!(config.max_d(), 1);
        assert_eq!(config.max_q(), 2);
    }

    #[test]
    fn short_series_fixed_order_regardless_of_content() {
        let config = SelectionConfig::new();
        let cases: &[&[f64]] = &[
            &[],
            &[0.5],
            &[0.1, 0.9],
            &[0.9, 0.9, 0.9],
            &[0.1, 0.5, 0.9],
        ];
        for data in cases {
            assert_eq!(
                select_order(data, &config),
                ArimaOrder::new(1, 0, 0),
                "series {data:?}"
            );
        }
    }

    #[test]
    fn constant_series_lands_on_terminal_fallback() {
        // Every candidate fails on zero-variance data, so both search
        // stages fall through.
        let data = [0.8; 10];
        assert_eq!(
            select_order(&data, &SelectionConfig::new()),
            ArimaOrder::new(2, 1, 2)
        );
    }

    #[test]
    fn degenerate_order_is_never_final_for_long_series() {
        let cases: &[&[f64]] = &[
            &[0.9, 0.88, 0.75, 0.78, 0.74, 0.69],
            &[0.2, 0.8, 0.3, 0.7, 0.4, 0.6, 0.5],
            &[0.5; 12],
        ];
        for data in cases {
            let order = select_order(data, &SelectionConfig::new());
            assert_ne!(order, ArimaOrder::new(0, 0, 0), "series {data:?}");
        }
    }

    #[test]
    fn lag1_autocorrelation_of_alternating_series_is_negative() {
        let data = [0.4, 0.6, 0.4, 0.6, 0.4, 0.6, 0.4, 0.6];
        assert!(lag1_autocorrelation(&data) < 0.0);
    }

    #[test]
    fn lag1_autocorrelation_of_constant_is_zero() {
        assert_eq!(lag1_autocorrelation(&[0.7; 8]), 0.0);
    }

    #[test]
    fn choose_d_zero_for_alternating_series() {
        let data = [0.4, 0.6, 0.4, 0.6, 0.4, 0.6, 0.4, 0.6];
        assert_eq!(choose_d(&data, 2), 0);
    }

    #[test]
    fn choose_d_one_for_noisy_trend() {
        // Strong trend with alternating noise: persistent at level 0,
        // anti-persistent after one difference.
        let data: Vec<f64> = (0..50)
            .map(|t| t as f64 + 0.3 * if t % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        assert_eq!(choose_d(&data, 2), 1);
    }

    #[test]
    fn choose_d_refuses_a_difference_that_collapses_to_constant() {
        // Exactly linear: persistent, but its difference has zero
        // variance, so the guard keeps d at 0.
        let data: Vec<f64> = (0..50).map(|t| 0.01 * t as f64).collect();
        assert_eq!(choose_d(&data, 2), 0);
    }

    #[test]
    fn choose_d_respects_the_cap() {
        let data: Vec<f64> = (0..50)
            .map(|t| t as f64 + 0.3 * if t % 2 == 0 { 1.0 } else { -1.0 })
            .collect();
        assert_eq!(choose_d(&data, 0), 0);
    }

    #[test]
    fn is_constant_detects_flat_and_spread() {
        assert!(is_constant(&[0.5, 0.5, 0.5]));
        assert!(!is_constant(&[0.5, 0.6]));
    }
}
