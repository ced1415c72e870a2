//! Order-selection policy tests for mentor-arima.

use mentor_arima::{ArimaOrder, SelectionConfig, select_order};
use rand::Rng;
use rand::SeedableRng;

#[test]
fn three_or_fewer_points_always_give_1_0_0() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let config = SelectionConfig::new();
    for n in 0..=3 {
        for _ in 0..20 {
            let data: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..1.0)).collect();
            assert_eq!(
                select_order(&data, &config),
                ArimaOrder::new(1, 0, 0),
                "n = {n}, data = {data:?}"
            );
        }
    }
}

#[test]
fn four_points_trigger_a_real_search() {
    // One past the short-series cutoff the selector must search (or fall
    // back), but the result is never the degenerate order.
    let data = [0.2, 0.8, 0.3, 0.7];
    let order = select_order(&data, &SelectionConfig::new());
    assert_ne!(order, ArimaOrder::new(0, 0, 0));
}

#[test]
fn selected_order_fits_the_series_it_was_chosen_for() {
    let scores = [0.9, 0.88, 0.75, 0.78, 0.74, 0.69];
    let order = select_order(&scores, &SelectionConfig::new());
    let fit = order.fit(&scores).unwrap();
    assert!(fit.forecast_one().predicted().is_finite());
}

#[test]
fn autocorrelated_series_selects_some_structure() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut data = vec![0.0; 300];
    for t in 1..300 {
        data[t] = 0.7 * data[t - 1] + rng.random_range(-0.5..0.5);
    }
    let order = select_order(&data, &SelectionConfig::new());
    assert_eq!(order.d(), 0, "stationary AR(1) data should not be differenced");
    assert!(order.p() >= 1, "expected AR structure, got {order}");
}

#[test]
fn unfittable_series_falls_back_to_2_1_2() {
    // Zero variance defeats both search stages.
    let data = [0.75; 20];
    assert_eq!(
        select_order(&data, &SelectionConfig::new()),
        ArimaOrder::new(2, 1, 2)
    );
}

#[test]
fn caps_bound_the_searched_orders() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let data: Vec<f64> = (0..60).map(|_| rng.random_range(0.4..0.6)).collect();
    let config = SelectionConfig::new().with_max_p(1).with_max_q(1);
    let order = select_order(&data, &config);
    // Either a searched order within the caps, or the fixed fallback.
    assert!(
        (order.p() <= 1 && order.q() <= 1) || order == ArimaOrder::new(2, 1, 2),
        "got {order}"
    );
}
