//! Unit tests for EMA

use crate::support::{flat, series};
use tradeloom::indicators::trend::calculate_ema;

#[test]
fn test_ema_insufficient_data() {
    assert!(calculate_ema(&flat(11, 100.0), 12).is_none());
}

#[test]
fn test_ema_flat_series_equals_price() {
    let ema = calculate_ema(&flat(40, 100.0), 12).unwrap();
    assert_eq!(ema.value, 100.0);
    assert_eq!(ema.period, 12);
}

#[test]
fn test_ema_seeded_with_sma() {
    // seed = mean(1, 2, 3) = 2; alpha = 0.5 -> 9 * 0.5 + 2 * 0.5
    let ema = calculate_ema(&series(&[1.0, 2.0, 3.0, 9.0]), 3).unwrap();
    assert!((ema.value - 5.5).abs() < 1e-12);
}

#[test]
fn test_ema_reacts_faster_than_sma() {
    let mut prices = vec![100.0; 20];
    prices.extend([110.0; 3]);
    let ema = calculate_ema(&series(&prices), 10).unwrap();
    let sma: f64 = prices[prices.len() - 10..].iter().sum::<f64>() / 10.0;
    assert!(ema.value > sma);
}
