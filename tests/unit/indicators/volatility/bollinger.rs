//! Unit tests for Bollinger Bands

use crate::support::{flat, geometric, series};
use tradeloom::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};

#[test]
fn test_bollinger_insufficient_data() {
    assert!(calculate_bollinger_bands_default(&flat(19, 100.0)).is_none());
}

#[test]
fn test_bollinger_flat_series_collapses() {
    let bands = calculate_bollinger_bands_default(&flat(20, 100.0)).unwrap();
    assert_eq!(bands.upper, 100.0);
    assert_eq!(bands.middle, 100.0);
    assert_eq!(bands.lower, 100.0);
    assert_eq!(bands.bandwidth, 0.0);
}

#[test]
fn test_bollinger_known_values() {
    // mean 5, population std 2
    let data = series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let bands = calculate_bollinger_bands(&data, 8, 2.0).unwrap();
    assert_eq!(bands.middle, 5.0);
    assert_eq!(bands.upper, 9.0);
    assert_eq!(bands.lower, 1.0);
    assert!((bands.bandwidth - 8.0 / 5.0).abs() < 1e-12);
}

#[test]
fn test_bollinger_bands_are_ordered() {
    let bands = calculate_bollinger_bands_default(&geometric(40, 100.0, 0.02)).unwrap();
    assert!(bands.lower < bands.middle);
    assert!(bands.middle < bands.upper);
    assert!(bands.bandwidth > 0.0);
}

#[test]
fn test_bollinger_declining_scenario_band() {
    // 20 points declining 1%: last price stays above the lower band
    let data = geometric(20, 100.0, -0.01);
    let bands = calculate_bollinger_bands_default(&data).unwrap();
    let last = data.last().unwrap().price;
    assert!(last > bands.lower);
    assert!(last < bands.middle);
}
