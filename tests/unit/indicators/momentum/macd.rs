//! Unit tests for MACD

use crate::support::{flat, geometric, linear};
use tradeloom::indicators::momentum::{calculate_macd, calculate_macd_default};

#[test]
fn test_macd_needs_slow_period() {
    assert!(calculate_macd_default(&flat(25, 100.0)).is_none());
    assert!(calculate_macd_default(&flat(26, 100.0)).is_some());
}

#[test]
fn test_macd_flat_series_is_zero() {
    let macd = calculate_macd_default(&flat(60, 100.0)).unwrap();
    assert_eq!(macd.macd, 0.0);
    assert_eq!(macd.signal, 0.0);
    assert_eq!(macd.histogram, 0.0);
}

#[test]
fn test_macd_signal_and_histogram_are_fixed_fractions() {
    let macd = calculate_macd_default(&geometric(60, 100.0, 0.01)).unwrap();
    assert!(macd.macd > 0.0);
    assert!((macd.signal - 0.9 * macd.macd).abs() < 1e-12);
    assert!((macd.histogram - 0.1 * macd.macd).abs() < 1e-12);
}

#[test]
fn test_macd_negative_in_downtrend() {
    let macd = calculate_macd_default(&linear(60, 200.0, -1.0)).unwrap();
    assert!(macd.macd < 0.0);
    assert!(macd.histogram < 0.0);
}

#[test]
fn test_macd_custom_periods() {
    // fast and slow equal -> lines coincide
    let macd = calculate_macd(&linear(30, 100.0, 1.0), 5, 5).unwrap();
    assert_eq!(macd.macd, 0.0);
}
