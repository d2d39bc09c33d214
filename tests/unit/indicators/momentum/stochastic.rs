//! Unit tests for the stochastic oscillator

use crate::support::{flat, linear, series};
use tradeloom::indicators::momentum::{
    calculate_stochastic, calculate_stochastic_default, STOCHASTIC_MIDPOINT,
};

#[test]
fn test_stochastic_needs_full_window() {
    assert!(calculate_stochastic_default(&flat(13, 100.0)).is_none());
    assert!(calculate_stochastic_default(&flat(14, 100.0)).is_some());
}

#[test]
fn test_stochastic_at_high_is_hundred() {
    let stoch = calculate_stochastic_default(&linear(20, 100.0, 1.0)).unwrap();
    assert_eq!(stoch.k, 100.0);
    assert_eq!(stoch.d, stoch.k);
}

#[test]
fn test_stochastic_at_low_is_zero() {
    let stoch = calculate_stochastic_default(&linear(20, 100.0, -1.0)).unwrap();
    assert_eq!(stoch.k, 0.0);
}

#[test]
fn test_stochastic_no_range_is_midpoint() {
    let stoch = calculate_stochastic_default(&flat(20, 42.0)).unwrap();
    assert_eq!(stoch.k, STOCHASTIC_MIDPOINT);
}

#[test]
fn test_stochastic_mid_range() {
    let stoch = calculate_stochastic(&series(&[10.0, 20.0, 15.0]), 3).unwrap();
    assert!((stoch.k - 50.0).abs() < 1e-12);
}
