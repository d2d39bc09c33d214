//! Series builders shared by the unit tests

use chrono::{TimeDelta, TimeZone, Utc};
use tradeloom::models::price::PricePoint;

/// One point per hour starting at a fixed instant
pub fn series(prices: &[f64]) -> Vec<PricePoint> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(start + TimeDelta::hours(i as i64), price))
        .collect()
}

pub fn flat(count: usize, price: f64) -> Vec<PricePoint> {
    series(&vec![price; count])
}

/// `start * (1 + step)^i`
pub fn geometric(count: usize, start: f64, step: f64) -> Vec<PricePoint> {
    let prices: Vec<f64> = (0..count)
        .map(|i| start * (1.0 + step).powi(i as i32))
        .collect();
    series(&prices)
}

pub fn linear(count: usize, start: f64, step: f64) -> Vec<PricePoint> {
    let prices: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    series(&prices)
}
