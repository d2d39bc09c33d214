//! Numeric helpers shared by the indicator calculators

/// Arithmetic mean of the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Smoothing factor for an EMA of the given period
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Advance an EMA by one value
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let multiplier = ema_multiplier(period);
    (value * multiplier) + (previous * (1.0 - multiplier))
}

/// EMA seeded with the SMA of the first `period` values, then folded
/// left-to-right over the remainder
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed = sma(&values[..period], period)?;
    Some(
        values[period..]
            .iter()
            .fold(seed, |prev, &value| ema_from_previous(value, prev, period)),
    )
}

/// Population standard deviation of the last `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// Population standard deviation of the whole slice (0 for an empty slice)
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt()
}

/// Natural log returns between consecutive values
pub fn log_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] / w[0]).ln()).collect()
}

