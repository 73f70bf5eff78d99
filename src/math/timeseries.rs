//! Return transforms and sample moments over historical price series.
//!
//! These helpers assume pre-validated inputs; [`crate::market::HistoricalSeries`]
//! enforces length and positivity before calling into this module. Direct
//! callers get the documented panics instead.

/// Computes log returns from a price series.
///
/// `r_t = ln(P_t / P_{t-1})`, one fewer element than the input.
///
/// # Panics
/// Panics if fewer than 2 prices are supplied, or if any price is non-finite or <= 0.
pub fn log_returns(prices: &[f64]) -> Vec<f64> {
    assert!(prices.len() >= 2, "prices must contain at least two values");
    assert!(
        prices.iter().all(|x| x.is_finite() && *x > 0.0),
        "prices must be finite and strictly positive"
    );
    prices
        .windows(2)
        .map(|w| (w[1] / w[0]).ln())
        .collect::<Vec<_>>()
}

/// Arithmetic mean of a sample.
///
/// # Panics
/// Panics on an empty sample.
pub fn sample_mean(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "values must not be empty");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// # Panics
/// Panics if fewer than 2 observations are supplied.
pub fn sample_variance(values: &[f64]) -> f64 {
    assert!(values.len() >= 2, "at least 2 observations are required");
    let mean = sample_mean(values);
    let mut sum = 0.0;
    for &x in values {
        let d = x - mean;
        sum += d * d;
    }
    sum / (values.len() as f64 - 1.0)
}

/// Unbiased sample standard deviation.
///
/// # Panics
/// Panics if fewer than 2 observations are supplied.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).max(0.0).sqrt()
}
