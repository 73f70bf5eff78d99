//! Numerical helpers: return transforms and sample moments.

pub mod timeseries;

pub use timeseries::{log_returns, sample_mean, sample_std_dev, sample_variance};
