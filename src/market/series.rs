//! Validated, date-ordered series of daily adjusted closes.

use chrono::{Duration, NaiveDate};

use crate::core::SimulationError;
use crate::math::timeseries;

/// One daily observation: trade date and adjusted close.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PricePoint {
    /// Trade date.
    pub date: NaiveDate,
    /// Adjusted close price.
    pub close: f64,
}

/// Ordered-by-date sequence of daily closes.
///
/// Validated on construction and read-only afterwards: dates strictly
/// increasing, closes finite and strictly positive, at least 2 points so at
/// least one log return exists.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HistoricalSeries {
    points: Vec<PricePoint>,
}

impl HistoricalSeries {
    /// Validates and wraps a sequence of daily observations.
    ///
    /// # Errors
    /// Returns `InsufficientData` for fewer than 2 points and
    /// `InvalidParameter` for out-of-order dates or non-positive closes.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SimulationError> {
        if points.len() < 2 {
            return Err(SimulationError::InsufficientData(format!(
                "historical series needs at least 2 points, got {}",
                points.len()
            )));
        }
        for w in points.windows(2) {
            if w[1].date <= w[0].date {
                return Err(SimulationError::InvalidParameter(format!(
                    "dates must be strictly increasing: {} does not follow {}",
                    w[1].date, w[0].date
                )));
            }
        }
        if points
            .iter()
            .any(|p| !p.close.is_finite() || p.close <= 0.0)
        {
            return Err(SimulationError::InvalidParameter(
                "closes must be finite and strictly positive".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Builds a series from closes on consecutive calendar days starting at `start`.
    ///
    /// Convenience for fixtures and demos; real feeds construct [`PricePoint`]s
    /// with actual trade dates.
    ///
    /// # Errors
    /// Same validation as [`HistoricalSeries::new`].
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Result<Self, SimulationError> {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + Duration::days(i as i64),
                close,
            })
            .collect::<Vec<_>>();
        Self::new(points)
    }

    /// Number of daily observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a validated series holds at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations in date order.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closes in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Last observed close, the simulation's starting price.
    pub fn last_close(&self) -> f64 {
        self.points[self.points.len() - 1].close
    }

    /// Date of the last observation.
    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].date
    }

    /// Daily log returns, one fewer element than the series.
    pub fn log_returns(&self) -> Vec<f64> {
        timeseries::log_returns(&self.closes())
    }
}
