//! Presentation-layer view: simulated path aligned against history, plus the
//! volatility-provenance caption.

use chrono::NaiveDate;

use crate::market::HistoricalSeries;
use crate::mc::SimulatedPath;

/// One row of the merged historical/simulated view.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergedPoint {
    /// Trade date of the historical observation.
    pub date: NaiveDate,
    /// Historical adjusted close.
    pub close: f64,
    /// Simulated price aligned by position, `None` once the path runs out.
    pub simulated: Option<f64>,
}

/// Aligns a simulated path against the historical series by position.
///
/// The output has exactly the historical length: a path longer than the
/// history is truncated, a shorter one leaves trailing rows without a
/// simulated value.
pub fn merge_with_history(series: &HistoricalSeries, path: &SimulatedPath) -> Vec<MergedPoint> {
    series
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| MergedPoint {
            date: p.date,
            close: p.close,
            simulated: path.prices.get(i).copied(),
        })
        .collect()
}

/// Human-readable note on where the simulation volatility came from.
pub fn sigma_note(path: &SimulatedPath) -> String {
    if path.sigma_was_estimated {
        format!(
            "volatility sigma = {:.6} was estimated from historical log returns",
            path.sigma_used
        )
    } else {
        format!(
            "volatility sigma = {:.6} was supplied by the user",
            path.sigma_used
        )
    }
}
