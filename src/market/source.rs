//! The market-data seam: an opaque provider of daily closes per symbol.
//!
//! Retrieval is an external collaborator. The simulation core only requires
//! that a source either yields a validated [`HistoricalSeries`] or fails with
//! `DataUnavailable`; it never retries or backfills on its own.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::SimulationError;
use crate::market::series::{HistoricalSeries, PricePoint};

/// Instruments exposed by the user-facing configuration surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Instrument {
    /// ICE Sugar No. 11 futures.
    SugarFutures,
    /// US dollar / Brazilian real spot rate.
    UsdBrl,
}

impl Instrument {
    /// Provider ticker for this instrument.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::SugarFutures => "SB=F",
            Self::UsdBrl => "USDBRL=X",
        }
    }
}

/// Opaque source of historical daily adjusted closes.
pub trait PriceSource {
    /// Returns the ordered daily closes for `symbol` within `[start, end]`.
    ///
    /// # Errors
    /// `DataUnavailable` when the symbol is unknown or the window holds no
    /// rows; `InsufficientData` when too few rows survive the window.
    fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, SimulationError>;
}

/// In-memory price source keyed by symbol.
///
/// Stands in for a live feed in tests and demos, including its failure modes.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    series: HashMap<String, Vec<PricePoint>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the observations for a symbol.
    pub fn insert<S: Into<String>>(&mut self, symbol: S, points: Vec<PricePoint>) {
        self.series.insert(symbol.into(), points);
    }
}

impl PriceSource for StaticSource {
    fn daily_closes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HistoricalSeries, SimulationError> {
        let points = self.series.get(symbol).ok_or_else(|| {
            SimulationError::DataUnavailable(format!("no data for symbol {symbol}"))
        })?;

        let filtered = points
            .iter()
            .copied()
            .filter(|p| p.date >= start && p.date <= end)
            .collect::<Vec<_>>();

        if filtered.is_empty() {
            return Err(SimulationError::DataUnavailable(format!(
                "symbol {symbol} has no rows between {start} and {end}"
            )));
        }

        HistoricalSeries::new(filtered)
    }
}
