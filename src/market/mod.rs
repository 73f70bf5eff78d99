//! Historical market data: validated price series and the price-source seam.

pub mod series;
pub mod source;

pub use series::{HistoricalSeries, PricePoint};
pub use source::{Instrument, PriceSource, StaticSource};
