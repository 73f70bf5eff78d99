//! Jumpdiff simulates forward asset-price paths with a jump-diffusion model
//! seeded from historical daily closes.
//!
//! The crate covers one pipeline: validate a historical close series, derive
//! drift and (optionally) volatility from its log returns, then roll a
//! single forward path of `steps + 1` prices where each step combines a
//! Brownian increment with a Poisson-count-times-normal-size jump term. The
//! jump term is deliberately that simple product, not a compound-Poisson sum;
//! the simplification is part of the reproduced model's contract.
//!
//! Randomness is always injected (`&mut R where R: Rng`), so a seeded
//! [`rand::rngs::StdRng`] makes any simulation reproducible and concurrent
//! simulations stay independent by giving each its own generator.
//!
//! # Quick Start
//! Simulate ten forward steps from four historical closes:
//! ```rust
//! use chrono::NaiveDate;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! use jumpdiff::market::HistoricalSeries;
//! use jumpdiff::mc::{simulate, SimulationParams};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let series = HistoricalSeries::from_closes(start, &[100.0, 102.0, 101.0, 105.0]).unwrap();
//!
//! let params = SimulationParams {
//!     sigma: Some(0.05),
//!     steps: 10,
//!     ..SimulationParams::default()
//! };
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let path = simulate(&series, &params, &mut rng).unwrap();
//!
//! assert_eq!(path.prices.len(), 11);
//! assert_eq!(path.prices[0], 105.0);
//! assert!(!path.sigma_was_estimated);
//! ```
//!
//! Estimate volatility from history and render the provenance caption:
//! ```rust
//! use chrono::NaiveDate;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! use jumpdiff::market::HistoricalSeries;
//! use jumpdiff::mc::{simulate, SimulationParams};
//! use jumpdiff::report::sigma_note;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
//! let series = HistoricalSeries::from_closes(start, &[100.0, 102.0, 101.0, 105.0]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let path = simulate(&series, &SimulationParams::default(), &mut rng).unwrap();
//!
//! assert!(path.sigma_was_estimated);
//! assert!(sigma_note(&path).contains("estimated"));
//! ```

pub mod core;
pub mod market;
pub mod math;
pub mod mc;
pub mod models;
pub mod report;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::SimulationError;
    pub use crate::market::{HistoricalSeries, Instrument, PricePoint, PriceSource, StaticSource};
    pub use crate::mc::{simulate, JumpDiffusionPathGenerator, SimulatedPath, SimulationParams};
    pub use crate::models::JumpDiffusion;
    pub use crate::report::{merge_with_history, sigma_note, MergedPoint};
}
