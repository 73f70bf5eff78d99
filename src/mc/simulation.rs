//! Module `mc::simulation`.
//!
//! Single-path forward simulation of a jump-diffusion process seeded from
//! historical closes.
//!
//! Key types and purpose: `SimulationParams`, `JumpDiffusionPathGenerator`,
//! `SimulatedPath`, and the [`simulate`] entry point define the simulation
//! contract of this crate.
//!
//! Randomness is injected: every sampling routine takes `&mut R where R: Rng`,
//! so callers seed a [`rand::rngs::StdRng`] for reproducible paths and hand
//! independent generators to concurrent simulations. The step loop itself is
//! strictly sequential because each price depends on its predecessor.
//!
//! Numerical considerations: the exponential step form keeps prices strictly
//! positive for finite inputs, and the output buffer is pre-sized to
//! `steps + 1` so the length invariant is explicit rather than emergent.

use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson, StandardNormal};

use crate::core::SimulationError;
use crate::market::HistoricalSeries;
use crate::math::timeseries::{sample_mean, sample_std_dev};
use crate::models::JumpDiffusion;

/// User-facing simulation configuration.
///
/// `sigma: None` means "estimate volatility from historical log returns"; the
/// result records which route was taken. Defaults match the conventional
/// one-year daily horizon with rare small jumps.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationParams {
    /// Per-step volatility. `None` estimates it from history.
    pub sigma: Option<f64>,
    /// Expected jump count per step (Poisson rate).
    pub jump_intensity: f64,
    /// Mean log-jump size.
    pub jump_mean: f64,
    /// Standard deviation of the log-jump size.
    pub jump_vol: f64,
    /// Simulation horizon in years.
    pub horizon_years: f64,
    /// Number of forward steps.
    pub steps: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            sigma: None,
            jump_intensity: 0.01,
            jump_mean: 0.02,
            jump_vol: 0.1,
            horizon_years: 1.0,
            steps: 252,
        }
    }
}

impl SimulationParams {
    /// Fail-fast domain checks, run before any simulation work.
    ///
    /// # Errors
    /// `InvalidParameter` for `steps == 0`, non-positive `horizon_years`,
    /// negative volatility terms, or non-finite fields.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.steps == 0 {
            return Err(SimulationError::InvalidParameter(
                "steps must be > 0".to_string(),
            ));
        }
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(SimulationError::InvalidParameter(
                "horizon_years must be finite and > 0".to_string(),
            ));
        }
        if let Some(sigma) = self.sigma {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(SimulationError::InvalidParameter(
                    "sigma must be finite and >= 0".to_string(),
                ));
            }
        }
        if !self.jump_intensity.is_finite() || self.jump_intensity < 0.0 {
            return Err(SimulationError::InvalidParameter(
                "jump_intensity must be finite and >= 0".to_string(),
            ));
        }
        if !self.jump_mean.is_finite() {
            return Err(SimulationError::InvalidParameter(
                "jump_mean must be finite".to_string(),
            ));
        }
        if !self.jump_vol.is_finite() || self.jump_vol < 0.0 {
            return Err(SimulationError::InvalidParameter(
                "jump_vol must be finite and >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// One simulated forward path plus volatility provenance.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulatedPath {
    /// Exactly `steps + 1` prices; element 0 is the last historical close.
    pub prices: Vec<f64>,
    /// Volatility the simulation actually ran with.
    pub sigma_used: f64,
    /// True when `sigma_used` was estimated from historical log returns.
    pub sigma_was_estimated: bool,
}

/// Sequential single-path generator for [`JumpDiffusion`] dynamics.
#[derive(Debug, Clone)]
pub struct JumpDiffusionPathGenerator {
    /// Process parameters.
    pub model: JumpDiffusion,
    /// Starting price, path element 0.
    pub s0: f64,
    /// Horizon in years; `dt = horizon / steps`.
    pub horizon: f64,
    /// Number of forward steps; the path has `steps + 1` elements.
    pub steps: usize,
}

impl JumpDiffusionPathGenerator {
    fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    fn validate(&self) -> Result<(), SimulationError> {
        self.model.validate()?;
        if !self.s0.is_finite() || self.s0 <= 0.0 {
            return Err(SimulationError::InvalidParameter(
                "s0 must be finite and > 0".to_string(),
            ));
        }
        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(SimulationError::InvalidParameter(
                "horizon must be finite and > 0".to_string(),
            ));
        }
        if self.steps == 0 {
            return Err(SimulationError::InvalidParameter(
                "steps must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a path from injected per-step draws, with no randomness of its own.
    ///
    /// Each slice must hold `steps` elements: standard-normal diffusion draws,
    /// Poisson jump counts, and normal log-jump sizes.
    pub fn generate_from_draws(
        &self,
        normals: &[f64],
        jump_counts: &[f64],
        jump_sizes: &[f64],
    ) -> Vec<f64> {
        let mut path = vec![0.0_f64; self.steps + 1];
        self.generate_into(normals, jump_counts, jump_sizes, &mut path);
        path
    }

    /// Writes the path into a pre-sized buffer of `steps + 1` elements.
    pub fn generate_into(
        &self,
        normals: &[f64],
        jump_counts: &[f64],
        jump_sizes: &[f64],
        out: &mut [f64],
    ) {
        let dt = self.dt();
        let mut s = self.s0;
        out[0] = s;

        for j in 0..self.steps {
            s = self.model.step(s, dt, normals[j], jump_counts[j], jump_sizes[j]);
            out[j + 1] = s;
        }
    }

    /// Simulates one path with fresh draws from the supplied generator.
    ///
    /// Per step: one standard-normal diffusion draw, one Poisson jump count,
    /// and one normal log-jump size. The Poisson distribution rejects a zero
    /// rate, so zero intensity skips the count draw and no jumps ever fire.
    ///
    /// # Errors
    /// `InvalidParameter` when the model or generator fields fail validation.
    pub fn sample_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>, SimulationError> {
        self.validate()?;

        let jump_size = Normal::new(self.model.jump_mean, self.model.jump_vol).map_err(|e| {
            SimulationError::InvalidParameter(format!("jump size distribution: {e}"))
        })?;
        let jump_count = if self.model.jump_intensity > 0.0 {
            Some(Poisson::new(self.model.jump_intensity).map_err(|e| {
                SimulationError::InvalidParameter(format!("jump count distribution: {e}"))
            })?)
        } else {
            None
        };

        let dt = self.dt();
        let mut path = vec![0.0_f64; self.steps + 1];
        let mut s = self.s0;
        path[0] = s;

        for j in 0..self.steps {
            let z: f64 = StandardNormal.sample(rng);
            let n: f64 = match &jump_count {
                Some(dist) => dist.sample(rng),
                None => 0.0,
            };
            let size: f64 = jump_size.sample(rng);
            s = self.model.step(s, dt, z, n, size);
            path[j + 1] = s;
        }

        Ok(path)
    }
}

/// Simulates a forward price path seeded at the last historical close.
///
/// Derives the drift from the mean historical log return and the volatility
/// either from `params.sigma` or, when absent, from the sample standard
/// deviation (`n - 1` denominator) of the log returns; the result records
/// which route was taken. Either a fully valid path of `steps + 1` prices is
/// returned or an error, never a partial path.
///
/// # Errors
/// `InvalidParameter` for out-of-domain parameters; `InsufficientData` when
/// volatility estimation is requested with fewer than two log returns.
pub fn simulate<R: Rng + ?Sized>(
    series: &HistoricalSeries,
    params: &SimulationParams,
    rng: &mut R,
) -> Result<SimulatedPath, SimulationError> {
    params.validate()?;

    let returns = series.log_returns();
    let mu = sample_mean(&returns);

    let (sigma, sigma_was_estimated) = match params.sigma {
        Some(value) => (value, false),
        None => {
            if returns.len() < 2 {
                return Err(SimulationError::InsufficientData(format!(
                    "estimating sigma needs at least 2 log returns, got {}",
                    returns.len()
                )));
            }
            (sample_std_dev(&returns), true)
        }
    };

    let generator = JumpDiffusionPathGenerator {
        model: JumpDiffusion {
            mu,
            sigma,
            jump_intensity: params.jump_intensity,
            jump_mean: params.jump_mean,
            jump_vol: params.jump_vol,
        },
        s0: series.last_close(),
        horizon: params.horizon_years,
        steps: params.steps,
    };

    let prices = generator.sample_path(rng)?;

    Ok(SimulatedPath {
        prices,
        sigma_used: sigma,
        sigma_was_estimated,
    })
}
