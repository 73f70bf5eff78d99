//! Jump-diffusion dynamics: lognormal diffusion plus a simplified jump term.
//!
//! The per-step jump contribution is one Poisson count multiplied by one
//! normal log-size, not a compound sum of independent jump draws. That
//! simplified form is the documented contract of this crate and is kept
//! exactly; see [`JumpDiffusion::step`].

use crate::core::SimulationError;

/// Parameters of the jump-diffusion process, all per simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpDiffusion {
    /// Drift, typically the mean historical log return.
    pub mu: f64,
    /// Diffusion volatility.
    pub sigma: f64,
    /// Expected jump count per step (Poisson rate).
    pub jump_intensity: f64,
    /// Mean log-jump size.
    pub jump_mean: f64,
    /// Standard deviation of the log-jump size.
    pub jump_vol: f64,
}

impl JumpDiffusion {
    /// Checks every field for finiteness and sign constraints.
    ///
    /// # Errors
    /// `InvalidParameter` when `sigma`, `jump_intensity`, or `jump_vol` is
    /// negative, or any field is non-finite.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.mu.is_finite() {
            return Err(SimulationError::InvalidParameter(
                "mu must be finite".to_string(),
            ));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimulationError::InvalidParameter(
                "sigma must be finite and >= 0".to_string(),
            ));
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

    /// Advances the price one step given the step's random draws.
    ///
    /// `S' = S * exp((mu - sigma^2/2) dt + sigma sqrt(dt) z + jump_count * jump_size)`
    ///
    /// `z` is a standard-normal diffusion draw, `jump_count` a Poisson count,
    /// and `jump_size` a single normal log-jump draw. The exponential form
    /// keeps the price strictly positive for finite inputs.
    pub fn step(&self, s: f64, dt: f64, z: f64, jump_count: f64, jump_size: f64) -> f64 {
        s * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * z
            + jump_count * jump_size)
            .exp()
    }
}
