//! Monte Carlo path generation for the jump-diffusion simulator.

pub mod simulation;

pub use simulation::{simulate, JumpDiffusionPathGenerator, SimulatedPath, SimulationParams};
