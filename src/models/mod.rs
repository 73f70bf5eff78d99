//! Stochastic process models driving the simulation engine.

pub mod jump_diffusion;

pub use jump_diffusion::JumpDiffusion;
