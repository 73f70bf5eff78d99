//! Common error types shared by the market, model, and simulation layers.

/// Errors surfaced by series construction, parameter validation, and simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Upstream price source is empty or unreachable. Never retried here; data
    /// acquisition owns recovery.
    DataUnavailable(String),
    /// Historical series is too short to derive the statistics the model needs.
    InsufficientData(String),
    /// Numeric parameter outside its allowed domain. Raised before any
    /// simulation work begins.
    InvalidParameter(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DataUnavailable(msg) => write!(f, "market data unavailable: {msg}"),
            Self::InsufficientData(msg) => write!(f, "insufficient data: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}
