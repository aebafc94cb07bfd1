use simulator::Asset;
use thiserror::Error;

/// Errors raised by the simulator intents.
///
/// Every variant leaves the simulator state exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The allocation does not sum to 100% within the configured tolerance.
    #[error("Allocation percentages must sum to 100% (currently {total:.2}%)")]
    InvalidAllocation { total: f64 },

    /// A percentage field could not be read as a finite number.
    #[error("'{input}' is not a valid percentage for {asset}")]
    InvalidNumericInput { asset: Asset, input: String },

    /// `advance` was called before a successful `start`.
    #[error("Simulation has not been started")]
    NotStarted,

    /// `advance` was called after the final result was computed.
    #[error("Simulation is already complete; reset to run it again")]
    AlreadyComplete,
}

/// Errors raised while loading or validating the simulator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A specialized Result type for simulator intents.
pub type Result<T> = std::result::Result<T, SimulationError>;
