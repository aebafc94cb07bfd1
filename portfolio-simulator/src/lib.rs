//! A three-round crypto portfolio simulator.
//!
//! `engine` holds the allocation/round state machine, `random` the sources of
//! per-round noise, `models` the configuration and `io` the terminal front end.

pub mod engine;
pub mod error;
pub mod io;
pub mod models;
pub mod random;

pub use engine::PortfolioSimulator;
pub use error::{ConfigError, SimulationError};
pub use models::SimulatorConfig;
