use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use simulator::{Allocation, Asset};
use std::path::Path;

/// Prefix of the environment variables that override file settings,
/// e.g. `PORTFOLIO_SIM_MAX_ROUNDS=5`.
pub const ENV_PREFIX: &str = "PORTFOLIO_SIM";

fn default_initial_investment() -> f64 {
    1000.0
}

fn default_max_rounds() -> u32 {
    3
}

fn default_allocation_tolerance() -> f64 {
    0.01
}

fn default_max_round_change() -> f64 {
    0.1
}

/// Constants of a simulation run.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// classic setup: 1000 invested, three rounds of up to ±10% per bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Total amount split across the buckets on start.
    #[serde(default = "default_initial_investment")]
    initial_investment: f64,
    /// Round at which the next advance computes the final result.
    #[serde(default = "default_max_rounds")]
    max_rounds: u32,
    /// Allowed distance of the allocation sum from 100.
    #[serde(default = "default_allocation_tolerance")]
    allocation_tolerance: f64,
    /// Bound of the per-round relative change (0.1 = ±10%).
    #[serde(default = "default_max_round_change")]
    max_round_change: f64,
    /// Allocation restored by reset.
    #[serde(default)]
    default_allocation: Allocation,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_investment: default_initial_investment(),
            max_rounds: default_max_rounds(),
            allocation_tolerance: default_allocation_tolerance(),
            max_round_change: default_max_round_change(),
            default_allocation: Allocation::default(),
        }
    }
}

impl SimulatorConfig {
    /// Loads the configuration from an optional TOML file, then applies
    /// `PORTFOLIO_SIM_*` environment overrides, then validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config = settings.try_deserialize::<SimulatorConfig>()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_investment.is_finite() || self.initial_investment <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial_investment must be a positive number, got {}",
                self.initial_investment
            )));
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::Invalid(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        if !self.allocation_tolerance.is_finite() || self.allocation_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "allocation_tolerance must be non-negative, got {}",
                self.allocation_tolerance
            )));
        }
        if !(0.0..1.0).contains(&self.max_round_change) {
            return Err(ConfigError::Invalid(format!(
                "max_round_change must be in [0, 1), got {}",
                self.max_round_change
            )));
        }
        // Reset restores this allocation, so it must be startable.
        let allocation = self.default_allocation;
        let total = allocation.total();
        let finite = Asset::ALL.iter().all(|asset| allocation.get(*asset).is_finite());
        if !finite || (total - 100.0).abs() > self.allocation_tolerance {
            return Err(ConfigError::Invalid(format!(
                "default_allocation must sum to 100 (within {}), got {}",
                self.allocation_tolerance, total
            )));
        }
        Ok(())
    }

    pub fn with_initial_investment(mut self, amount: f64) -> Self {
        self.initial_investment = amount;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    pub fn with_max_round_change(mut self, change: f64) -> Self {
        self.max_round_change = change;
        self
    }

    pub fn with_default_allocation(mut self, allocation: Allocation) -> Self {
        self.default_allocation = allocation;
        self
    }

    pub fn initial_investment(&self) -> f64 {
        self.initial_investment
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn allocation_tolerance(&self) -> f64 {
        self.allocation_tolerance
    }

    pub fn max_round_change(&self) -> f64 {
        self.max_round_change
    }

    pub fn default_allocation(&self) -> Allocation {
        self.default_allocation
    }
}
