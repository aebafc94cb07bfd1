use crate::error::{Result, SimulationError};
use crate::models::SimulatorConfig;
use log::{debug, info, warn};
use simulator::{Allocation, Asset, AssetValues, Phase, RandomSource, SimulationSnapshot};

/// The allocation/round state machine.
///
/// All state is private and mutated only through the four intents:
/// `set_allocation`, `start`, `advance` and `reset`. The round counter is the
/// state: 0 is idle, `1..=max_rounds` is running, and the final result marks
/// completion.
pub struct PortfolioSimulator {
    config: SimulatorConfig,
    random: Box<dyn RandomSource + Send>,
    allocation: Allocation,
    values: AssetValues,
    round: u32,
    history: Vec<AssetValues>,
    final_result: Option<f64>,
}

impl PortfolioSimulator {
    pub fn new(config: SimulatorConfig, random: Box<dyn RandomSource + Send>) -> Self {
        Self {
            allocation: config.default_allocation(),
            config,
            random,
            values: AssetValues::default(),
            round: 0,
            history: Vec::new(),
            final_result: None,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    pub fn values(&self) -> &AssetValues {
        &self.values
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn history(&self) -> &[AssetValues] {
        &self.history
    }

    pub fn final_result(&self) -> Option<f64> {
        self.final_result
    }

    pub fn total_value(&self) -> f64 {
        self.values.total()
    }

    pub fn phase(&self) -> Phase {
        if self.final_result.is_some() {
            Phase::Complete
        } else if self.round == 0 {
            Phase::Idle
        } else {
            Phase::Running
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase() == Phase::Complete
    }

    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            allocation: self.allocation,
            values: self.values,
            total_value: self.total_value(),
            round: self.round,
            history: self.history.clone(),
            final_result: self.final_result,
            phase: self.phase(),
        }
    }

    /// Overwrites one allocation field. Nothing is validated here.
    pub fn set_allocation(&mut self, asset: Asset, percent: f64) {
        debug!("Allocation for {} set to {}", asset, percent);
        self.allocation.set(asset, percent);
    }

    /// Parses user-entered text and stores it as the allocation of `asset`.
    ///
    /// Text that is not a finite number is rejected and the allocation is
    /// left untouched.
    pub fn set_allocation_input(&mut self, asset: Asset, input: &str) -> Result<f64> {
        let percent = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| {
                warn!("Rejected non-numeric input {:?} for {}", input, asset);
                SimulationError::InvalidNumericInput {
                    asset,
                    input: input.to_string(),
                }
            })?;

        self.set_allocation(asset, percent);
        Ok(percent)
    }

    /// Validates the allocation and seeds the buckets from the initial investment.
    pub fn start(&mut self) -> Result<()> {
        let total = self.allocation.total();
        // NaN fails this check, so an unparsed field can never start a run.
        let balanced = (total - 100.0).abs() <= self.config.allocation_tolerance();
        if !balanced {
            warn!(
                "Start rejected: allocation sums to {:.4}% (tolerance {})",
                total,
                self.config.allocation_tolerance()
            );
            return Err(SimulationError::InvalidAllocation { total });
        }

        let investment = self.config.initial_investment();
        let allocation = self.allocation;
        self.values = AssetValues::from_fn(|asset| (allocation.get(asset) / 100.0) * investment);
        self.history.clear();
        self.round = 1;
        self.final_result = None;

        info!(
            "Simulation started: ETH {:.2}, BTC {:.2}, Stable {:.2}",
            self.values.eth, self.values.btc, self.values.stable
        );
        Ok(())
    }

    /// Applies one round of independent random changes to every bucket.
    ///
    /// Before the last round this moves the counter forward; at the last
    /// round it computes the final result instead and the simulation becomes
    /// terminal.
    pub fn advance(&mut self) -> Result<&AssetValues> {
        if self.final_result.is_some() {
            warn!("Advance rejected: simulation already complete");
            return Err(SimulationError::AlreadyComplete);
        }
        if self.round == 0 {
            warn!("Advance rejected: simulation not started");
            return Err(SimulationError::NotStarted);
        }

        // Decided from the round that led into this call.
        let finalize = self.round >= self.config.max_rounds();

        let previous = self.values;
        let next = AssetValues::from_fn(|asset| previous.get(asset) * (1.0 + self.draw_factor()));
        self.values = next;
        self.history.push(next);

        debug!(
            "Round {}: ETH {:.2}, BTC {:.2}, Stable {:.2}",
            self.round, next.eth, next.btc, next.stable
        );

        if finalize {
            let result = next.total() - self.config.initial_investment();
            info!("Simulation complete: profit/loss {:.2}", result);
            self.final_result = Some(result);
        } else {
            self.round += 1;
        }

        Ok(&self.values)
    }

    /// Restores the default allocation and clears every other field.
    pub fn reset(&mut self) {
        self.allocation = self.config.default_allocation();
        self.values = AssetValues::default();
        self.round = 0;
        self.history.clear();
        self.final_result = None;
        info!("Simulation reset");
    }

    /// Maps a `[0, 1)` sample to a relative change in `[-max, max)`.
    fn draw_factor(&mut self) -> f64 {
        let max_change = self.config.max_round_change();
        (2.0 * self.random.next_unit() - 1.0) * max_change
    }
}
