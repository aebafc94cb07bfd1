//! Observable simulation state.
//!
//! Includes `Phase` for the coarse lifecycle position and `SimulationSnapshot`,
//! a serializable copy of everything a presentation layer reads after an intent.

use crate::model::{allocation::Allocation, values::AssetValues};
use serde::{Deserialize, Serialize};

/// Lifecycle position of a simulation, derived from its round and final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started (round 0).
    Idle,
    /// Started, final result not yet computed.
    Running,
    /// Final result computed. Terminal until reset.
    Complete,
}

/// A point-in-time copy of the simulator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// The allocation as currently edited (not necessarily valid).
    pub allocation: Allocation,
    /// The current value of each bucket.
    pub values: AssetValues,
    /// Sum of `values`.
    pub total_value: f64,
    /// Round counter, 0 when idle.
    pub round: u32,
    /// One entry per simulated round, oldest first.
    pub history: Vec<AssetValues>,
    /// Total value minus the initial investment, once the simulation completes.
    pub final_result: Option<f64>,
    pub phase: Phase,
}

impl SimulationSnapshot {
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}
