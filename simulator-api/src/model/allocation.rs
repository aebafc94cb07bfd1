use crate::model::asset::Asset;
use serde::{Deserialize, Serialize};

/// Percentage split of the initial investment across the three buckets.
///
/// No invariant is enforced on assignment, so the user can pass through
/// unbalanced (or even NaN) states while editing. The sum is only validated
/// when a simulation is started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    eth: f64,
    btc: f64,
    stable: f64,
}

impl Allocation {
    pub fn new(eth: f64, btc: f64, stable: f64) -> Self {
        Self { eth, btc, stable }
    }

    pub fn get(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Eth => self.eth,
            Asset::Btc => self.btc,
            Asset::Stable => self.stable,
        }
    }

    pub fn set(&mut self, asset: Asset, percent: f64) {
        match asset {
            Asset::Eth => self.eth = percent,
            Asset::Btc => self.btc = percent,
            Asset::Stable => self.stable = percent,
        }
    }

    /// Sum of the three percentages. NaN if any field is NaN.
    pub fn total(&self) -> f64 {
        self.eth + self.btc + self.stable
    }
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            eth: 33.33,
            btc: 33.33,
            stable: 33.34,
        }
    }
}
