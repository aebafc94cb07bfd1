//! Currency value held in each bucket.

use crate::model::asset::Asset;
use serde::{Deserialize, Serialize};

/// Current value of each bucket. Values are never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetValues {
    pub eth: f64,
    pub btc: f64,
    pub stable: f64,
}

impl AssetValues {
    pub fn new(eth: f64, btc: f64, stable: f64) -> Self {
        Self { eth, btc, stable }
    }

    /// Builds a set of values by calling `f` once per bucket.
    ///
    /// `f` is invoked in `Asset::ALL` order, which keeps sequences drawn from a
    /// random source reproducible.
    pub fn from_fn(mut f: impl FnMut(Asset) -> f64) -> Self {
        let eth = f(Asset::Eth);
        let btc = f(Asset::Btc);
        let stable = f(Asset::Stable);
        Self { eth, btc, stable }
    }

    pub fn get(&self, asset: Asset) -> f64 {
        match asset {
            Asset::Eth => self.eth,
            Asset::Btc => self.btc,
            Asset::Stable => self.stable,
        }
    }

    pub fn total(&self) -> f64 {
        self.eth + self.btc + self.stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_visits_assets_in_order() {
        let mut visited = Vec::new();
        let values = AssetValues::from_fn(|asset| {
            visited.push(asset);
            visited.len() as f64
        });

        assert_eq!(visited, Asset::ALL.to_vec());
        assert_eq!(values, AssetValues::new(1.0, 2.0, 3.0));
        assert_eq!(values.total(), 6.0);
    }
}
