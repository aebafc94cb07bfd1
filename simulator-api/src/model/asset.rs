//! Defines the asset buckets a portfolio is split across.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three buckets of the simulated portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Eth,
    Btc,
    Stable,
}

impl Asset {
    /// All buckets in their canonical order.
    ///
    /// Every per-bucket operation (allocation, random draws, rendering) walks
    /// the buckets in this order.
    pub const ALL: [Asset; 3] = [Asset::Eth, Asset::Btc, Asset::Stable];

    /// Returns the short identifier used on the command line (e.g. `eth`).
    pub fn get_id(&self) -> &'static str {
        match self {
            Asset::Eth => "eth",
            Asset::Btc => "btc",
            Asset::Stable => "stable",
        }
    }

    /// Returns the human-readable label shown to the user.
    pub fn get_label(&self) -> &'static str {
        match self {
            Asset::Eth => "ETH",
            Asset::Btc => "BTC",
            Asset::Stable => "Stablecoins",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown asset '{0}' (expected one of: eth, btc, stable)")]
pub struct ParseAssetError(pub String);

impl FromStr for Asset {
    type Err = ParseAssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eth" => Ok(Asset::Eth),
            "btc" => Ok(Asset::Btc),
            "stable" | "stables" | "stablecoin" | "stablecoins" | "usd" => Ok(Asset::Stable),
            _ => Err(ParseAssetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset_aliases() {
        assert_eq!("ETH".parse::<Asset>().unwrap(), Asset::Eth);
        assert_eq!(" btc ".parse::<Asset>().unwrap(), Asset::Btc);
        assert_eq!("Stablecoins".parse::<Asset>().unwrap(), Asset::Stable);
        assert_eq!("usd".parse::<Asset>().unwrap(), Asset::Stable);

        let err = "doge".parse::<Asset>().unwrap_err();
        assert_eq!(err, ParseAssetError("doge".to_string()));
    }

    #[test]
    fn test_asset_serialization() {
        let json = serde_json::to_string(&Asset::Stable).unwrap();
        assert_eq!(json, "\"stable\"");
        assert_eq!(Asset::Btc.to_string(), "btc");
    }
}
