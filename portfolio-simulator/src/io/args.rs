use clap::Parser;
use simulator::Asset;
use std::path::PathBuf;

/// Three-round crypto portfolio simulator.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Optional TOML file with simulation constants
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible rounds (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial ETH allocation in percent
    #[arg(long)]
    pub eth: Option<f64>,

    /// Initial BTC allocation in percent
    #[arg(long)]
    pub btc: Option<f64>,

    /// Initial stablecoin allocation in percent
    #[arg(long)]
    pub stable: Option<f64>,

    /// Run every round without prompting and print the outcome
    #[arg(long)]
    pub auto: bool,

    /// Print the final state as JSON (with --auto)
    #[arg(long, requires = "auto")]
    pub json: bool,
}

impl Args {
    /// Allocation overrides given on the command line, in asset order.
    pub fn allocation_overrides(&self) -> [(Asset, Option<f64>); 3] {
        [
            (Asset::Eth, self.eth),
            (Asset::Btc, self.btc),
            (Asset::Stable, self.stable),
        ]
    }
}
