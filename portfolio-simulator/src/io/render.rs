//! Text views of the simulator state.
//!
//! Amounts are truncated for display only (two decimals); the simulator keeps
//! full precision.

use crate::engine::PortfolioSimulator;
use simulator::{Asset, AssetValues, Phase};
use std::fmt::Write;

pub const TITLE: &str = "Crypto Portfolio Simulator";

/// Label of the action currently available to the user.
pub fn next_action(sim: &PortfolioSimulator) -> &'static str {
    match sim.phase() {
        Phase::Idle => "Start Simulation",
        Phase::Running if sim.round() < sim.config().max_rounds() => "Simulate Next Round",
        Phase::Running => "Simulate Final Round",
        Phase::Complete => "Simulation Complete",
    }
}

fn values_block(out: &mut String, values: &AssetValues) {
    for asset in Asset::ALL {
        let _ = writeln!(out, "  - {}: ${:.2}", asset.get_label(), values.get(asset));
    }
}

/// The full view: allocation, round results, final result and next action.
pub fn render(sim: &PortfolioSimulator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TITLE);

    let allocation = sim.allocation();
    let fields: Vec<String> = Asset::ALL
        .iter()
        .map(|asset| format!("{} {:.2}%", asset.get_label(), allocation.get(*asset)))
        .collect();
    let _ = writeln!(out, "Allocation: {}", fields.join(" | "));

    if sim.round() > 0 {
        let _ = writeln!(out, "Round {} Results", sim.round());
        values_block(&mut out, sim.values());
    }

    if let Some(result) = sim.final_result() {
        let _ = writeln!(out, "Final Result");
        let _ = writeln!(out, "  Total Portfolio Value: ${:.2}", sim.total_value());
        let outcome = if result >= 0.0 { "gain" } else { "loss" };
        let _ = writeln!(out, "  Profit/Loss: {:.2} ({})", result, outcome);
    }

    let _ = write!(out, "Next: {}", next_action(sim));
    out
}

/// One line per simulated round, oldest first.
pub fn render_history(sim: &PortfolioSimulator) -> String {
    if sim.history().is_empty() {
        return "No rounds simulated yet".to_string();
    }

    sim.history()
        .iter()
        .enumerate()
        .map(|(i, values)| {
            format!(
                "Round {}: ETH ${:.2} | BTC ${:.2} | Stablecoins ${:.2} | Total ${:.2}",
                i + 1,
                values.eth,
                values.btc,
                values.stable,
                values.total()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
