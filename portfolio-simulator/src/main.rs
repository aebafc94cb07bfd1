use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use portfolio_simulator::io::session::{run_to_completion, snapshot_json};
use portfolio_simulator::io::{render, Args, Session};
use portfolio_simulator::{random, PortfolioSimulator, SimulatorConfig};
use std::io::{stdin, stdout};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 1. Configuration
    let config = SimulatorConfig::load(args.config.as_deref())
        .context("Failed to load simulator configuration")?;
    info!("Loaded configuration: {:?}", config);

    // 2. Simulator with its random source
    let mut simulator = PortfolioSimulator::new(config, random::from_seed(args.seed));
    for (asset, percent) in args.allocation_overrides() {
        if let Some(percent) = percent {
            simulator.set_allocation(asset, percent);
        }
    }

    // 3. Run
    if args.auto {
        if let Err(e) = run_to_completion(&mut simulator) {
            error!("Simulation failed: {}", e);
            return Err(e.into());
        }
        if args.json {
            println!("{}", snapshot_json(&simulator));
        } else {
            println!("{}", render::render(&simulator));
            println!("{}", render::render_history(&simulator));
        }
        return Ok(());
    }

    let mut session = Session::new(simulator);
    session.run(stdin().lock(), stdout().lock())?;

    Ok(())
}
