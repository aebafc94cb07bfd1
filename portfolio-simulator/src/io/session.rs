use super::command::{Command, HELP};
use super::render;
use crate::engine::PortfolioSimulator;
use crate::error::Result;
use log::{debug, info};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Text to show the user; the session keeps reading.
    Continue(String),
    Quit,
}

/// Binds a simulator to a line-oriented terminal.
///
/// Intents are applied strictly one at a time, in input order.
pub struct Session {
    simulator: PortfolioSimulator,
}

impl Session {
    pub fn new(simulator: PortfolioSimulator) -> Self {
        Self { simulator }
    }

    pub fn simulator(&self) -> &PortfolioSimulator {
        &self.simulator
    }

    /// Parses and applies a single line. Errors are rendered, never returned,
    /// so a bad line cannot end the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(e) => Outcome::Continue(format!("Error: {}", e)),
        }
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!("Handling {:?}", command);
        let sim = &mut self.simulator;

        let result: Result<String> = match command {
            Command::SetAllocation { asset, input } => sim
                .set_allocation_input(asset, &input)
                .map(|_| render::render(sim)),
            Command::Start => sim.start().map(|_| render::render(sim)),
            Command::Advance => {
                // Only the outcome matters; the view re-reads the simulator.
                let advanced: Result<()> = sim.advance().map(|_| ());
                advanced.map(|()| render::render(sim))
            }
            Command::Reset => {
                sim.reset();
                Ok(render::render(sim))
            }
            Command::Show => Ok(render::render(sim)),
            Command::History => Ok(render::render_history(sim)),
            Command::Json => Ok(snapshot_json(sim)),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => return Outcome::Quit,
        };

        match result {
            Ok(text) => Outcome::Continue(text),
            Err(e) => Outcome::Continue(format!("Error: {}", e)),
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!("Interactive session started");
        writeln!(output, "{}", render::render(&self.simulator))?;
        writeln!(output, "Type 'help' for commands.")?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }

            match self.handle_line(&line) {
                Outcome::Continue(text) => writeln!(output, "{}", text)?,
                Outcome::Quit => break,
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        info!("Interactive session finished");
        Ok(())
    }
}

/// Starts the simulation and advances it until the final result is known.
pub fn run_to_completion(sim: &mut PortfolioSimulator) -> Result<f64> {
    sim.start()?;
    loop {
        sim.advance()?;
        if let Some(result) = sim.final_result() {
            return Ok(result);
        }
    }
}

pub fn snapshot_json(sim: &PortfolioSimulator) -> String {
    // Plain floats and enums only; serialization cannot fail.
    serde_json::to_string_pretty(&sim.snapshot()).unwrap_or_default()
}
