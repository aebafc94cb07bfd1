//! Parsing of the line-oriented commands typed into the simulator prompt.

use simulator::{Asset, ParseAssetError};
use std::str::FromStr;
use thiserror::Error;

/// A user intent read from one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Edit one allocation field. The percentage stays raw text so the
    /// simulator decides whether it is numeric.
    SetAllocation { asset: Asset, input: String },

    /// Validate the allocation and begin round 1.
    Start,

    /// Simulate the next round.
    Advance,

    /// Restore the default allocation and clear the run.
    Reset,

    /// Print the current view.
    Show,

    /// Print one line per simulated round.
    History,

    /// Print the observable state as JSON.
    Json,

    Help,

    Quit,
}

impl Command {
    pub fn is_quit(&self) -> bool {
        matches!(self, Command::Quit)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (type 'help' for the list)")]
    Unknown(String),

    #[error("Usage: set <eth|btc|stable> <percent>")]
    MissingPercent,

    #[error(transparent)]
    Asset(#[from] ParseAssetError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();
        let rest: Vec<&str> = words.collect();

        let command = match head.as_str() {
            "start" => Command::Start,
            "next" | "n" | "advance" => Command::Advance,
            "reset" => Command::Reset,
            "show" | "status" => Command::Show,
            "history" => Command::History,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "set" => {
                let asset: Asset = rest.first().ok_or(CommandError::MissingPercent)?.parse()?;
                parse_set(asset, &rest[1..])?
            }
            other => match other.parse::<Asset>() {
                // Shorthand: `eth 50`
                Ok(asset) => parse_set(asset, &rest)?,
                Err(_) => return Err(CommandError::Unknown(other.to_string())),
            },
        };
        Ok(command)
    }
}

fn parse_set(asset: Asset, rest: &[&str]) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingPercent);
    }
    Ok(Command::SetAllocation {
        asset,
        input: rest.join(" "),
    })
}

pub const HELP: &str = "\
Commands:
  set <eth|btc|stable> <percent>   edit one allocation (shorthand: eth 50)
  start                            validate the allocation and begin round 1
  next                             simulate the next round
  reset                            restore the default allocation
  show                             print the current state
  history                          print every simulated round
  json                             print the state as JSON
  help                             print this message
  quit                             leave the simulator";
