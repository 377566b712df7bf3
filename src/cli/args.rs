use clap::Parser;
use tracing::Level;

use crate::models::constants::INITIAL_FUEL;

/// Move a battlecruiser and a starfighter through the shared dispatch
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Starting fuel for every ship, in litres
    #[arg(long, default_value_t = INITIAL_FUEL, allow_negative_numbers = true)]
    pub initial_fuel: i32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the verbosity flag
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
