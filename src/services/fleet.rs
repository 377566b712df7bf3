use crate::cli::args::Args;
use crate::io::OutputWriter;
use crate::models::battlecruiser::Battlecruiser;
use crate::models::starfighter::Starfighter;
use crate::services::dispatch::move_ship;

/// The ships after a run, with whatever fuel they have left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    pub battlecruiser: Battlecruiser,
    pub starfighter: Starfighter,
}

impl Fleet {
    pub fn new(initial_fuel: i32) -> Self {
        Fleet {
            battlecruiser: Battlecruiser::with_fuel(initial_fuel),
            starfighter: Starfighter::with_fuel(initial_fuel),
        }
    }
}

/// Moves the battlecruiser 2 km north, then the starfighter 1 km east
///
/// # Arguments
///
/// * `args` - Parsed command-line flags; only the starting fuel is used here
/// * `output` - Output writer for the movement notifications
///
/// # Returns
///
/// The fleet after both moves
pub fn run(args: &Args, output: &mut dyn OutputWriter) -> Fleet {
    let mut fleet = Fleet::new(args.initial_fuel);

    move_ship(&mut fleet.battlecruiser, "north", 2, output);
    tracing::debug!(
        fuel_left = fleet.battlecruiser.fuel_amount_left(),
        "battlecruiser tank"
    );

    move_ship(&mut fleet.starfighter, "east", 1, output);
    tracing::debug!(
        fuel_left = fleet.starfighter.fuel_amount_left(),
        "starfighter tank"
    );

    fleet
}
