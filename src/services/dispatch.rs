use crate::io::OutputWriter;
use crate::models::errors::{ShipError, ShipResult};
use crate::models::starship::Starship;
use crate::ui::presenters::ShipPresenter;

/// Moves any ship and reports the move (the shared dispatch)
///
/// Runs the ship's own movement, then its own fuel calculation, then
/// prints the common notification block. The ship is borrowed mutably, so
/// the fuel it burns stays deducted after the call returns.
///
/// # Arguments
///
/// * `ship` - Any `Starship`
/// * `direction` - Heading, forwarded to the ship and echoed in the notification
/// * `distance` - Distance in km; not validated
/// * `output` - Output writer for the notification
///
/// # Returns
///
/// The litres of fuel used for this move
pub fn move_ship<S: Starship>(
    ship: &mut S,
    direction: &str,
    distance: i32,
    output: &mut dyn OutputWriter,
) -> i32 {
    ship.move_in(direction, distance);

    let fuel_used = ship.calculate_fuel_used(distance);
    tracing::info!(ship = ship_type_name::<S>(), direction, distance, fuel_used, "ship moved");

    ShipPresenter::show_movement(ship_type_name::<S>(), direction, distance, fuel_used, output);
    fuel_used
}

/// Same as [`move_ship`], but refuses negative distances.
///
/// On rejection the ship is untouched and nothing is printed.
pub fn move_ship_checked<S: Starship>(
    ship: &mut S,
    direction: &str,
    distance: i32,
    output: &mut dyn OutputWriter,
) -> ShipResult<i32> {
    if distance < 0 {
        tracing::warn!(distance, "rejected negative distance");
        return Err(ShipError::NegativeDistance(distance));
    }
    Ok(move_ship(ship, direction, distance, output))
}

/// Short name of the concrete ship type, without its module path.
///
/// Generic arguments are dropped, so `Escort<a::Wing>` reads `Escort`.
pub fn ship_type_name<S: ?Sized>() -> &'static str {
    let full = std::any::type_name::<S>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
