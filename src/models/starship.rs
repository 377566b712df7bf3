//! The capability set every ship class provides.

/// Shared behaviour of all ship classes.
///
/// Each class implements both methods itself; there is no default
/// behaviour to fall back on.
pub trait Starship {
    /// Carry out the class-specific movement in `direction` over `distance` km.
    fn move_in(&mut self, direction: &str, distance: i32);

    /// Burn fuel for `distance` km at the class rate.
    ///
    /// Deducts the amount from the ship's tank and returns it. Distances are
    /// not validated, so a negative distance yields negative fuel used.
    fn calculate_fuel_used(&mut self, distance: i32) -> i32;
}
