use super::constants::{INITIAL_FUEL, STARFIGHTER_FUEL_RATE};
use super::starship::Starship;

/// Something light and fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Starfighter {
    fuel_amount_left: i32,
}

impl Starfighter {
    pub fn with_fuel(fuel: i32) -> Self {
        Starfighter {
            fuel_amount_left: fuel,
        }
    }

    pub fn fuel_amount_left(&self) -> i32 {
        self.fuel_amount_left
    }
}

impl Default for Starfighter {
    fn default() -> Self {
        Self::with_fuel(INITIAL_FUEL)
    }
}

impl Starship for Starfighter {
    fn move_in(&mut self, direction: &str, distance: i32) {
        tracing::debug!(direction, distance, "starfighter thrusters engaged");
    }

    fn calculate_fuel_used(&mut self, distance: i32) -> i32 {
        // Wraps on overflow; the tank has no floor or ceiling
        let used = distance.wrapping_mul(STARFIGHTER_FUEL_RATE);
        self.fuel_amount_left = self.fuel_amount_left.wrapping_sub(used);
        used
    }
}
