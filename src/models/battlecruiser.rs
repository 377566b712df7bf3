use super::constants::{BATTLECRUISER_FUEL_RATE, INITIAL_FUEL};
use super::starship::Starship;

/// Heavy artillery. Slow, and thirsty on fuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battlecruiser {
    fuel_amount_left: i32,
}

impl Battlecruiser {
    pub fn with_fuel(fuel: i32) -> Self {
        Battlecruiser {
            fuel_amount_left: fuel,
        }
    }

    pub fn fuel_amount_left(&self) -> i32 {
        self.fuel_amount_left
    }
}

impl Default for Battlecruiser {
    fn default() -> Self {
        Self::with_fuel(INITIAL_FUEL)
    }
}

impl Starship for Battlecruiser {
    fn move_in(&mut self, direction: &str, distance: i32) {
        tracing::debug!(direction, distance, "battlecruiser engines engaged");
    }

    fn calculate_fuel_used(&mut self, distance: i32) -> i32 {
        // Wraps on overflow; the tank has no floor or ceiling
        let used = distance.wrapping_mul(BATTLECRUISER_FUEL_RATE);
        self.fuel_amount_left = self.fuel_amount_left.wrapping_sub(used);
        used
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_empty_tank() {
        assert_eq!(Battlecruiser::default().fuel_amount_left(), 0);
    }

    #[test]
    fn burns_double_the_distance() {
        let mut bc = Battlecruiser::default();
        assert_eq!(bc.calculate_fuel_used(2), 4);
        assert_eq!(bc.calculate_fuel_used(0), 0);
        assert_eq!(bc.calculate_fuel_used(7), 14);
    }

    #[test]
    fn fuel_is_deducted_from_tank() {
        let mut bc = Battlecruiser::with_fuel(100);
        bc.calculate_fuel_used(10);
        assert_eq!(bc.fuel_amount_left(), 80);
        bc.calculate_fuel_used(5);
        assert_eq!(bc.fuel_amount_left(), 70);
    }

    #[test]
    fn negative_distance_is_not_rejected() {
        let mut bc = Battlecruiser::default();
        assert_eq!(bc.calculate_fuel_used(-3), -6);
        assert_eq!(bc.fuel_amount_left(), 6);
    }

    #[test]
    fn move_in_leaves_fuel_alone() {
        let mut bc = Battlecruiser::with_fuel(42);
        bc.move_in("north", 10);
        assert_eq!(bc.fuel_amount_left(), 42);
    }

    #[test]
    fn huge_distance_wraps_instead_of_panicking() {
        let mut bc = Battlecruiser::default();
        assert_eq!(bc.calculate_fuel_used(i32::MAX), i32::MAX.wrapping_mul(2));
        assert_eq!(bc.calculate_fuel_used(i32::MIN), 0);
    }

    #[test]
    fn nearly_empty_tank_wraps_around() {
        let mut bc = Battlecruiser::with_fuel(i32::MIN + 1);
        assert_eq!(bc.calculate_fuel_used(2), 4);
        assert_eq!(bc.fuel_amount_left(), i32::MAX - 2);
    }
}
