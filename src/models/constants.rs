/// Litres of fuel a battlecruiser burns per km travelled.
pub const BATTLECRUISER_FUEL_RATE: i32 = 2;
/// Litres of fuel a starfighter burns per km travelled.
pub const STARFIGHTER_FUEL_RATE: i32 = 1;

pub const INITIAL_FUEL: i32 = 0;
