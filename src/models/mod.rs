//! Domain models
//!
//! The `Starship` capability trait and the ship classes that implement it.
//! Models hold fuel state and fuel rules, nothing else.

pub mod battlecruiser;
pub mod constants;
pub mod errors;
pub mod starfighter;
pub mod starship;
