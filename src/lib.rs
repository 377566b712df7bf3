//! Starship Fleet
//!
//! A small demonstration of trait-based polymorphism.
//!
//! # Overview
//!
//! Two ship classes, [`Battlecruiser`] and [`Starfighter`], each implement
//! the [`Starship`] trait on their own. The [`move_ship`] dispatch function
//! is generic over that trait, so either ship can be moved without the
//! dispatch knowing which one it was handed.
//!
//! # Modules
//!
//! - [`models`] - Ship classes, the `Starship` trait, constants and errors
//! - [`services`] - The shared dispatch logic and the fleet run
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Formatting of movement notifications
//! - [`cli`] - Command-line flags
//!
//! # Example
//!
//! ```rust
//! use starship::{move_ship, Battlecruiser};
//! use starship::io::TerminalIO;
//!
//! let mut bc = Battlecruiser::default();
//! let fuel_used = move_ship(&mut bc, "north", 2, &mut TerminalIO::new());
//! assert_eq!(fuel_used, 4);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::battlecruiser::Battlecruiser;
pub use models::errors::{ShipError, ShipResult};
pub use models::starfighter::Starfighter;
pub use models::starship::Starship;
pub use services::dispatch::{move_ship, move_ship_checked, ship_type_name};
pub use services::fleet::Fleet;
