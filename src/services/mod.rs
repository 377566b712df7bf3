//! Ship services
//!
//! Behaviour shared by every ship class, written once against the
//! `Starship` trait.

pub mod dispatch;
pub mod fleet;
