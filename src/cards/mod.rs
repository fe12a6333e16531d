//! Card system: ranks, suits, positions and card entities.
//!
//! ## Key Types
//!
//! - `Rank`: Ace (1) through King (13)
//! - `Suit`: the four suits, encoded 0-3
//! - `Position`: logical table coordinate
//! - `Card`: identity plus placement state

pub mod card;

pub use card::{Card, Position, Rank, Suit};
