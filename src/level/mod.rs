//! Levels: descriptions, generation into a table, and seeded deals.
//!
//! ## Key Types
//!
//! - `Placement`: one card's starting rank, suit, geometry and face
//! - `LevelDescription`: playfield and draw/discard placements
//! - `generate`: rebuild a `TableState` from a description
//! - `deal_classic`: seeded three-peak layout

pub mod deal;
pub mod description;
pub mod generator;

pub use deal::{deal_classic, TABLEAU_SIZE};
pub use description::{LevelDescription, Placement};
pub use generator::{generate, GenerationReport};
