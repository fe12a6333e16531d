//! Zone system for card locations.
//!
//! A card is in exactly one `Zone` at any time. The only ordered zone is the
//! deck, whose order lives in `DrawPile`.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, Playfield, Discard, Removed
//! - `DrawPile`: ordered draw stack, front = next to draw

pub mod draw_pile;

pub use draw_pile::DrawPile;

use serde::{Deserialize, Serialize};

/// Logical location of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// In the draw stack (face-down).
    Deck,
    /// On the tableau.
    Playfield,
    /// On the discard pile.
    Discard,
    /// Not part of the current level.
    Removed,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "Deck",
            Zone::Playfield => "Playfield",
            Zone::Discard => "Discard",
            Zone::Removed => "Removed",
        };
        f.write_str(name)
    }
}
