//! Ordered draw stack.
//!
//! The `DrawPile` tracks the order of cards remaining in the deck:
//! - `push_back` appends during level generation
//! - `pop_front` draws the next card
//! - `push_front` puts a card back on top (undo of a draw)
//!
//! Backed by `im::Vector`, so both ends are O(1) amortized and cloning a
//! table is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Ordered draw stack. Index 0 is the next card to draw.
///
/// ## Usage
///
/// ```
/// use tripeaks_core::zones::DrawPile;
/// use tripeaks_core::core::CardId;
///
/// let mut pile = DrawPile::new();
/// pile.push_back(CardId(10));
/// pile.push_back(CardId(11));
///
/// assert_eq!(pile.pop_front(), Some(CardId(10)));
/// pile.push_front(CardId(10));
/// assert_eq!(pile.front(), Some(CardId(10)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawPile {
    order: Vector<CardId>,
}

impl DrawPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the back (drawn last).
    pub fn push_back(&mut self, card: CardId) {
        self.order.push_back(card);
    }

    /// Put a card on the front (drawn next).
    pub fn push_front(&mut self, card: CardId) {
        self.order.push_front(card);
    }

    /// Remove and return the next card, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<CardId> {
        self.order.pop_front()
    }

    /// Next card to draw without removing it.
    #[must_use]
    pub fn front(&self) -> Option<CardId> {
        self.order.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.order.contains(&card)
    }

    /// Cards in draw order.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.order.iter().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

impl FromIterator<CardId> for DrawPile {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self {
            order: iter.into_iter().collect(),
        }
    }
}
