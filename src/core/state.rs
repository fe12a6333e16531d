//! Table state: every card, the draw order, and the discard top.
//!
//! ## TableState
//!
//! - Card arena (indexed by `CardId`)
//! - (rank, suit) lookup index
//! - Draw pile order
//! - Current discard-pile top
//!
//! `TableState` is the only owner of `Card` values. Other components hold
//! `CardId`s and borrow cards through this API for the duration of one call.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::entity::CardId;
use crate::cards::{Card, Rank, Suit};
use crate::zones::{DrawPile, Zone};

/// Number of cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// All game state for one level.
///
/// ## Usage
///
/// ```
/// use tripeaks_core::core::TableState;
/// use tripeaks_core::zones::Zone;
///
/// let table = TableState::standard();
/// assert_eq!(table.len(), 52);
/// assert!(table.all_cards().iter().all(|c| c.zone == Zone::Deck && !c.face_up));
/// assert_eq!(table.draw_stack_size(), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableState {
    /// Card arena. `cards[i].id() == CardId(i)`.
    cards: Vec<Card>,

    /// Card lookup by identity.
    by_identity: FxHashMap<(Rank, Suit), CardId>,

    /// Remaining draw stack.
    draw: DrawPile,

    /// Current discard-pile top.
    top_discard: Option<CardId>,
}

impl TableState {
    /// Create an empty table (no cards).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding a fresh standard deck.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.init_standard_deck();
        table
    }

    /// Clear all state and create 52 face-down cards in the deck zone.
    ///
    /// The draw pile is left empty; populating it is the generator's job.
    pub fn init_standard_deck(&mut self) {
        self.reset();

        for suit in Suit::ALL {
            for rank in Rank::all() {
                let id = CardId(self.cards.len() as u32);
                self.cards.push(Card::new(id, rank, suit));
                self.by_identity.insert((rank, suit), id);
            }
        }

        debug!(cards = self.cards.len(), "initialized standard deck");
    }

    /// Drop all cards, the draw order and the discard top.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.by_identity.clear();
        self.draw.clear();
        self.top_discard = None;
    }

    pub(crate) fn from_parts(cards: Vec<Card>, draw: DrawPile, top_discard: Option<CardId>) -> Self {
        let by_identity = cards.iter().map(|c| ((c.rank(), c.suit()), c.id())).collect();
        Self {
            cards,
            by_identity,
            draw,
            top_discard,
        }
    }

    // === Cards ===

    /// Total number of cards (active or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card. Unknown IDs yield `None`.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Mutable access to a card. Unknown IDs yield `None`.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Find a card by rank and suit.
    #[must_use]
    pub fn find(&self, rank: Rank, suit: Suit) -> Option<CardId> {
        self.by_identity.get(&(rank, suit)).copied()
    }

    /// All cards in ID order.
    #[must_use]
    pub fn all_cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn all_cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Cards currently in a zone, in ID order.
    pub fn cards_in(&self, zone: Zone) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |c| c.zone == zone)
    }

    /// Number of cards still on the playfield. Zero means the level is won.
    #[must_use]
    pub fn playfield_count(&self) -> usize {
        self.cards_in(Zone::Playfield).count()
    }

    // === Discard ===

    /// Set the discard-pile top. Returns false (no change) for unknown IDs.
    pub fn set_top_discard(&mut self, id: CardId) -> bool {
        if self.card(id).is_none() {
            return false;
        }
        self.top_discard = Some(id);
        true
    }

    /// Restore a previously captured discard top, including "none".
    pub fn restore_top_discard(&mut self, id: Option<CardId>) {
        self.top_discard = id;
    }

    #[must_use]
    pub fn top_discard(&self) -> Option<CardId> {
        self.top_discard
    }

    /// The discard-pile top card, if any.
    #[must_use]
    pub fn top_discard_card(&self) -> Option<&Card> {
        self.top_discard.and_then(|id| self.card(id))
    }

    // === Draw Stack ===

    /// Append to the back of the draw stack (generation only).
    pub fn push_draw_stack(&mut self, id: CardId) {
        self.draw.push_back(id);
    }

    /// Remove and return the next card to draw.
    pub fn pop_next_draw(&mut self) -> Option<CardId> {
        self.draw.pop_front()
    }

    /// Put a card back on top of the draw stack (undo of a draw).
    pub fn push_draw_stack_front(&mut self, id: CardId) {
        self.draw.push_front(id);
    }

    #[must_use]
    pub fn draw_stack_size(&self) -> usize {
        self.draw.len()
    }

    /// Next card to draw without removing it.
    #[must_use]
    pub fn peek_next_draw(&self) -> Option<CardId> {
        self.draw.front()
    }

    /// Draw stack in draw order.
    #[must_use]
    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw
    }

    /// Draw-stack IDs, next draw first.
    pub fn draw_sequence(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw.iter()
    }

    // === Invariants ===

    /// Check the table invariants.
    ///
    /// - every card's ID equals its arena index
    /// - no (rank, suit) appears twice
    /// - a card is in the draw pile exactly once iff its zone is `Deck`
    /// - the discard top, if set, is a `Discard` card
    pub fn check_invariants(&self) -> Result<(), String> {
        for (index, card) in self.cards.iter().enumerate() {
            if card.id().index() != index {
                return Err(format!("{} stored at index {index}", card.id()));
            }
        }

        if self.by_identity.len() != self.cards.len() {
            return Err("duplicate rank/suit in card set".to_string());
        }

        let mut seen = vec![false; self.cards.len()];
        for id in self.draw.iter() {
            let Some(card) = self.card(id) else {
                return Err(format!("draw pile references unknown {id}"));
            };
            if card.zone != Zone::Deck {
                return Err(format!("{id} in draw pile but zone is {}", card.zone));
            }
            if std::mem::replace(&mut seen[id.index()], true) {
                return Err(format!("{id} appears twice in draw pile"));
            }
        }
        if let Some(card) = self.cards.iter().find(|c| c.zone == Zone::Deck && !seen[c.id().index()]) {
            return Err(format!("{} in deck zone but not in draw pile", card.id()));
        }

        if let Some(top) = self.top_discard {
            match self.card(top) {
                Some(card) if card.zone == Zone::Discard => {}
                Some(card) => return Err(format!("discard top {top} is in zone {}", card.zone)),
                None => return Err(format!("discard top references unknown {top}")),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck() {
        let table = TableState::standard();

        assert_eq!(table.len(), STANDARD_DECK_SIZE);
        assert!(table.all_cards().iter().all(|c| c.zone == Zone::Deck));
        assert!(table.all_cards().iter().all(|c| !c.face_up));
        assert_eq!(table.draw_stack_size(), 0);
        assert_eq!(table.top_discard(), None);
    }

    #[test]
    fn test_standard_deck_id_layout() {
        let table = TableState::standard();

        let first = table.card(CardId(0)).unwrap();
        assert_eq!(first.rank(), Rank::ACE);
        assert_eq!(first.suit(), Suit::Clubs);

        let last = table.card(CardId(51)).unwrap();
        assert_eq!(last.rank(), Rank::KING);
        assert_eq!(last.suit(), Suit::Spades);

        assert_eq!(table.find(Rank::new(2).unwrap(), Suit::Diamonds), Some(CardId(14)));
    }

    #[test]
    fn test_init_clears_previous_state() {
        let mut table = TableState::standard();
        table.push_draw_stack(CardId(3));
        table.card_mut(CardId(5)).unwrap().zone = Zone::Discard;
        table.set_top_discard(CardId(5));

        table.init_standard_deck();

        assert_eq!(table.len(), 52);
        assert_eq!(table.draw_stack_size(), 0);
        assert_eq!(table.top_discard(), None);
        assert_eq!(table.card(CardId(5)).unwrap().zone, Zone::Deck);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let mut table = TableState::standard();

        assert!(table.card(CardId(52)).is_none());
        assert!(table.card_mut(CardId(999)).is_none());
        assert!(!table.set_top_discard(CardId(999)));
        assert_eq!(table.top_discard(), None);
    }

    #[test]
    fn test_playfield_count() {
        let mut table = TableState::standard();
        assert_eq!(table.playfield_count(), 0);

        table.card_mut(CardId(1)).unwrap().zone = Zone::Playfield;
        table.card_mut(CardId(2)).unwrap().zone = Zone::Playfield;

        assert_eq!(table.playfield_count(), 2);
    }

    #[test]
    fn test_draw_stack_order() {
        let mut table = TableState::standard();
        table.push_draw_stack(CardId(7));
        table.push_draw_stack(CardId(8));

        assert_eq!(table.draw_stack_size(), 2);
        assert_eq!(table.peek_next_draw(), Some(CardId(7)));
        assert_eq!(table.pop_next_draw(), Some(CardId(7)));

        table.push_draw_stack_front(CardId(7));
        let order: Vec<_> = table.draw_pile().iter().collect();
        assert_eq!(order, vec![CardId(7), CardId(8)]);
    }

    #[test]
    fn test_pop_empty_draw_stack() {
        let mut table = TableState::standard();
        assert_eq!(table.pop_next_draw(), None);
    }

    #[test]
    fn test_top_discard() {
        let mut table = TableState::standard();
        table.card_mut(CardId(4)).unwrap().zone = Zone::Discard;

        assert!(table.set_top_discard(CardId(4)));
        assert_eq!(table.top_discard(), Some(CardId(4)));
        assert_eq!(table.top_discard_card().unwrap().id(), CardId(4));

        table.restore_top_discard(None);
        assert_eq!(table.top_discard(), None);
        assert!(table.top_discard_card().is_none());
    }

    #[test]
    fn test_invariants_detect_deck_card_missing_from_pile() {
        // A fresh deck has every card in Deck zone but an empty pile.
        let table = TableState::standard();
        assert!(table.check_invariants().is_err());
    }

    #[test]
    fn test_invariants_hold_after_manual_setup() {
        let mut table = TableState::standard();
        for card in table.all_cards_mut() {
            card.zone = Zone::Removed;
        }
        table.card_mut(CardId(0)).unwrap().zone = Zone::Deck;
        table.push_draw_stack(CardId(0));
        table.card_mut(CardId(1)).unwrap().zone = Zone::Discard;
        table.set_top_discard(CardId(1));

        assert_eq!(table.check_invariants(), Ok(()));

        table.card_mut(CardId(1)).unwrap().zone = Zone::Playfield;
        assert!(table.check_invariants().is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut table = TableState::standard();
        table.push_draw_stack(CardId(1));
        let cloned = table.clone();

        table.pop_next_draw();

        assert_eq!(cloned.draw_stack_size(), 1);
        assert_eq!(table.draw_stack_size(), 0);
    }
}
