//! Rule evaluation over a `TableState`.
//!
//! - Match rule: ranks one apart, no King-Ace wrap
//! - Occlusion: a playfield card lower on the table covers the cards it overlaps above it
//! - Deadlock: no face-up playfield card matches the discard top
//!
//! Everything here is a pure read except `recompute_face_up`.

use smallvec::SmallVec;

use super::GameStatus;
use crate::cards::{Card, Position};
use crate::core::config::RuleConfig;
use crate::core::entity::CardId;
use crate::core::state::TableState;
use crate::zones::Zone;

/// IDs whose face-up flag changed during a recompute.
pub type Flipped = SmallVec<[CardId; 8]>;

/// Can `hand` be played onto `target`?
///
/// True iff the ranks differ by exactly one. King and Ace do not connect.
#[must_use]
pub fn can_match(hand: &Card, target: &Card) -> bool {
    hand.rank().distance(target.rank()) == 1
}

/// `can_match` by ID. Unknown or removed cards never match.
#[must_use]
pub fn can_match_ids(table: &TableState, hand: CardId, target: CardId) -> bool {
    match (table.card(hand), table.card(target)) {
        (Some(h), Some(t)) if h.is_active() && t.is_active() => can_match(h, t),
        _ => false,
    }
}

/// Does a card at `upper` get covered by a card at `lower`?
///
/// Only a card strictly lower on the table can cover, and only when the two
/// footprints overlap on both axes.
#[must_use]
pub fn covers(lower: Position, upper: Position, config: &RuleConfig) -> bool {
    lower.y < upper.y
        && (upper.x - lower.x).abs() < config.cover_width
        && (upper.y - lower.y).abs() < config.cover_height
}

/// Is the playfield card `id` covered by any other playfield card?
///
/// Cards off the playfield are never covered.
#[must_use]
pub fn is_covered(table: &TableState, id: CardId, config: &RuleConfig) -> bool {
    let Some(target) = table.card(id).filter(|c| c.zone == Zone::Playfield) else {
        return false;
    };
    table
        .cards_in(Zone::Playfield)
        .any(|other| other.id() != id && covers(other.position, target.position, config))
}

/// Set every playfield card face-up iff nothing covers it.
///
/// Idempotent. Returns the IDs whose flag changed, in ID order.
pub fn recompute_face_up(table: &mut TableState, config: &RuleConfig) -> Flipped {
    let playfield: Vec<(CardId, Position)> = table
        .cards_in(Zone::Playfield)
        .map(|c| (c.id(), c.position))
        .collect();

    let mut flipped = Flipped::new();
    for &(id, position) in &playfield {
        let covered = playfield
            .iter()
            .any(|&(other, lower)| other != id && covers(lower, position, config));

        if let Some(card) = table.card_mut(id) {
            if card.face_up == covered {
                card.face_up = !covered;
                flipped.push(id);
            }
        }
    }
    flipped
}

/// Face-up playfield cards that can be played onto the discard top.
#[must_use]
pub fn playable_cards(table: &TableState) -> Vec<CardId> {
    let Some(top) = table.top_discard_card() else {
        return Vec::new();
    };
    table
        .cards_in(Zone::Playfield)
        .filter(|c| c.face_up && can_match(c, top))
        .map(Card::id)
        .collect()
}

/// Is any playfield move available against the discard top?
#[must_use]
pub fn has_any_move(table: &TableState) -> bool {
    let Some(top) = table.top_discard_card() else {
        return false;
    };
    table
        .cards_in(Zone::Playfield)
        .any(|c| c.face_up && can_match(c, top))
}

/// Win if the playfield is empty, loss if nothing can be drawn or played.
///
/// The win check runs first, so an empty playfield never reports a loss.
#[must_use]
pub fn evaluate(table: &TableState) -> GameStatus {
    if table.playfield_count() == 0 {
        GameStatus::Won
    } else if table.draw_stack_size() == 0 && !has_any_move(table) {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}
