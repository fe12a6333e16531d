//! Level-to-table generation.
//!
//! `generate` rebuilds a `TableState` from a `LevelDescription`:
//! 1. Refuse invalid levels without touching the table
//! 2. Reset to a standard 52-card deck, every card `Removed`
//! 3. Place playfield cards
//! 4. First found stack card becomes the discard top, the rest the draw stack

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::description::{LevelDescription, Placement};
use crate::cards::{Position, Rank, Suit};
use crate::core::config::RuleConfig;
use crate::core::entity::CardId;
use crate::core::error::{Error, Result};
use crate::core::state::TableState;
use crate::zones::Zone;

/// What generation did with a level's placements.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub level_id: u32,
    /// Cards placed on the playfield.
    pub placed_playfield: usize,
    /// Cards placed in the draw stack (excluding the discard top).
    pub drawn: usize,
    /// Placements that named no card, or a card already used.
    pub skipped: usize,
}

fn lookup(table: &TableState, placement: &Placement) -> Option<CardId> {
    let rank = Rank::new(u8::try_from(placement.rank).ok()?)?;
    let suit = Suit::from_index(u8::try_from(placement.suit).ok()?)?;
    table.find(rank, suit)
}

/// Populate `table` from `level`.
///
/// Returns `Error::InvalidLevel` (table untouched) if the level has no
/// playfield cards. Placements that name no card are skipped and logged.
pub fn generate(
    table: &mut TableState,
    level: &LevelDescription,
    config: &RuleConfig,
) -> Result<GenerationReport> {
    if !level.is_valid() {
        warn!(level = level.level_id, "refusing to generate level with empty playfield");
        return Err(Error::InvalidLevel {
            level_id: level.level_id,
        });
    }

    table.init_standard_deck();
    for card in table.all_cards_mut() {
        card.zone = Zone::Removed;
    }

    let mut report = GenerationReport {
        level_id: level.level_id,
        ..GenerationReport::default()
    };

    for placement in &level.playfield {
        let Some(card) = lookup(table, placement).and_then(|id| table.card_mut(id)) else {
            warn!(rank = placement.rank, suit = placement.suit, "playfield placement names no card");
            report.skipped += 1;
            continue;
        };

        if card.zone == Zone::Playfield {
            debug!(card = %card.id(), "duplicate playfield placement, later one wins");
        } else {
            report.placed_playfield += 1;
        }
        card.zone = Zone::Playfield;
        card.position = Position::new(placement.x, placement.y);
        card.stack_order = placement.z_order;
        card.face_up = placement.face_up;
    }
    if report.placed_playfield == 0 {
        warn!(
            level = level.level_id,
            placements = level.playfield.len(),
            "no playfield placement named a card; level starts won"
        );
    }

    let mut top_set = false;
    for placement in &level.stack {
        let Some(card) = lookup(table, placement).and_then(|id| table.card_mut(id)) else {
            warn!(rank = placement.rank, suit = placement.suit, "stack placement names no card");
            report.skipped += 1;
            continue;
        };
        if card.zone != Zone::Removed {
            warn!(card = %card.id(), zone = %card.zone, "stack placement names a card already placed");
            report.skipped += 1;
            continue;
        }

        let id = card.id();
        if top_set {
            card.zone = Zone::Deck;
            card.face_up = false;
            card.position = config.draw_position;
            card.stack_order = report.drawn as i32;
            table.push_draw_stack(id);
            report.drawn += 1;
        } else {
            card.zone = Zone::Discard;
            card.face_up = true;
            card.position = config.discard_position;
            card.stack_order = 0;
            table.set_top_discard(id);
            top_set = true;
        }
    }

    debug!(
        level = report.level_id,
        playfield = report.placed_playfield,
        drawn = report.drawn,
        skipped = report.skipped,
        "generated level"
    );
    Ok(report)
}
