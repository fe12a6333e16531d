//! Seeded classic TriPeaks deals.
//!
//! Builds a `LevelDescription` from a shuffled deck:
//! - 28 tableau cards in three peaks (rows of 3, 6, 9 and 10, top to bottom)
//! - 1 initial discard card
//! - 23 draw-stack cards
//!
//! Row spacing matches the default covering thresholds: each card is covered
//! by the two cards half a column either side of it one row below.

use super::description::{LevelDescription, Placement};
use crate::cards::{Rank, Suit};
use crate::core::rng::GameRng;

/// Horizontal distance between neighbouring bottom-row cards.
const COLUMN_WIDTH: f32 = 100.0;

/// Vertical distance between rows.
const ROW_HEIGHT: f32 = 100.0;

/// Centre of the left-most bottom-row card.
const LEFT_X: f32 = 90.0;

/// Height of the bottom row.
const BOTTOM_Y: f32 = 900.0;

/// Number of tableau cards in a classic deal.
pub const TABLEAU_SIZE: usize = 28;

/// Tableau slots as (x, y, row), top row first.
fn tableau_slots() -> Vec<(f32, f32, usize)> {
    let mut slots = Vec::with_capacity(TABLEAU_SIZE);
    let half = COLUMN_WIDTH / 2.0;
    let peak_span = 3.0 * COLUMN_WIDTH;

    // Row 0: peak tops.
    for peak in 0..3 {
        let x = LEFT_X + 1.5 * COLUMN_WIDTH + peak as f32 * peak_span;
        slots.push((x, BOTTOM_Y + 3.0 * ROW_HEIGHT, 0));
    }
    // Row 1: two cards under each peak top.
    for peak in 0..3 {
        let base = LEFT_X + COLUMN_WIDTH + peak as f32 * peak_span;
        for offset in 0..2 {
            slots.push((base + offset as f32 * COLUMN_WIDTH, BOTTOM_Y + 2.0 * ROW_HEIGHT, 1));
        }
    }
    // Row 2: nine cards between the bottom-row columns.
    for column in 0..9 {
        slots.push((LEFT_X + half + column as f32 * COLUMN_WIDTH, BOTTOM_Y + ROW_HEIGHT, 2));
    }
    // Row 3: ten open cards.
    for column in 0..10 {
        slots.push((LEFT_X + column as f32 * COLUMN_WIDTH, BOTTOM_Y, 3));
    }

    slots
}

/// Deal a classic three-peak level. The same seed always produces the same level.
///
/// ```
/// use tripeaks_core::level::deal_classic;
///
/// let level = deal_classic(42, 1);
/// assert_eq!(level.playfield.len(), 28);
/// assert_eq!(level.stack.len(), 24);
/// assert_eq!(level, deal_classic(42, 1));
/// ```
#[must_use]
pub fn deal_classic(seed: u64, level_id: u32) -> LevelDescription {
    let mut deck: Vec<(i32, i32)> = Suit::ALL
        .iter()
        .flat_map(|suit| {
            Rank::all().map(move |rank| (i32::from(rank.value()), i32::from(suit.index())))
        })
        .collect();

    let mut rng = GameRng::new(seed);
    rng.shuffle(&mut deck);

    let mut cards = deck.into_iter();
    let mut level = LevelDescription::new(level_id);

    for ((x, y, row), (rank, suit)) in tableau_slots().into_iter().zip(cards.by_ref()) {
        level.playfield.push(
            Placement::new(rank, suit)
                .at(x, y)
                .with_z(row as i32)
                .face_up(row == 3),
        );
    }
    level.stack.extend(cards.map(|(rank, suit)| Placement::new(rank, suit)));

    level
}
