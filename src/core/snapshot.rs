//! Table snapshots.
//!
//! A `TableSnapshot` is a flat, serializable copy of a `TableState`: one
//! `CardRecord` per card plus the draw order and the discard top. It can be
//! written as JSON (`{"cards": [{"id", "face", "suit", "faceUp", ...}]}`) or as
//! compact bincode bytes, and restored into a table.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::entity::CardId;
use super::error::{Error, Result};
use super::state::TableState;
use crate::cards::{Card, Position, Rank, Suit};
use crate::zones::{DrawPile, Zone};

/// One card in a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: CardId,
    #[serde(rename = "face")]
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
    pub zone: Zone,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub stack_order: i32,
}

impl From<&Card> for CardRecord {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            rank: card.rank(),
            suit: card.suit(),
            face_up: card.face_up,
            zone: card.zone,
            position: card.position,
            stack_order: card.stack_order,
        }
    }
}

/// Serializable copy of a table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub cards: Vec<CardRecord>,
    #[serde(default)]
    pub draw_sequence: Vec<CardId>,
    #[serde(default)]
    pub top_discard: Option<CardId>,
}

impl TableSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::SnapshotJson)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::SnapshotJson)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl TableState {
    /// Capture the current table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            cards: self.all_cards().iter().map(CardRecord::from).collect(),
            draw_sequence: self.draw_sequence().collect(),
            top_discard: self.top_discard(),
        }
    }

    /// Rebuild a table from a snapshot.
    ///
    /// Fails with `Error::CorruptSnapshot` if the records are not a dense
    /// `0..n` ID range or the rebuilt table violates the table invariants.
    pub fn restore(snapshot: &TableSnapshot) -> Result<Self> {
        let mut records: Vec<&CardRecord> = snapshot.cards.iter().collect();
        records.sort_by_key(|r| r.id);

        let mut cards = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.id.index() != index {
                return Err(corrupt(format!("expected card id {index}, found {}", record.id)));
            }
            let mut card = Card::new(record.id, record.rank, record.suit);
            card.zone = record.zone;
            card.face_up = record.face_up;
            card.position = record.position;
            card.stack_order = record.stack_order;
            cards.push(card);
        }

        let draw: DrawPile = snapshot.draw_sequence.iter().copied().collect();
        let table = TableState::from_parts(cards, draw, snapshot.top_discard);
        table.check_invariants().map_err(corrupt)?;
        Ok(table)
    }
}

fn corrupt(reason: String) -> Error {
    warn!(%reason, "rejecting snapshot");
    Error::CorruptSnapshot(reason)
}

/// Identity of a record, for callers that only need `{id, rank, suit}`.
impl CardRecord {
    #[must_use]
    pub fn identity(&self) -> (CardId, Rank, Suit) {
        (self.id, self.rank, self.suit)
    }
}
