//! Reversible player actions.
//!
//! Each `Command` captures at construction everything needed to undo it: the
//! acted card, the discard top before the action and, for a move, the card's
//! prior zone. Commands are only executed through `UndoManager::submit`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::entity::CardId;
use crate::core::state::TableState;
use crate::zones::Zone;

/// Which kind of action a command performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Playfield card onto the discard pile.
    MoveToDiscard,
    /// Draw-stack card onto the discard pile.
    Draw,
}

/// A reversible action on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveToDiscard {
        card: CardId,
        previous_top: Option<CardId>,
        previous_zone: Zone,
    },
    DrawCard {
        card: CardId,
        previous_top: Option<CardId>,
    },
}

impl Command {
    /// Capture a move of `card` to the discard pile.
    ///
    /// Returns `None` for unknown cards. Legality is the caller's concern.
    #[must_use]
    pub fn move_to_discard(table: &TableState, card: CardId) -> Option<Self> {
        let previous_zone = table.card(card)?.zone;
        Some(Command::MoveToDiscard {
            card,
            previous_top: table.top_discard(),
            previous_zone,
        })
    }

    /// Capture a draw of `card`, already popped from the draw stack.
    ///
    /// Returns `None` for unknown cards.
    #[must_use]
    pub fn draw_card(table: &TableState, card: CardId) -> Option<Self> {
        table.card(card)?;
        Some(Command::DrawCard {
            card,
            previous_top: table.top_discard(),
        })
    }

    /// The card this command acts on.
    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            Command::MoveToDiscard { card, .. } | Command::DrawCard { card, .. } => *card,
        }
    }

    /// Discard top before the command ran.
    #[must_use]
    pub fn previous_top(&self) -> Option<CardId> {
        match self {
            Command::MoveToDiscard { previous_top, .. } | Command::DrawCard { previous_top, .. } => {
                *previous_top
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MoveToDiscard { .. } => CommandKind::MoveToDiscard,
            Command::DrawCard { .. } => CommandKind::Draw,
        }
    }

    pub(crate) fn execute(&self, table: &mut TableState) {
        let card_id = self.card();
        let Some(card) = table.card_mut(card_id) else {
            debug!(card = %card_id, "execute on unknown card ignored");
            return;
        };

        match self {
            Command::MoveToDiscard { .. } => {
                card.zone = Zone::Discard;
            }
            Command::DrawCard { .. } => {
                card.zone = Zone::Discard;
                card.face_up = true;
            }
        }
        table.set_top_discard(card_id);

        debug!(card = %card_id, kind = ?self.kind(), "executed command");
    }

    pub(crate) fn undo(&self, table: &mut TableState) {
        let card_id = self.card();
        let Some(card) = table.card_mut(card_id) else {
            debug!(card = %card_id, "undo on unknown card ignored");
            return;
        };

        match *self {
            Command::MoveToDiscard {
                previous_top,
                previous_zone,
                ..
            } => {
                card.zone = previous_zone;
                table.restore_top_discard(previous_top);
            }
            Command::DrawCard { previous_top, .. } => {
                card.zone = Zone::Deck;
                card.face_up = false;
                table.restore_top_discard(previous_top);
                table.push_draw_stack_front(card_id);
            }
        }

        debug!(card = %card_id, kind = ?self.kind(), "undid command");
    }
}
