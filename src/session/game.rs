//! Play session.
//!
//! A `GameSession` owns one table, its undo history and the rule
//! configuration. The presentation layer forwards intents and reads back
//! `Outcome`s and the table; the session never calls back into it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::config::RuleConfig;
use crate::core::entity::CardId;
use crate::core::error::Result;
use crate::core::snapshot::TableSnapshot;
use crate::core::state::TableState;
use crate::level::{generate, GenerationReport, LevelDescription};
use crate::rules::{self, Flipped, GameStatus};
use crate::undo::{Command, CommandKind, UndoManager};
use crate::zones::Zone;

/// What an applied intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveToDiscard,
    Draw,
    /// Reverted a command of the given kind.
    Undo(CommandKind),
}

/// State changes from one applied intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub action: Action,
    /// The card that moved.
    pub card: CardId,
    /// Discard top before the intent.
    pub previous_top: Option<CardId>,
    /// Discard top after the intent.
    pub top_discard: Option<CardId>,
    /// Playfield cards whose face-up flag changed.
    pub flipped: Flipped,
    /// Status after the intent.
    pub status: GameStatus,
}

/// Why an intent was refused. Refusals never mutate state.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("no level has been started")]
    NoActiveLevel,
    #[error("{0} does not exist")]
    UnknownCard(CardId),
    #[error("{0} is not on the playfield")]
    NotOnPlayfield(CardId),
    #[error("{0} is face-down")]
    FaceDown(CardId),
    #[error("there is no discard card to match against")]
    NoTopDiscard,
    #[error("{card} does not match discard top {top}")]
    RankMismatch { card: CardId, top: CardId },
    #[error("the draw stack is empty")]
    DrawStackEmpty,
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Result of a user intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Applied(Change),
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    #[must_use]
    pub fn change(&self) -> Option<&Change> {
        match self {
            Outcome::Applied(change) => Some(change),
            Outcome::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Rejected(rejection) => Some(rejection),
        }
    }
}

/// One level being played.
///
/// ## Usage
///
/// ```
/// use tripeaks_core::cards::{Rank, Suit};
/// use tripeaks_core::level::{LevelDescription, Placement};
/// use tripeaks_core::session::GameSession;
/// use tripeaks_core::rules::GameStatus;
///
/// let level = LevelDescription::new(1)
///     .with_playfield(Placement::new(5, 0).at(100.0, 900.0).face_up(true))
///     .with_stack(Placement::new(4, 0));
///
/// let mut session = GameSession::default();
/// session.start_level(&level).unwrap();
///
/// let five = session.table().find(Rank::new(5).unwrap(), Suit::Clubs).unwrap();
/// let outcome = session.request_move_to_discard(five);
/// assert_eq!(outcome.change().unwrap().status, GameStatus::Won);
///
/// assert!(session.request_undo().is_applied());
/// assert_eq!(session.status(), GameStatus::InProgress);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    config: RuleConfig,
    table: TableState,
    undo: UndoManager,
    level_id: Option<u32>,
    status: Option<GameStatus>,
}

impl GameSession {
    /// Create a session with no level loaded.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // === Level Lifecycle ===

    /// Build a fresh table from `level` and start playing it.
    ///
    /// Invalid levels are refused with `Error::InvalidLevel` and the current
    /// level (if any) is left as it was.
    pub fn start_level(&mut self, level: &LevelDescription) -> Result<GenerationReport> {
        let mut table = TableState::new();
        let report = generate(&mut table, level, &self.config)?;
        rules::recompute_face_up(&mut table, &self.config);

        self.install(table, level.level_id);
        info!(
            level = level.level_id,
            playfield = report.placed_playfield,
            draw_stack = report.drawn,
            "level started"
        );
        Ok(report)
    }

    /// Resume play from a snapshot. History starts empty.
    pub fn load_snapshot(&mut self, snapshot: &TableSnapshot, level_id: u32) -> Result<()> {
        let table = TableState::restore(snapshot)?;
        self.install(table, level_id);
        info!(level = level_id, "level resumed from snapshot");
        Ok(())
    }

    fn install(&mut self, table: TableState, level_id: u32) {
        self.table = table;
        self.undo.reset();
        self.level_id = Some(level_id);
        self.status = Some(rules::evaluate(&self.table));
    }

    // === Intents ===

    /// Play `card` from the playfield onto the discard pile.
    pub fn request_move_to_discard(&mut self, card: CardId) -> Outcome {
        if let Err(rejection) = self.check_move(card) {
            debug!(card = %card, %rejection, "move rejected");
            return Outcome::Rejected(rejection);
        }
        let Some(command) = Command::move_to_discard(&self.table, card) else {
            return Outcome::Rejected(Rejection::UnknownCard(card));
        };
        self.commit(command)
    }

    /// Draw the next card from the draw stack onto the discard pile.
    pub fn request_draw(&mut self) -> Outcome {
        if self.level_id.is_none() {
            return Outcome::Rejected(Rejection::NoActiveLevel);
        }
        let Some(card) = self.table.pop_next_draw() else {
            debug!("draw rejected: stack empty");
            return Outcome::Rejected(Rejection::DrawStackEmpty);
        };
        let Some(command) = Command::draw_card(&self.table, card) else {
            // Put it back so a dangling ID does not vanish from the pile.
            self.table.push_draw_stack_front(card);
            return Outcome::Rejected(Rejection::UnknownCard(card));
        };
        self.commit(command)
    }

    /// Revert the most recent move or draw.
    pub fn request_undo(&mut self) -> Outcome {
        if self.level_id.is_none() {
            return Outcome::Rejected(Rejection::NoActiveLevel);
        }
        let previous_top = self.table.top_discard();
        let Some(command) = self.undo.undo(&mut self.table) else {
            return Outcome::Rejected(Rejection::NothingToUndo);
        };
        let flipped = rules::recompute_face_up(&mut self.table, &self.config);

        Outcome::Applied(Change {
            action: Action::Undo(command.kind()),
            card: command.card(),
            previous_top,
            top_discard: self.table.top_discard(),
            flipped,
            status: self.refresh_status(),
        })
    }

    fn check_move(&self, card: CardId) -> std::result::Result<(), Rejection> {
        if self.level_id.is_none() {
            return Err(Rejection::NoActiveLevel);
        }
        let hand = self.table.card(card).ok_or(Rejection::UnknownCard(card))?;
        if hand.zone != Zone::Playfield {
            return Err(Rejection::NotOnPlayfield(card));
        }
        if !hand.face_up {
            return Err(Rejection::FaceDown(card));
        }
        let top = self.table.top_discard_card().ok_or(Rejection::NoTopDiscard)?;
        if !rules::can_match(hand, top) {
            return Err(Rejection::RankMismatch { card, top: top.id() });
        }
        Ok(())
    }

    fn commit(&mut self, command: Command) -> Outcome {
        let action = match command.kind() {
            CommandKind::MoveToDiscard => Action::MoveToDiscard,
            CommandKind::Draw => Action::Draw,
        };
        let card = command.card();
        let previous_top = command.previous_top();

        self.undo.submit(&mut self.table, command);
        let flipped = rules::recompute_face_up(&mut self.table, &self.config);

        Outcome::Applied(Change {
            action,
            card,
            previous_top,
            top_discard: self.table.top_discard(),
            flipped,
            status: self.refresh_status(),
        })
    }

    fn refresh_status(&mut self) -> GameStatus {
        let status = rules::evaluate(&self.table);
        if status.is_over() && self.status != Some(status) {
            info!(level = ?self.level_id, ?status, "level finished");
        }
        self.status = Some(status);
        status
    }

    // === Reads ===

    /// The table being played.
    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Current level status. `InProgress` before any level starts.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status.unwrap_or(GameStatus::InProgress)
    }

    #[must_use]
    pub fn level_id(&self) -> Option<u32> {
        self.level_id
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.undo.len()
    }

    /// Playable cards right now (hint support).
    #[must_use]
    pub fn playable_cards(&self) -> Vec<CardId> {
        rules::playable_cards(&self.table)
    }

    /// Snapshot of the current table.
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        self.table.snapshot()
    }
}
