//! # tripeaks-core
//!
//! Game-state engine for TriPeaks-style solitaire.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: `TableState` owns every card. Everything else holds
//!    `CardId`s and borrows cards for the duration of one call.
//!
//! 2. **Reversible Actions**: every player action is a `Command` value that
//!    captures its "before" state, so undo restores the table exactly.
//!
//! 3. **No Callbacks**: intents return an `Outcome` describing what changed.
//!    The presentation layer reads the table; the core never calls back.
//!
//! ## Modules
//!
//! - `core`: Card IDs, table state, snapshots, configuration, RNG, errors
//! - `cards`: Rank, suit, position and card entities
//! - `zones`: Zone enumeration and the ordered draw pile
//! - `level`: Level descriptions, generation, seeded deals
//! - `rules`: Match rule, occlusion, deadlock and game status
//! - `undo`: Commands and the undo history
//! - `session`: Play session handling user intents

pub mod core;
pub mod cards;
pub mod zones;
pub mod level;
pub mod rules;
pub mod undo;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CardId, CardRecord, Error, GameRng, Result, RuleConfig, TableSnapshot, TableState,
    STANDARD_DECK_SIZE,
};

pub use crate::cards::{Card, Position, Rank, Suit};

pub use crate::zones::{DrawPile, Zone};

pub use crate::level::{deal_classic, generate, GenerationReport, LevelDescription, Placement};

pub use crate::rules::{
    can_match, evaluate, has_any_move, playable_cards, recompute_face_up, GameStatus,
};

pub use crate::undo::{Command, CommandKind, UndoManager};

pub use crate::session::{Action, Change, GameSession, Outcome, Rejection};
