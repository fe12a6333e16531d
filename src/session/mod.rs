//! Play sessions: the entry point for user intents.
//!
//! ## Key Types
//!
//! - `GameSession`: owns a level's table, undo history and configuration
//! - `Outcome`: `Applied(Change)` or `Rejected(Rejection)`
//! - `Change`: what moved, what flipped, and the resulting status

mod game;

pub use game::{Action, Change, GameSession, Outcome, Rejection};
