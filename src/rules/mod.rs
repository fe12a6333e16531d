//! Rule evaluator.
//!
//! Pure functions over `TableState`:
//! - Match test (`can_match`)
//! - Occlusion and face-up recomputation (`recompute_face_up`)
//! - Deadlock detection (`has_any_move`) and game status (`evaluate`)

pub mod evaluator;

pub use evaluator::{
    can_match, can_match_ids, covers, evaluate, has_any_move, is_covered, playable_cards,
    recompute_face_up, Flipped,
};

use serde::{Deserialize, Serialize};

/// State of the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves or draws remain.
    InProgress,
    /// The playfield is empty.
    Won,
    /// Draw stack empty and no playable card.
    Lost,
}

impl GameStatus {
    /// Has the level ended?
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_over() {
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Won.is_over());
        assert!(GameStatus::Lost.is_over());
    }
}
