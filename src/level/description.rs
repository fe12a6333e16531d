//! Level descriptions: declarative card placements.
//!
//! A level lists playfield placements and draw/discard placements. The first
//! draw/discard placement becomes the initial discard top; the rest form the
//! draw stack in listed order.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "levelId": 1,
//!   "playfield": [{"face": 5, "suit": 0, "x": 250, "y": 1000, "z": 1, "faceUp": true}],
//!   "stack": [{"face": 4, "suit": 2}, {"face": 9, "suit": 3}]
//! }
//! ```
//!
//! Missing card fields default to face 1, suit 1, position (0, 0), z 0,
//! face-down. `"drawStack"` is accepted in place of `"stack"`.

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};

fn default_face() -> i32 {
    1
}

fn default_suit() -> i32 {
    1
}

/// Where and how one card starts.
///
/// Rank and suit are kept in their raw encoding (`-1` means "none" in level
/// files); the generator skips placements that do not name a real card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(rename = "face", default = "default_face")]
    pub rank: i32,
    #[serde(default = "default_suit")]
    pub suit: i32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(rename = "z", default)]
    pub z_order: i32,
    #[serde(default)]
    pub face_up: bool,
}

impl Placement {
    /// Placement at the origin, face-down.
    #[must_use]
    pub fn new(rank: i32, suit: i32) -> Self {
        Self {
            rank,
            suit,
            x: 0.0,
            y: 0.0,
            z_order: 0,
            face_up: false,
        }
    }

    #[must_use]
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_z(mut self, z_order: i32) -> Self {
        self.z_order = z_order;
        self
    }

    #[must_use]
    pub fn face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }
}

/// A complete level layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescription {
    #[serde(default)]
    pub level_id: u32,

    /// Tableau cards.
    #[serde(default)]
    pub playfield: Vec<Placement>,

    /// Initial discard top followed by the draw stack, in draw order.
    #[serde(default, alias = "drawStack")]
    pub stack: Vec<Placement>,
}

impl LevelDescription {
    #[must_use]
    pub fn new(level_id: u32) -> Self {
        Self {
            level_id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_playfield(mut self, placement: Placement) -> Self {
        self.playfield.push(placement);
        self
    }

    #[must_use]
    pub fn with_stack(mut self, placement: Placement) -> Self {
        self.stack.push(placement);
        self
    }

    /// A level is playable only if it has at least one playfield card.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.playfield.is_empty()
    }

    /// Parse a level from JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::LevelParse)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::LevelParse)
    }
}
