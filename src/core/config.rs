//! Rule configuration.
//!
//! Games configure the engine at startup via `RuleConfig`:
//! - Occlusion thresholds (the card footprint used for covering tests)
//! - Canonical pile positions for the discard pile and the draw pile
//!
//! The occlusion thresholds are tied to card sprite size, so they are inputs
//! rather than constants.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use crate::cards::Position;

/// Default horizontal covering threshold.
pub const DEFAULT_COVER_WIDTH: f32 = 100.0;

/// Default vertical covering threshold.
pub const DEFAULT_COVER_HEIGHT: f32 = 120.0;

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use tripeaks_core::core::RuleConfig;
///
/// let config = RuleConfig::new().with_cover_size(80.0, 110.0);
/// assert_eq!(config.cover_width, 80.0);
/// assert_eq!(config.cover_height, 110.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleConfig {
    /// Card B covers card A only if `|A.x - B.x|` is below this.
    pub cover_width: f32,

    /// Card B covers card A only if `|A.y - B.y|` is below this.
    pub cover_height: f32,

    /// Where the discard-pile top is placed.
    pub discard_position: Position,

    /// Where face-down draw-pile cards are placed.
    pub draw_position: Position,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            cover_width: DEFAULT_COVER_WIDTH,
            cover_height: DEFAULT_COVER_HEIGHT,
            discard_position: Position::new(540.0, 300.0),
            draw_position: Position::new(200.0, 300.0),
        }
    }
}

impl RuleConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::ConfigParse)
    }

    /// Set the covering thresholds.
    #[must_use]
    pub fn with_cover_size(mut self, width: f32, height: f32) -> Self {
        self.cover_width = width;
        self.cover_height = height;
        self
    }

    /// Set the discard-pile position.
    #[must_use]
    pub fn with_discard_position(mut self, position: Position) -> Self {
        self.discard_position = position;
        self
    }

    /// Set the draw-pile position.
    #[must_use]
    pub fn with_draw_position(mut self, position: Position) -> Self {
        self.draw_position = position;
        self
    }
}
