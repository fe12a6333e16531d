//! Crate error type.
//!
//! Only genuine failures live here. Expected gameplay conditions (unknown card,
//! empty draw stack, empty history) are reported as `Option`/`bool` values or
//! as `Outcome::Rejected`, never as errors.

use thiserror::Error;

/// Errors produced while loading levels, configuration or snapshots.
#[derive(Debug, Error)]
pub enum Error {
    #[error("level {level_id} is invalid: playfield is empty")]
    InvalidLevel { level_id: u32 },

    #[error("failed to parse level description: {0}")]
    LevelParse(#[source] serde_json::Error),

    #[error("failed to parse rule configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("snapshot JSON error: {0}")]
    SnapshotJson(#[source] serde_json::Error),

    #[error("snapshot binary error: {0}")]
    SnapshotBinary(#[from] bincode::Error),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
