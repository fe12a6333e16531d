//! Core engine types: card IDs, table state, snapshots, configuration, RNG, errors.

pub mod entity;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod snapshot;

pub use entity::CardId;
pub use config::RuleConfig;
pub use error::{Error, Result};
pub use rng::GameRng;
pub use state::{TableState, STANDARD_DECK_SIZE};
pub use snapshot::{CardRecord, TableSnapshot};
