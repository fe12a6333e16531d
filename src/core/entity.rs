//! Card identification.
//!
//! Every card on the table has a unique `CardId`. IDs are dense: a standard
//! deck uses `0..52`, allocated suit-major then rank-minor, so the table can
//! store cards in a plain `Vec` indexed by ID.
//!
//! ## Usage
//!
//! ```
//! use tripeaks_core::core::CardId;
//!
//! let id = CardId::new(14);
//! assert_eq!(id.index(), 14);
//! assert_eq!(format!("{}", id), "Card(14)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the table.
///
/// IDs are stable for the lifetime of a table and never reused within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena index for this ID.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index() {
        assert_eq!(CardId::new(0).index(), 0);
        assert_eq!(CardId::new(51).index(), 51);
        assert_eq!(CardId::from(7).raw(), 7);
    }

    #[test]
    fn test_ordering() {
        assert!(CardId(1) < CardId(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
