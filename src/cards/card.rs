//! Card entities: identity plus placement state.
//!
//! A `Card` has an immutable identity (`id`, `rank`, `suit`) and mutable
//! placement state (`zone`, `position`, `face_up`, `stack_order`). Identity
//! fields are private; only `TableState` hands out `&mut Card`.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;
use crate::zones::Zone;

/// Card rank, Ace = 1 through King = 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Create a rank, returning `None` outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// All ranks, Ace to King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Absolute rank distance. King and Ace are 12 apart, not 1.
    #[must_use]
    pub const fn distance(self, other: Rank) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {value} out of range 1..=13"))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{n}"),
        }
    }
}

/// Card suit. Discriminants match the level-file encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit from its encoded index, `None` outside `0..=3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Suit::Clubs),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Hearts),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Suit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Suit::from_index(value).ok_or_else(|| format!("suit {value} out of range 0..=3"))
    }
}

impl From<Suit> for u8 {
    fn from(suit: Suit) -> Self {
        suit.index()
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        };
        write!(f, "{symbol}")
    }
}

/// Logical table coordinate (not pixels). Smaller `y` is lower on the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Suit,

    /// Current zone.
    pub zone: Zone,

    /// Is this card showing its face?
    pub face_up: bool,

    /// Logical position on the table.
    pub position: Position,

    /// Draw-pile order and visual layering.
    pub stack_order: i32,
}

impl Card {
    /// Create a face-down card in the deck.
    #[must_use]
    pub fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit,
            zone: Zone::Deck,
            face_up: false,
            position: Position::default(),
            stack_order: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Removed cards are inert: never matched, drawn, or shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.zone != Zone::Removed
    }

    /// Check if this card is in a specific zone.
    #[must_use]
    pub fn is_in(&self, zone: Zone) -> bool {
        self.zone == zone
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
