//! Card values.
//!
//! A `Card` is an immutable `(suit, number)` value. Color is derived from
//! the suit, so a red club cannot be constructed.

use serde::{Deserialize, Serialize};

/// Lowest card number.
pub const ACE: u8 = 1;

/// Highest card number. Only a King may open an empty tableau column.
pub const KING: u8 = 13;

/// Card suit (the "type" of a card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in the standard deal order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Color of this suit: diamonds and hearts are red, clubs and spades black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamond | Suit::Heart => Color::Red,
            Suit::Club | Suit::Spade => Color::Black,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// A playing card.
///
/// Two cards are the same card iff suit and number are equal (color
/// follows from suit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Suit.
    #[serde(rename = "type")]
    pub suit: Suit,
    /// Number, 1 (Ace) to 13 (King).
    pub number: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `number` is outside `1..=13`.
    #[must_use]
    pub fn new(suit: Suit, number: u8) -> Self {
        assert!(
            (ACE..=KING).contains(&number),
            "Card number must be in 1..=13, got {}",
            number
        );
        Self { suit, number }
    }

    /// Color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.number == ACE
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        self.number == KING
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            1 => write!(f, "A{}", self.suit.symbol()),
            11 => write!(f, "J{}", self.suit.symbol()),
            12 => write!(f, "Q{}", self.suit.symbol()),
            13 => write!(f, "K{}", self.suit.symbol()),
            n => write!(f, "{}{}", n, self.suit.symbol()),
        }
    }
}

/// Check if `a` and `b` are both present and the same card.
#[must_use]
pub fn is_same_card(a: Option<&Card>, b: Option<&Card>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}
