//! Deck generation and shuffling.
//!
//! A `DeckDefinition` names one suit. Each definition expands into a run
//! of cards numbered `1..=size` in ascending order, and the standard game
//! concatenates four of them.

use serde::{Deserialize, Serialize};

use super::card::{Card, Color, Suit, KING};
use crate::core::GameRng;

/// Default number of cards per definition.
pub const DECK_SIZE: u8 = KING;

/// One suit's worth of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckDefinition {
    #[serde(rename = "type")]
    pub suit: Suit,
}

impl DeckDefinition {
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self { suit }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// The four standard definitions: club, diamond, heart, spade.
    #[must_use]
    pub fn standard() -> Vec<DeckDefinition> {
        Suit::ALL.iter().map(|&suit| DeckDefinition::new(suit)).collect()
    }
}

/// Generate cards `1..=size` of one suit, ascending.
///
/// Panics if `size` exceeds 13.
#[must_use]
pub fn generate_deck(suit: Suit, size: u8) -> Vec<Card> {
    (1..=size).map(|number| Card::new(suit, number)).collect()
}

/// Concatenate `generate_deck` over each definition, in definition order.
#[must_use]
pub fn generate_decks(definitions: &[DeckDefinition], size: u8) -> Vec<Card> {
    definitions
        .iter()
        .flat_map(|def| generate_deck(def.suit, size))
        .collect()
}

/// Uniformly permute `cards` in place.
pub fn shuffle<T>(cards: &mut [T], rng: &mut GameRng) {
    rng.shuffle(cards);
}
