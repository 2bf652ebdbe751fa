//! Card and deck model.
//!
//! ## Key Types
//!
//! - `Card`: immutable `(suit, number)` value; color is derived
//! - `DeckDefinition`: one suit to expand into a numbered run
//!
//! Deck generation is deterministic; only `shuffle` consumes randomness,
//! and it takes the generator explicitly.

pub mod card;
pub mod deck;

pub use card::{is_same_card, Card, Color, Suit, ACE, KING};
pub use deck::{generate_deck, generate_decks, shuffle, DeckDefinition, DECK_SIZE};
