//! Move descriptors and card extraction.
//!
//! `SolveFrom` names where cards are taken from, `SolveTo` where they are
//! dropped. Both serialize with a `prop` tag so a UI can send
//! `{"prop":"solvedPiles","pileIndex":2,"cardIndex":4}` directly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::GameState;

/// Cards extracted by a single move. A run never exceeds one suit's length.
pub type Run = SmallVec<[Card; 13]>;

/// Source of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "prop")]
pub enum SolveFrom {
    /// Top card of the waste.
    #[serde(rename = "activeStock")]
    ActiveStock,

    /// Top card of a foundation.
    #[serde(rename = "foundations", rename_all = "camelCase")]
    Foundation { pile_index: usize },

    /// A tableau column's visible run, from `card_index` to the top.
    /// `None` takes only the top card.
    #[serde(rename = "solvedPiles", rename_all = "camelCase")]
    SolvedPile {
        pile_index: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_index: Option<usize>,
    },
}

impl SolveFrom {
    /// Top card of tableau column `pile_index`.
    #[must_use]
    pub const fn column_top(pile_index: usize) -> Self {
        SolveFrom::SolvedPile { pile_index, card_index: None }
    }

    /// Run of tableau column `pile_index` starting at `card_index`.
    #[must_use]
    pub const fn column_run(pile_index: usize, card_index: usize) -> Self {
        SolveFrom::SolvedPile { pile_index, card_index: Some(card_index) }
    }
}

impl std::fmt::Display for SolveFrom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveFrom::ActiveStock => write!(f, "waste"),
            SolveFrom::Foundation { pile_index } => write!(f, "foundation {}", pile_index),
            SolveFrom::SolvedPile { pile_index, card_index: None } => {
                write!(f, "column {}", pile_index)
            }
            SolveFrom::SolvedPile { pile_index, card_index: Some(card) } => {
                write!(f, "column {} from card {}", pile_index, card)
            }
        }
    }
}

/// Destination of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "prop")]
pub enum SolveTo {
    #[serde(rename = "foundations")]
    Foundation { index: usize },

    #[serde(rename = "solvedPiles")]
    SolvedPile { index: usize },
}

impl std::fmt::Display for SolveTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveTo::Foundation { index } => write!(f, "foundation {}", index),
            SolveTo::SolvedPile { index } => write!(f, "column {}", index),
        }
    }
}

/// Result of extracting cards from a source zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Splice {
    /// State with the cards removed. No auto-reveal has happened yet.
    pub game: GameState,
    /// Extracted cards, bottom first.
    pub cards: Run,
}

impl Splice {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that lands on the destination's top.
    #[must_use]
    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }
}

/// Remove the cards `from` names, returning the reduced state and the cards.
///
/// An empty source, or a `card_index` past the column's end, extracts
/// nothing. A `pile_index` naming a column or foundation that does not
/// exist is a caller bug and panics.
#[must_use]
pub fn splice(game: &GameState, from: SolveFrom) -> Splice {
    let mut next = game.clone();
    let mut cards = Run::new();

    match from {
        SolveFrom::ActiveStock => {
            if let Some(card) = next.active_stock.pop_back() {
                cards.push(card);
            }
        }
        SolveFrom::Foundation { pile_index } => {
            assert!(
                pile_index < next.foundations.len(),
                "Foundation {} does not exist ({} foundations)",
                pile_index,
                next.foundations.len()
            );
            if let Some(card) = next.foundations[pile_index].pop_back() {
                cards.push(card);
            }
        }
        SolveFrom::SolvedPile { pile_index, card_index } => {
            assert!(
                pile_index < next.solved_piles.len(),
                "Column {} does not exist ({} columns)",
                pile_index,
                next.solved_piles.len()
            );
            let pile = &mut next.solved_piles[pile_index];
            let len = pile.len();
            if len > 0 {
                let start = card_index.unwrap_or(len - 1);
                if start < len {
                    cards.extend(pile.split_off(start));
                }
            }
        }
    }

    Splice { game: next, cards }
}
