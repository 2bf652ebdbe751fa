//! Game state: the five card zones of a Klondike position.
//!
//! ## Zones
//!
//! - `stock`: face-down draw pile (top = end)
//! - `active_stock`: face-up waste; only its last card is playable
//! - `piles`: hidden cards of each tableau column
//! - `solved_piles`: face-up run of each tableau column, paired with `piles`
//! - `foundations`: ascending single-suit piles, Ace first
//!
//! Every zone is an `im::Vector`, so cloning a state is O(1) and a clone
//! kept for undo never observes later changes to the live state.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An ordered pile of cards. The last element is the top.
pub type Pile = Vector<Card>;

/// A complete game position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Face-down draw pile.
    pub stock: Pile,

    /// Face-up waste pile.
    pub active_stock: Pile,

    /// Hidden cards per tableau column.
    pub piles: Vector<Pile>,

    /// Visible run per tableau column.
    pub solved_piles: Vector<Pile>,

    /// Foundations, one per deck definition.
    pub foundations: Vector<Pile>,
}

impl GameState {
    /// Create a state with `columns` empty tableau columns and
    /// `foundations` empty foundations.
    #[must_use]
    pub fn empty(columns: usize, foundations: usize) -> Self {
        Self {
            stock: Vector::new(),
            active_stock: Vector::new(),
            piles: (0..columns).map(|_| Vector::new()).collect(),
            solved_piles: (0..columns).map(|_| Vector::new()).collect(),
            foundations: (0..foundations).map(|_| Vector::new()).collect(),
        }
    }

    /// Independent copy for undo snapshots.
    ///
    /// Structural sharing makes this O(1); writes to either copy never
    /// reach the other.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }

    /// Number of tableau columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.solved_piles.len()
    }

    /// Number of foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.len()
    }

    /// Top card of the waste.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.active_stock.last()
    }

    /// Top card of a tableau column's visible run.
    #[must_use]
    pub fn column_top(&self, column: usize) -> Option<&Card> {
        self.solved_piles.get(column).and_then(|pile| pile.last())
    }

    /// Top card of a foundation.
    #[must_use]
    pub fn foundation_top(&self, foundation: usize) -> Option<&Card> {
        self.foundations.get(foundation).and_then(|pile| pile.last())
    }

    /// Iterate every card in every zone.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.active_stock.iter())
            .chain(self.piles.iter().flat_map(|p| p.iter()))
            .chain(self.solved_piles.iter().flat_map(|p| p.iter()))
            .chain(self.foundations.iter().flat_map(|p| p.iter()))
    }

    /// Total number of cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    /// Multiset of the cards in play.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for &card in self.all_cards() {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Check that the zones hold exactly the cards of `deck`: nothing
    /// duplicated, nothing lost.
    #[must_use]
    pub fn conserves(&self, deck: &[Card]) -> bool {
        let mut expected: FxHashMap<Card, usize> = FxHashMap::default();
        for &card in deck {
            *expected.entry(card).or_insert(0) += 1;
        }
        self.census() == expected
    }
}
