//! Game configuration.
//!
//! The rule set is fixed; configuration only shapes the deal (column count,
//! deck composition), how auto-routing breaks ties between tableau columns,
//! and how much history a `Session` keeps.

use serde::{Deserialize, Serialize};

use crate::cards::{DeckDefinition, DECK_SIZE, KING};

/// Default tableau column count.
pub const PILES: usize = 7;

/// Default number of snapshots kept for undo.
pub const HISTORY_LIMIT: usize = 256;

/// Order in which auto-route scans tableau columns.
///
/// Foundations are always scanned left to right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteOrder {
    /// A fresh permutation per call, drawn from the injected `GameRng`.
    /// Spreads equally eligible cards across columns.
    #[default]
    Shuffled,
    /// Column 0 first. Fully reproducible without a seed.
    LeftToRight,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of tableau columns.
    pub piles: usize,

    /// Cards per deck definition (1..=13).
    pub deck_size: u8,

    /// Deck definitions; one foundation is created per definition.
    pub decks: Vec<DeckDefinition>,

    /// Tableau scan order for auto-route.
    pub route_order: RouteOrder,

    /// Maximum undo snapshots (0 = unlimited).
    pub history_limit: usize,

    /// Seed for dealing and routing. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            piles: PILES,
            deck_size: DECK_SIZE,
            decks: DeckDefinition::standard(),
            route_order: RouteOrder::Shuffled,
            history_limit: HISTORY_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the tableau column count.
    #[must_use]
    pub fn with_piles(mut self, piles: usize) -> Self {
        self.piles = piles;
        self
    }

    /// Set the cards per definition.
    #[must_use]
    pub fn with_deck_size(mut self, size: u8) -> Self {
        self.deck_size = size;
        self
    }

    /// Set the deck definitions.
    #[must_use]
    pub fn with_decks(mut self, decks: Vec<DeckDefinition>) -> Self {
        self.decks = decks;
        self
    }

    /// Set the tableau route order.
    #[must_use]
    pub fn with_route_order(mut self, order: RouteOrder) -> Self {
        self.route_order = order;
        self
    }

    /// Set the undo history limit.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total cards in the generated deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.decks.len() * self.deck_size as usize
    }

    /// Cards consumed by the triangular tableau deal.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.piles * (self.piles + 1) / 2
    }

    /// Assert that this configuration can be dealt.
    ///
    /// Panics on an empty deck list, a deck size outside 1..=13, or a
    /// tableau that needs more cards than the deck holds.
    pub fn validate(&self) {
        assert!(!self.decks.is_empty(), "At least one deck definition is required");
        assert!(
            (1..=KING).contains(&self.deck_size),
            "Deck size must be in 1..=13, got {}",
            self.deck_size
        );
        assert!(
            self.dealt_cards() <= self.total_cards(),
            "{} columns need {} cards but the deck has {}",
            self.piles,
            self.dealt_cards(),
            self.total_cards()
        );
    }
}
