//! Dealing a deck into the opening layout.

use im::Vector;

use crate::cards::{generate_decks, shuffle, Card};
use crate::core::{GameConfig, GameRng, GameState, Pile};

/// Tableau columns and leftover stock produced by `generate_piles`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Hidden cards per column; column `x` holds `x` cards.
    pub piles: Vector<Pile>,
    /// One face-up card per column.
    pub solved_piles: Vector<Pile>,
    /// Whatever was not dealt, in original order. Becomes the stock.
    pub stock: Pile,
}

/// Deal `cards` from the front into `length` tableau columns.
///
/// Column `x` receives one face-up card, then the next `x` cards face down.
///
/// Panics if `cards` holds fewer than `length * (length + 1) / 2` cards.
#[must_use]
pub fn generate_piles(cards: Vec<Card>, length: usize) -> Layout {
    let needed = length * (length + 1) / 2;
    assert!(
        cards.len() >= needed,
        "Dealing {} columns needs {} cards, got {}",
        length,
        needed,
        cards.len()
    );

    let mut rest = cards.into_iter();
    let mut piles = Vector::new();
    let mut solved_piles = Vector::new();

    for x in 0..length {
        let mut face_up = Pile::new();
        face_up.extend(rest.next());
        solved_piles.push_back(face_up);
        piles.push_back(rest.by_ref().take(x).collect::<Pile>());
    }

    Layout {
        piles,
        solved_piles,
        stock: rest.collect(),
    }
}

/// Shuffle a full deck and deal a new game.
///
/// Creates one empty foundation per deck definition.
#[must_use]
pub fn generate_game(config: &GameConfig, rng: &mut GameRng) -> GameState {
    config.validate();

    let mut cards = generate_decks(&config.decks, config.deck_size);
    shuffle(&mut cards, rng);

    let layout = generate_piles(cards, config.piles);
    log::trace!(
        "dealt {} columns, {} cards left in stock (seed {})",
        config.piles,
        layout.stock.len(),
        rng.seed()
    );

    GameState {
        stock: layout.stock,
        active_stock: Vector::new(),
        piles: layout.piles,
        solved_piles: layout.solved_piles,
        foundations: config.decks.iter().map(|_| Vector::new()).collect(),
    }
}
