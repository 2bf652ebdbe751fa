//! Drop legality: which cards may land where.
//!
//! All checks read the state as it was *before* extraction, so a run can
//! never be dropped back onto the column it came from.

use crate::cards::Card;
use crate::core::{GameRng, GameState, RouteOrder};
use crate::zones::SolveTo;

/// Check whether `b` may be placed directly on `a`.
///
/// On a foundation `b` must be the next number of the same suit; on a
/// tableau column `b` must be one lower and of the other color.
#[must_use]
pub fn is_valid_move(a: &Card, b: &Card, is_foundation: bool) -> bool {
    if is_foundation {
        a.number + 1 == b.number && a.suit == b.suit
    } else {
        a.number == b.number + 1 && a.color() != b.color()
    }
}

/// Check whether foundation `index` accepts `card`.
///
/// An empty foundation takes any Ace. Out-of-range indices accept nothing.
#[must_use]
pub fn foundation_accepts(game: &GameState, index: usize, card: &Card) -> bool {
    match game.foundations.get(index) {
        None => false,
        Some(pile) => match pile.last() {
            None => card.is_ace(),
            Some(top) => is_valid_move(top, card, true),
        },
    }
}

/// Check whether tableau column `index` accepts `card` as its new top.
///
/// A column is open to a King only when both its hidden and visible piles
/// are empty. Out-of-range indices accept nothing.
#[must_use]
pub fn column_accepts(game: &GameState, index: usize, card: &Card) -> bool {
    match game.solved_piles.get(index) {
        None => false,
        Some(pile) => match pile.last() {
            None => card.is_king() && game.piles.get(index).map_or(true, |p| p.is_empty()),
            Some(top) => is_valid_move(top, card, false),
        },
    }
}

/// Check an explicit drop of a run whose bottom card is `card`.
///
/// Foundations only ever take single cards.
#[must_use]
pub fn is_drop_valid(game: &GameState, card: &Card, run_len: usize, to: SolveTo) -> bool {
    match to {
        SolveTo::Foundation { index } => run_len == 1 && foundation_accepts(game, index, card),
        SolveTo::SolvedPile { index } => column_accepts(game, index, card),
    }
}

/// First foundation, left to right, that accepts `card`.
#[must_use]
pub fn droppable_foundation(game: &GameState, card: &Card) -> Option<usize> {
    (0..game.foundations.len()).find(|&index| foundation_accepts(game, index, card))
}

/// A tableau column that accepts `card`, scanned in `order`.
///
/// `RouteOrder::Shuffled` draws a fresh permutation of the column indices
/// from `rng` on every call.
#[must_use]
pub fn droppable_solved_pile(
    game: &GameState,
    card: &Card,
    order: RouteOrder,
    rng: &mut GameRng,
) -> Option<usize> {
    let mut indexes: Vec<usize> = (0..game.solved_piles.len()).collect();
    if order == RouteOrder::Shuffled {
        rng.shuffle(&mut indexes);
    }
    indexes
        .into_iter()
        .find(|&index| column_accepts(game, index, card))
}

/// Choose a destination for a run whose bottom card is `card`.
///
/// Single cards try the foundations first; runs go straight to the tableau.
#[must_use]
pub fn droppable_stock(
    game: &GameState,
    card: &Card,
    run_len: usize,
    order: RouteOrder,
    rng: &mut GameRng,
) -> Option<SolveTo> {
    if run_len == 1 {
        if let Some(index) = droppable_foundation(game, card) {
            return Some(SolveTo::Foundation { index });
        }
    }
    droppable_solved_pile(game, card, order, rng).map(|index| SolveTo::SolvedPile { index })
}
