//! End-of-game queries polled by the caller after each move.

use crate::core::{GameState, Pile};

/// Check if a pile is empty.
#[must_use]
pub fn is_pile_empty(pile: &Pile) -> bool {
    pile.is_empty()
}

/// Check if every pile in a collection is empty.
#[must_use]
pub fn are_piles_empty<'a>(piles: impl IntoIterator<Item = &'a Pile>) -> bool {
    piles.into_iter().all(is_pile_empty)
}

/// The game is over when every card has reached the foundations.
#[must_use]
pub fn is_game_ended(game: &GameState) -> bool {
    are_piles_empty(&game.piles)
        && are_piles_empty(&game.solved_piles)
        && is_pile_empty(&game.stock)
        && is_pile_empty(&game.active_stock)
}

/// Stock and waste are both exhausted.
#[must_use]
pub fn is_stock_ended(game: &GameState) -> bool {
    is_pile_empty(&game.stock) && is_pile_empty(&game.active_stock)
}

/// Every hidden tableau card has been revealed.
///
/// Callers use this to decide whether to offer auto-complete.
#[must_use]
pub fn has_piles(game: &GameState) -> bool {
    are_piles_empty(&game.piles)
}
