//! Greedy single-step play and auto-complete.
//!
//! `solve_next` makes one obvious move: feed a foundation, start a new
//! foundation with an Ace, or work the stock. It never looks ahead, so it
//! finishes games whose hidden cards are all revealed but is not a solver.

use super::engine::{solve_stock, Klondike, SolveResult};
use super::queries::{is_game_ended, is_stock_ended};
use crate::cards::{Card, ACE};
use crate::core::{GameRng, GameState, Pile};
use crate::zones::{SolveFrom, SolveTo, Splice};

/// Step limit used by `auto_complete` callers that have no better bound.
pub const AUTO_COMPLETE_LIMIT: usize = 99;

/// The next card a foundation wants, if it has started and is not full.
#[must_use]
pub fn card_objective(foundation: &Pile, deck_size: u8) -> Option<Card> {
    let top = foundation.last()?;
    (top.number < deck_size).then(|| Card::new(top.suit, top.number + 1))
}

/// Where `card` is currently playable from: the top of the waste or the
/// top of a tableau column.
#[must_use]
pub fn card_position(game: &GameState, card: &Card) -> Option<SolveFrom> {
    if game.waste_top() == Some(card) {
        return Some(SolveFrom::ActiveStock);
    }
    (0..game.column_count())
        .find(|&column| game.column_top(column) == Some(card))
        .map(SolveFrom::column_top)
}

impl Klondike {
    /// Make one greedy move.
    ///
    /// In order: play the card some foundation wants next; play an Ace of
    /// a suit with no foundation yet; otherwise draw from (or turn over)
    /// the stock. `moved` is false only when none of these changes the
    /// state. A stock step reports an empty splice and no destination.
    #[must_use]
    pub fn solve_next(&self, game: &GameState, rng: &mut GameRng) -> SolveResult {
        let deck_size = self.config().deck_size;

        for (index, foundation) in game.foundations.iter().enumerate() {
            let Some(objective) = card_objective(foundation, deck_size) else {
                continue;
            };
            if let Some(from) = card_position(game, &objective) {
                let result = self.solve(game, from, Some(SolveTo::Foundation { index }), rng);
                if result.moved {
                    return result;
                }
            }
        }

        if let Some(index) = game.foundations.iter().position(|f| f.is_empty()) {
            for definition in &self.config().decks {
                let ace = Card::new(definition.suit, ACE);
                let started = game.foundations.iter().any(|f| f.front() == Some(&ace));
                if started {
                    continue;
                }
                if let Some(from) = card_position(game, &ace) {
                    let result = self.solve(game, from, Some(SolveTo::Foundation { index }), rng);
                    if result.moved {
                        return result;
                    }
                }
            }
        }

        let spliced = Splice {
            game: game.clone(),
            cards: Default::default(),
        };
        if is_stock_ended(game) {
            return SolveResult {
                game: game.clone(),
                moved: false,
                spliced,
                to: None,
            };
        }
        SolveResult {
            game: solve_stock(game),
            moved: true,
            spliced,
            to: None,
        }
    }

    /// Repeat `solve_next` until the game ends, no step applies, or
    /// `limit` steps have been taken.
    ///
    /// Returns the final state and the number of steps taken.
    #[must_use]
    pub fn auto_complete(&self, game: &GameState, rng: &mut GameRng, limit: usize) -> (GameState, usize) {
        let mut current = game.clone();
        let mut steps = 0;

        while steps < limit && !is_game_ended(&current) {
            let result = self.solve_next(&current, rng);
            if !result.moved {
                break;
            }
            current = result.game;
            steps += 1;
        }

        log::trace!("auto-complete took {} step(s), ended: {}", steps, is_game_ended(&current));
        (current, steps)
    }
}
