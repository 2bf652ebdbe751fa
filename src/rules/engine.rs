//! Move engine: validates and applies moves between zones.
//!
//! Every entry point takes `&GameState` and returns a new state; the input
//! is never modified. A rejected move returns a copy of the input with
//! `moved == false`.

use im::Vector;

use super::drop::{droppable_stock, is_drop_valid};
use crate::cards::Card;
use crate::core::{GameConfig, GameRng, GameState};
use crate::zones::{splice, Run, SolveFrom, SolveTo, Splice};

/// Outcome of `Klondike::solve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveResult {
    /// The new state, or the unchanged input if the move was rejected.
    pub game: GameState,

    /// Whether the move was accepted.
    pub moved: bool,

    /// The extraction step: which cards left the source, and the state
    /// right after they did (before they land and before auto-reveal).
    pub spliced: Splice,

    /// The destination actually used. `None` when rejected.
    pub to: Option<SolveTo>,
}

impl SolveResult {
    fn rejected(game: &GameState, spliced: Splice) -> Self {
        Self {
            game: game.clone(),
            moved: false,
            spliced,
            to: None,
        }
    }
}

/// The Klondike rules engine.
///
/// Holds only configuration; game positions are passed in and returned.
#[derive(Clone, Debug, Default)]
pub struct Klondike {
    config: GameConfig,
}

impl Klondike {
    /// Create an engine for the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Move cards from `from` to `to`, or to an auto-routed destination
    /// when `to` is `None`.
    ///
    /// With an explicit destination, the bottom card of the extracted run
    /// must be accepted there. Without one, single cards try each
    /// foundation left to right, then the tableau columns in the configured
    /// route order; runs skip the foundations.
    ///
    /// If a tableau column's visible run empties, its top hidden card is
    /// turned face up.
    ///
    /// Panics if `from` names a column or foundation that does not exist.
    #[must_use]
    pub fn solve(
        &self,
        game: &GameState,
        from: SolveFrom,
        to: Option<SolveTo>,
        rng: &mut GameRng,
    ) -> SolveResult {
        let spliced = splice(game, from);
        let Some(first) = spliced.first().copied() else {
            log::debug!("rejected move from {}: nothing to move", from);
            return SolveResult::rejected(game, spliced);
        };
        let run_len = spliced.cards.len();

        let to = match to {
            Some(to) => {
                if !is_drop_valid(game, &first, run_len, to) {
                    log::debug!("rejected move of {} from {} to {}", first, from, to);
                    return SolveResult::rejected(game, spliced);
                }
                to
            }
            None => match droppable_stock(game, &first, run_len, self.config.route_order, rng) {
                Some(to) => to,
                None => {
                    log::debug!("rejected move of {} from {}: no destination", first, from);
                    return SolveResult::rejected(game, spliced);
                }
            },
        };

        let mut next = spliced.game.clone();
        land(&mut next, &spliced.cards, to);
        if let SolveFrom::SolvedPile { pile_index, .. } = from {
            reveal(&mut next, pile_index);
        }

        log::trace!("moved {} card(s) from {} to {}", run_len, from, to);
        SolveResult {
            game: next,
            moved: true,
            spliced,
            to: Some(to),
        }
    }

    /// Auto-route a card that is not in any zone yet.
    ///
    /// Used to place a loose card (for tests and scripted setups); the
    /// splice records the input state with `card` as the extracted run.
    #[must_use]
    pub fn solve_card(&self, game: &GameState, card: Card, rng: &mut GameRng) -> SolveResult {
        let mut cards = Run::new();
        cards.push(card);
        let spliced = Splice {
            game: game.clone(),
            cards,
        };

        match droppable_stock(game, &card, 1, self.config.route_order, rng) {
            Some(to) => {
                let mut next = game.clone();
                land(&mut next, &spliced.cards, to);
                log::trace!("placed {} on {}", card, to);
                SolveResult {
                    game: next,
                    moved: true,
                    spliced,
                    to: Some(to),
                }
            }
            None => {
                log::debug!("rejected placement of {}: no destination", card);
                SolveResult::rejected(game, spliced)
            }
        }
    }
}

/// Draw one card from the stock onto the waste, or, with the stock empty,
/// turn the waste back over into the stock.
///
/// Turning over restores the stock's original order, so draws cycle
/// through the same sequence. With both piles empty this is a no-op.
#[must_use]
pub fn solve_stock(game: &GameState) -> GameState {
    let mut next = game.clone();
    if let Some(card) = next.stock.pop_back() {
        next.active_stock.push_back(card);
        log::trace!("drew {} from stock", card);
    } else if !next.active_stock.is_empty() {
        next.stock = next.active_stock.iter().rev().copied().collect();
        next.active_stock = Vector::new();
        log::trace!("turned over waste, {} cards back in stock", next.stock.len());
    }
    next
}

fn land(game: &mut GameState, cards: &[Card], to: SolveTo) {
    let pile = match to {
        SolveTo::Foundation { index } => &mut game.foundations[index],
        SolveTo::SolvedPile { index } => &mut game.solved_piles[index],
    };
    pile.extend(cards.iter().copied());
}

fn reveal(game: &mut GameState, column: usize) {
    if !game.solved_piles[column].is_empty() {
        return;
    }
    if let Some(card) = game.piles[column].pop_back() {
        game.solved_piles[column].push_back(card);
        log::trace!("revealed {} on column {}", card, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::core::RouteOrder;
    use im::vector;

    fn card(suit: Suit, number: u8) -> Card {
        Card::new(suit, number)
    }

    fn engine() -> Klondike {
        Klondike::new(GameConfig::default().with_route_order(RouteOrder::LeftToRight))
    }

    #[test]
    fn test_waste_to_foundation_auto() {
        let mut game = GameState::empty(1, 1);
        game.active_stock = vector![card(Suit::Heart, 1)];
        let mut rng = GameRng::new(1);

        let result = engine().solve(&game, SolveFrom::ActiveStock, None, &mut rng);

        assert!(result.moved);
        assert_eq!(result.to, Some(SolveTo::Foundation { index: 0 }));
        assert!(result.game.active_stock.is_empty());
        assert_eq!(result.game.foundations[0], vector![card(Suit::Heart, 1)]);
        assert_eq!(result.spliced.cards.as_slice(), &[card(Suit::Heart, 1)]);
        assert!(result.spliced.game.active_stock.is_empty());
        assert!(result.spliced.game.foundations[0].is_empty());
    }

    #[test]
    fn test_explicit_destination_checked() {
        let mut game = GameState::empty(2, 1);
        game.solved_piles[0] = vector![card(Suit::Spade, 9)];
        game.solved_piles[1] = vector![card(Suit::Heart, 8)];
        let mut rng = GameRng::new(1);

        let ok = engine().solve(
            &game,
            SolveFrom::column_top(1),
            Some(SolveTo::SolvedPile { index: 0 }),
            &mut rng,
        );
        assert!(ok.moved);
        assert_eq!(ok.game.solved_piles[0], vector![card(Suit::Spade, 9), card(Suit::Heart, 8)]);
        assert!(ok.game.solved_piles[1].is_empty());

        let bad = engine().solve(
            &game,
            SolveFrom::column_top(0),
            Some(SolveTo::SolvedPile { index: 1 }),
            &mut rng,
        );
        assert!(!bad.moved);
        assert_eq!(bad.game, game);
        assert_eq!(bad.to, None);
    }

    #[test]
    fn test_out_of_range_destination_rejected() {
        let mut game = GameState::empty(1, 1);
        game.active_stock = vector![card(Suit::Heart, 1)];
        let mut rng = GameRng::new(1);

        for to in [SolveTo::Foundation { index: 4 }, SolveTo::SolvedPile { index: 9 }] {
            let result = engine().solve(&game, SolveFrom::ActiveStock, Some(to), &mut rng);
            assert!(!result.moved);
            assert_eq!(result.game, game);
        }
    }

    #[test]
    fn test_empty_source_rejected() {
        let game = GameState::empty(1, 1);
        let mut rng = GameRng::new(1);

        let result = engine().solve(&game, SolveFrom::ActiveStock, None, &mut rng);
        assert!(!result.moved);
        assert!(result.spliced.is_empty());
        assert_eq!(result.game, game);
    }

    #[test]
    fn test_auto_reveal_after_column_empties() {
        let mut game = GameState::empty(2, 1);
        game.piles[0] = vector![card(Suit::Club, 5), card(Suit::Diamond, 9)];
        game.solved_piles[0] = vector![card(Suit::Heart, 1)];
        let mut rng = GameRng::new(1);

        let result = engine().solve(&game, SolveFrom::column_top(0), None, &mut rng);

        assert!(result.moved);
        assert_eq!(result.game.piles[0], vector![card(Suit::Club, 5)]);
        assert_eq!(result.game.solved_piles[0], vector![card(Suit::Diamond, 9)]);
        // Splice state is pre-reveal
        assert!(result.spliced.game.solved_piles[0].is_empty());
        assert_eq!(result.spliced.game.piles[0].len(), 2);
    }

    #[test]
    fn test_no_reveal_when_moving_from_waste() {
        let mut game = GameState::empty(1, 1);
        game.piles[0] = vector![card(Suit::Club, 5)];
        game.active_stock = vector![card(Suit::Heart, 1)];
        let mut rng = GameRng::new(1);

        let result = engine().solve(&game, SolveFrom::ActiveStock, None, &mut rng);
        assert!(result.moved);
        assert_eq!(result.game.piles[0], vector![card(Suit::Club, 5)]);
        assert!(result.game.solved_piles[0].is_empty());
    }

    #[test]
    fn test_run_cannot_return_to_own_column() {
        let mut game = GameState::empty(1, 1);
        game.solved_piles[0] = vector![card(Suit::Spade, 13), card(Suit::Heart, 12)];
        let mut rng = GameRng::new(1);

        let result = engine().solve(
            &game,
            SolveFrom::column_run(0, 0),
            Some(SolveTo::SolvedPile { index: 0 }),
            &mut rng,
        );
        assert!(!result.moved);
        assert_eq!(result.game, game);
    }

    #[test]
    fn test_foundation_back_to_tableau() {
        let mut game = GameState::empty(1, 1);
        game.foundations[0] = vector![card(Suit::Heart, 1), card(Suit::Heart, 2)];
        game.solved_piles[0] = vector![card(Suit::Spade, 3)];
        let mut rng = GameRng::new(1);

        let result = engine().solve(&game, SolveFrom::Foundation { pile_index: 0 }, None, &mut rng);

        assert!(result.moved);
        assert_eq!(result.to, Some(SolveTo::SolvedPile { index: 0 }));
        assert_eq!(result.game.foundations[0], vector![card(Suit::Heart, 1)]);
        assert_eq!(result.game.solved_piles[0], vector![card(Suit::Spade, 3), card(Suit::Heart, 2)]);
    }

    #[test]
    #[should_panic(expected = "Foundation 2 does not exist")]
    fn test_missing_source_foundation_panics() {
        let game = GameState::empty(1, 1);
        let _ = engine().solve(&game, SolveFrom::Foundation { pile_index: 2 }, None, &mut GameRng::new(1));
    }

    #[test]
    fn test_solve_stock_draw_and_flip() {
        let mut game = GameState::empty(1, 1);
        game.stock = vector![card(Suit::Club, 1), card(Suit::Club, 2)];

        let one = solve_stock(&game);
        assert_eq!(one.stock, vector![card(Suit::Club, 1)]);
        assert_eq!(one.active_stock, vector![card(Suit::Club, 2)]);

        let two = solve_stock(&one);
        assert!(two.stock.is_empty());
        assert_eq!(two.active_stock, vector![card(Suit::Club, 2), card(Suit::Club, 1)]);

        let flipped = solve_stock(&two);
        assert_eq!(flipped.stock, game.stock);
        assert!(flipped.active_stock.is_empty());

        // Input untouched
        assert_eq!(game.stock.len(), 2);
    }

    #[test]
    fn test_solve_stock_both_empty_is_noop() {
        let game = GameState::empty(1, 1);
        assert_eq!(solve_stock(&game), game);
    }

    #[test]
    fn test_solve_card_rejected() {
        let game = GameState::empty(1, 1);
        let result = engine().solve_card(&game, card(Suit::Heart, 5), &mut GameRng::new(1));
        assert!(!result.moved);
        assert_eq!(result.game, game);
    }
}
