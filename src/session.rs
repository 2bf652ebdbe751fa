//! A playing session: the caller-side holder of the current position.
//!
//! The engine itself is stateless. `Session` owns the live `GameState`,
//! replaces it after each accepted move, and records the previous state for
//! undo. Dealing and auto-routing draw from separate RNG streams derived
//! from one seed, so a seed replays both the deal and every routing choice.
//!
//! ```
//! use klondike_engine::{GameConfig, Session, SolveFrom};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7));
//! assert_eq!(session.state().stock.len(), 24);
//!
//! session.solve_stock();
//! assert_eq!(session.state().active_stock.len(), 1);
//!
//! let result = session.solve(SolveFrom::ActiveStock, None);
//! if !result.moved {
//!     assert_eq!(session.state().active_stock.len(), 1);
//! }
//!
//! assert!(session.undo());
//! ```

use crate::core::{GameConfig, GameRng, GameState};
use crate::history::History;
use crate::layout::generate_game;
use crate::rules::{has_piles, is_game_ended, is_stock_ended, solve_stock, Klondike, SolveResult};
use crate::zones::{SolveFrom, SolveTo};

/// Live game plus undo history.
#[derive(Clone, Debug)]
pub struct Session {
    engine: Klondike,
    state: GameState,
    history: History,
    seed: u64,
    deal_rng: GameRng,
    route_rng: GameRng,
}

impl Session {
    /// Start a session and deal the first game.
    ///
    /// Panics if the configuration cannot be dealt.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut deal_rng = root.for_context("deal");
        let route_rng = root.for_context("route");
        let state = generate_game(&config, &mut deal_rng);

        log::debug!("new session with seed {}", root.seed());
        Self {
            history: History::new(config.history_limit),
            engine: Klondike::new(config),
            state,
            seed: root.seed(),
            deal_rng,
            route_rng,
        }
    }

    /// Deal a fresh game and forget the history.
    pub fn new_game(&mut self) {
        self.state = generate_game(self.engine.config(), &mut self.deal_rng);
        self.history.clear();
    }

    /// The seed that reproduces this session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn engine(&self) -> &Klondike {
        &self.engine
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Attempt a move; on success the previous state goes to history.
    pub fn solve(&mut self, from: SolveFrom, to: Option<SolveTo>) -> SolveResult {
        let result = self.engine.solve(&self.state, from, to, &mut self.route_rng);
        if result.moved {
            self.commit(result.game.clone());
        }
        result
    }

    /// Draw from or turn over the stock. Returns whether anything changed.
    pub fn solve_stock(&mut self) -> bool {
        if is_stock_ended(&self.state) {
            return false;
        }
        let next = solve_stock(&self.state);
        self.commit(next);
        true
    }

    /// Take one greedy step.
    pub fn solve_next(&mut self) -> SolveResult {
        let result = self.engine.solve_next(&self.state, &mut self.route_rng);
        if result.moved {
            self.commit(result.game.clone());
        }
        result
    }

    /// Run greedy steps until the game ends or `limit` steps are taken.
    ///
    /// The whole run is a single undo step. Returns the number of steps.
    pub fn auto_complete(&mut self, limit: usize) -> usize {
        let (next, steps) = self.engine.auto_complete(&self.state, &mut self.route_rng, limit);
        if steps > 0 {
            self.commit(next);
        }
        steps
    }

    /// Restore the previous position. Returns false with nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_game_ended(&self) -> bool {
        is_game_ended(&self.state)
    }

    #[must_use]
    pub fn is_stock_ended(&self) -> bool {
        is_stock_ended(&self.state)
    }

    /// Auto-complete is offered once every hidden card is revealed.
    #[must_use]
    pub fn can_auto_solve(&self) -> bool {
        has_piles(&self.state)
    }

    fn commit(&mut self, next: GameState) {
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(&previous);
    }
}
