//! Klondike rules.
//!
//! - `engine`: the `Klondike` move engine and stock handling
//! - `drop`: drop legality and auto-route destination search
//! - `queries`: end-of-game checks
//! - `autoplay`: greedy single steps and auto-complete

pub mod autoplay;
pub mod drop;
pub mod engine;
pub mod queries;

pub use autoplay::{card_objective, card_position, AUTO_COMPLETE_LIMIT};
pub use drop::{column_accepts, foundation_accepts, is_drop_valid, is_valid_move};
pub use engine::{solve_stock, Klondike, SolveResult};
pub use queries::{has_piles, is_game_ended, is_stock_ended};
