//! Core engine types: game state, RNG, configuration.

pub mod config;
pub mod rng;
pub mod state;

pub use config::{GameConfig, RouteOrder, HISTORY_LIMIT, PILES};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Pile};
