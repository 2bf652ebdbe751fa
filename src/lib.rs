//! # klondike-engine
//!
//! A Klondike solitaire rules engine: the pure state-transition core behind
//! a solitaire UI.
//!
//! ## Design Principles
//!
//! 1. **Copy-on-Write**: Every entry point takes `&GameState` and returns a
//!    new state. Zones are `im` persistent vectors, so the copy is O(1) and
//!    any retained state doubles as an undo snapshot.
//!
//! 2. **Injected Randomness**: Shuffling and auto-route tie-breaking draw
//!    from a `GameRng` passed in by the caller. A seed replays a game.
//!
//! 3. **Rejections Are Values**: An illegal move returns the input state
//!    with `moved == false`. Only malformed requests (a column that does not
//!    exist) panic.
//!
//! ## Modules
//!
//! - `cards`: Card, suit, color; deck generation and shuffle
//! - `core`: Game state, RNG, configuration
//! - `zones`: Move descriptors and card extraction
//! - `layout`: Dealing the opening position
//! - `rules`: Move engine, drop legality, queries, greedy autoplay
//! - `history`: Undo snapshots
//! - `session`: Caller-side driver holding the live game

pub mod cards;
pub mod core;
pub mod history;
pub mod layout;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{
    generate_deck, generate_decks, is_same_card, shuffle, Card, Color, DeckDefinition, Suit,
};

pub use crate::core::{GameConfig, GameRng, GameRngState, GameState, Pile, RouteOrder};

pub use crate::zones::{SolveFrom, SolveTo, Splice};

pub use crate::layout::{generate_game, generate_piles, Layout};

pub use crate::rules::{
    has_piles, is_game_ended, is_stock_ended, is_valid_move, solve_stock, Klondike, SolveResult,
};

pub use crate::history::History;

pub use crate::session::Session;
