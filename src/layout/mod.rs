//! Layout generator: deals a shuffled deck into the opening position.

pub mod deal;

pub use deal::{generate_game, generate_piles, Layout};
