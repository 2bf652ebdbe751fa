//! Zone addressing for moves.
//!
//! ## Key Types
//!
//! - `SolveFrom`: move source (waste, foundation, or tableau run)
//! - `SolveTo`: move destination (foundation or tableau column)
//! - `Splice`: the state after extraction plus the extracted run

pub mod location;

pub use location::{splice, Run, SolveFrom, SolveTo, Splice};
