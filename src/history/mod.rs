//! Snapshot support for undo.
//!
//! `GameState::deep_clone` produces an independent copy; `History` keeps a
//! bounded stack of them for the caller.

pub mod snapshots;

pub use snapshots::History;
