//! Bounded stack of game state snapshots for undo.

use im::Vector;

use crate::core::GameState;

/// Undo history.
///
/// Snapshots share structure with the live state, so keeping hundreds of
/// them costs little more than the cards that actually changed.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<GameState>,
    limit: usize,
}

impl History {
    /// Create a history keeping at most `limit` snapshots (0 = unlimited).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vector::new(),
            limit,
        }
    }

    /// Record a state. Drops the oldest snapshot once over the limit.
    pub fn push(&mut self, state: &GameState) {
        self.snapshots.push_back(state.deep_clone());
        if self.limit > 0 && self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }

    /// Remove and return the most recent snapshot.
    pub fn undo(&mut self) -> Option<GameState> {
        self.snapshots.pop_back()
    }

    /// The most recent snapshot, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&GameState> {
        self.snapshots.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }
}
