//! Session tests: the caller-side loop of move, poll, and undo.

use klondike_engine::rules::AUTO_COMPLETE_LIMIT;
use klondike_engine::{GameConfig, RouteOrder, Session, SolveFrom};

fn session(seed: u64) -> Session {
    Session::new(GameConfig::default().with_seed(seed))
}

// =============================================================================
// Replay
// =============================================================================

#[test]
fn test_greedy_play_replays_from_seed() {
    let mut a = session(2024);
    let mut b = session(2024);

    for _ in 0..60 {
        let ra = a.solve_next();
        let rb = b.solve_next();
        assert_eq!(ra.moved, rb.moved);
        assert_eq!(ra.to, rb.to);
    }
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_explicit_moves_replay_from_seed() {
    let mut a = session(31);
    let mut b = session(31);

    for column in 0..7 {
        let ra = a.solve(SolveFrom::column_top(column), None);
        let rb = b.solve(SolveFrom::column_top(column), None);
        assert_eq!(ra.to, rb.to);
    }
    assert_eq!(a.state(), b.state());
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_unwinds_to_deal() {
    let mut session = session(77);
    let start = session.state().clone();

    let mut accepted = 0;
    for _ in 0..40 {
        if session.solve_next().moved {
            accepted += 1;
        }
    }
    assert_eq!(session.history().len(), accepted);

    while session.undo() {}
    assert_eq!(session.state(), &start);
}

#[test]
fn test_history_limit_caps_undo() {
    let config = GameConfig::default()
        .with_seed(5)
        .with_history_limit(3)
        .with_route_order(RouteOrder::LeftToRight);
    let mut session = Session::new(config);

    for _ in 0..10 {
        session.solve_stock();
    }

    assert_eq!(session.history().len(), 3);
    assert!(session.undo());
    assert!(session.undo());
    assert!(session.undo());
    assert!(!session.undo());
    assert_eq!(session.state().active_stock.len(), 7);
}

// =============================================================================
// End-of-game Flags
// =============================================================================

#[test]
fn test_flags_on_fresh_deal() {
    let session = session(1);

    assert!(!session.is_game_ended());
    assert!(!session.is_stock_ended());
    assert!(!session.can_auto_solve());
}

#[test]
fn test_auto_complete_is_one_undo_step() {
    let mut session = session(9);
    let start = session.state().clone();

    let steps = session.auto_complete(AUTO_COMPLETE_LIMIT);

    assert!(steps > 0);
    assert_eq!(session.history().len(), 1);
    assert!(session.undo());
    assert_eq!(session.state(), &start);
}
