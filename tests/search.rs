//! Engine-level search behavior.

use reynaert::{
    bitmove::BitMove,
    defs::MATE_BOUND,
    engine::{Engine, EngineConfig},
    error::EngineError,
    movelist::MoveList,
    search::SearchLimits,
};

fn engine() -> Engine {
    Engine::new(EngineConfig {
        table_entries: 1 << 16,
        ..EngineConfig::default()
    })
}

#[test]
fn engine_finds_mate_in_one() {
    let mut engine = engine();
    engine.set_position("k7/8/KQ6/8/8/8/8/8 w - - 0 1").unwrap();

    let result = engine.search_sync(SearchLimits { depth: 4 }).unwrap();
    assert!(result.score > MATE_BOUND);

    // The position has more than one mate, accept any move that ends
    // the game in check
    let mut board = engine.board().clone();
    board.make_move(result.best_move);
    assert!(board.in_check());
    assert!(MoveList::legal(&board).is_empty());
}

#[test]
fn concurrent_searches_are_rejected() {
    let mut engine = engine();
    engine.start_search(SearchLimits { depth: 64 }).unwrap();

    assert!(matches!(
        engine.start_search(SearchLimits { depth: 1 }),
        Err(EngineError::SearchInProgress)
    ));

    engine.cancel();
    engine.wait().unwrap();
}

#[test]
fn cancel_returns_a_playable_move() {
    let mut engine = engine();
    engine
        .set_position("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    engine.start_search(SearchLimits { depth: 64 }).unwrap();
    engine.cancel();

    let result = engine.wait().unwrap();
    assert!(MoveList::legal(engine.board()).contains(result.best_move));
}

#[test]
fn search_picks_the_free_piece() {
    let mut engine = engine();
    engine
        .set_position("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1")
        .unwrap();

    let result = engine.search_sync(SearchLimits { depth: 4 }).unwrap();
    assert_eq!(BitMove::pretty_move(result.best_move), "d2d5");
}
