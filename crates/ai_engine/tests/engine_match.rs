//! End-to-end check: two engines play each other through the public API.

use ai_engine::{AIEngine, SearchOptions};
use chess_core::Game;
use std::sync::Arc;
use worker_pool::ThreadPool;

#[test]
fn engines_trade_legal_moves_from_startpos() {
    let pool = Arc::new(ThreadPool::new(2));
    let opts = SearchOptions {
        max_depth: 2,
        time_ms: 10_000,
        use_nnue: false,
    };
    let white = AIEngine::new(Arc::clone(&pool), opts);
    let black = AIEngine::new(Arc::clone(&pool), opts);

    let mut game = Game::new();
    let mut played = 0;
    for ply in 0..6 {
        let legal = game.legal_moves();
        if legal.is_empty() {
            break;
        }
        let engine = if ply % 2 == 0 { &white } else { &black };
        let mv = engine.choose_move(&game);
        assert!(
            legal.contains(&mv),
            "ply {ply}: engine chose illegal {}-{}",
            mv.from,
            mv.to
        );
        game.make_move(mv).expect("chosen move applies");
        played += 1;

        // Both kings survive every exchange.
        assert!(game.board().king_square(chess_core::Color::White).is_some());
        assert!(game.board().king_square(chess_core::Color::Black).is_some());
    }
    assert_eq!(game.history().len(), played);
}
