//! Alpha-beta chess engine with a parallel root.
//!
//! [`AIEngine`] wraps iterative-deepening negamax search over a shared
//! transposition table. Root subtrees are evaluated on a [`ThreadPool`],
//! each on its own copy of the game; the input game is never mutated.

mod error;
mod eval;
mod search;
mod tt;

pub use error::EngineError;
pub use eval::{evaluate, piece_value};
pub use search::MAX_PLY;
pub use tt::{Bound, TTEntry, TranspositionTable};

use chess_core::{Game, Move};
use search::Searcher;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use worker_pool::ThreadPool;

/// Search configuration. `use_nnue` is reserved for a future learned
/// evaluator and changes no behavior today.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    /// Maximum search depth in plies.
    pub max_depth: u32,
    /// Wall-clock budget per move in milliseconds.
    pub time_ms: u64,
    pub use_nnue: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_depth: 6,
            time_ms: 5000,
            use_nnue: false,
        }
    }
}

pub struct AIEngine {
    pool: Arc<ThreadPool>,
    opt: SearchOptions,
    tt: Arc<TranspositionTable>,
    stop: Arc<AtomicBool>,
}

impl AIEngine {
    /// `max_depth` is clamped to `MAX_PLY - 1`.
    pub fn new(pool: Arc<ThreadPool>, mut opt: SearchOptions) -> Self {
        if opt.max_depth as usize >= MAX_PLY {
            opt.max_depth = MAX_PLY as u32 - 1;
        }
        AIEngine {
            pool,
            opt,
            tt: Arc::new(TranspositionTable::new()),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn options(&self) -> SearchOptions {
        self.opt
    }

    /// Picks a move for the side to move within the configured depth and
    /// time budget. Searches a copy; `game` itself is never mutated. The
    /// result is only meaningful when the position has a legal reply —
    /// callers must check for game over themselves.
    pub fn choose_move(&self, game: &Game) -> Move {
        self.stop.store(false, Ordering::Relaxed);
        let mut root = game.clone();
        let mut searcher = Searcher::new(
            Arc::clone(&self.tt),
            Arc::clone(&self.stop),
            Arc::clone(&self.pool),
            self.opt.max_depth as i32,
        );
        let (best, _score) =
            searcher.iterative_deepening(&mut root, Duration::from_millis(self.opt.time_ms));
        best
    }

    pub fn set_time_limit(&mut self, ms: u64) -> Result<(), EngineError> {
        if ms < 100 {
            return Err(EngineError::TimeLimitTooSmall(ms));
        }
        self.opt.time_ms = ms;
        Ok(())
    }

    pub fn set_max_depth(&mut self, depth: u32) -> Result<(), EngineError> {
        if depth < 1 || depth as usize >= MAX_PLY {
            return Err(EngineError::DepthOutOfRange(depth));
        }
        self.opt.max_depth = depth;
        Ok(())
    }

    /// Reserved switch: stays a no-op until a learned evaluator exists.
    pub fn enable_nnue(&mut self, on: bool) {
        self.opt.use_nnue = on;
    }
}
