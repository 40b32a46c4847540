//! Iterative-deepening negamax alpha-beta.
//!
//! One [`Searcher`] drives a search: it owns the killer and history tables
//! and shares the transposition table and the cooperative stop flag with
//! every worker. At the root depth each child subtree is dispatched to the
//! worker pool on its own deep copy of the game; all other nodes recurse
//! sequentially with make/undo on the local game.

use crate::eval::evaluate;
use crate::tt::{Bound, TTEntry, TranspositionTable};
use chess_core::{hash_position, Game, Move};
use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use worker_pool::ThreadPool;

/// Upper bound on search depth; killer tables are sized to it.
pub const MAX_PLY: usize = 64;

const SCORE_INF: i32 = 100_000;
const MATE_SCORE: i32 = 10_000;
const ASPIRATION_WINDOW: i32 = 50;

pub(crate) struct Searcher {
    tt: Arc<TranspositionTable>,
    stop: Arc<AtomicBool>,
    pool: Arc<ThreadPool>,
    max_depth: i32,
    killers: [[Move; 2]; MAX_PLY],
    history: [[u16; 64]; 64],
}

impl Searcher {
    pub(crate) fn new(
        tt: Arc<TranspositionTable>,
        stop: Arc<AtomicBool>,
        pool: Arc<ThreadPool>,
        max_depth: i32,
    ) -> Self {
        Searcher {
            tt,
            stop,
            pool,
            max_depth,
            killers: [[Move::NONE; 2]; MAX_PLY],
            history: [[0; 64]; 64],
        }
    }

    /// Searches `root` with widening depth until `max_depth` or the time
    /// budget runs out, then reads the chosen move back from the root's
    /// transposition entry. Returns the move and the last completed
    /// depth's score.
    pub(crate) fn iterative_deepening(
        &mut self,
        root: &mut Game,
        time_limit: Duration,
    ) -> (Move, i32) {
        let started = Instant::now();
        let mut alpha = -SCORE_INF;
        let mut beta = SCORE_INF;
        let mut best_score = 0;

        for depth in 1..=self.max_depth {
            let mut score = self.alpha_beta(root, depth, alpha, beta, true);

            // Outside the aspiration window: redo with the full window.
            if score <= alpha || score >= beta {
                alpha = -SCORE_INF;
                beta = SCORE_INF;
                score = self.alpha_beta(root, depth, alpha, beta, true);
            }
            best_score = score;
            log::debug!("depth {depth} score {score}");

            alpha = score - ASPIRATION_WINDOW;
            beta = score + ASPIRATION_WINDOW;

            if started.elapsed() > time_limit {
                self.stop.store(true, Ordering::Relaxed);
                break;
            }
        }

        let mut best_move = match self.tt.probe(hash_position(root)) {
            Some(entry) => entry.best_move,
            None => Move::NONE,
        };
        if best_move == Move::NONE {
            // Only reachable when the stop flag fired before depth 1
            // finished; any legal move beats none.
            best_move = root.legal_moves().first().copied().unwrap_or(Move::NONE);
        }
        (best_move, best_score)
    }

    /// Negamax with alpha-beta pruning; the score is relative to the side
    /// to move. `depth == self.max_depth` marks the root, where child
    /// subtrees fan out to the worker pool.
    pub(crate) fn alpha_beta(
        &mut self,
        g: &mut Game,
        depth: i32,
        mut alpha: i32,
        beta: i32,
        null_allowed: bool,
    ) -> i32 {
        if self.stop.load(Ordering::Relaxed) {
            return evaluate(g);
        }
        if depth == 0 {
            return evaluate(g);
        }

        let key = hash_position(g);
        let mut pv_move = Move::NONE;
        if let Some(entry) = self.tt.probe(key) {
            pv_move = entry.best_move;
            if i32::from(entry.depth) >= depth {
                let score = i32::from(entry.score);
                match entry.bound {
                    Bound::Exact => return score,
                    Bound::Lower if score >= beta => return score,
                    Bound::Upper if score <= alpha => return score,
                    _ => {}
                }
            }
        }

        // Null-move pruning: forfeit the turn and search reduced with a
        // zero-width window; a score still at or above beta cuts off. Not
        // re-entered from a null parent.
        if null_allowed && depth >= 3 {
            g.make_null_move();
            let score = -self.alpha_beta(g, depth - 3, -beta, -beta + 1, false);
            g.undo_move();
            if score >= beta {
                return score;
            }
        }

        let mut moves = g.legal_moves();
        if moves.is_empty() {
            let ply = self.max_depth - depth;
            let side = g.side_to_move();
            let mated = match g.board().king_square(side) {
                Some(k) => g.board().is_square_attacked(k, side.other()),
                None => false,
            };
            // Prefer shorter mates; stalemate is a draw.
            return if mated { -(MATE_SCORE - ply) } else { 0 };
        }

        let ply = (self.max_depth - depth).clamp(0, MAX_PLY as i32 - 1) as usize;
        self.order_moves(&mut moves, pv_move, ply);

        let orig_alpha = alpha;
        let mut best_local = Move::NONE;

        if depth == self.max_depth {
            alpha = self.search_root(g, &moves, depth, alpha, beta, &mut best_local);
        } else {
            for &mv in &moves {
                if g.make_move(mv).is_err() {
                    continue;
                }
                let score = -self.alpha_beta(g, depth - 1, -beta, -alpha, true);
                g.undo_move();

                if score > alpha {
                    alpha = score;
                    best_local = mv;

                    let slot = &mut self.history[mv.from.index()][mv.to.index()];
                    *slot = slot.saturating_add((depth * depth) as u16);

                    if alpha >= beta {
                        if !mv.is_capture() {
                            self.killers[ply][1] = self.killers[ply][0];
                            self.killers[ply][0] = mv;
                        }
                        break;
                    }
                }
            }
        }

        let bound = if alpha <= orig_alpha {
            Bound::Upper
        } else if alpha >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TTEntry {
            key,
            score: alpha.clamp(i16::MIN as i32, i16::MAX as i32) as i16,
            depth: depth.min(i8::MAX as i32) as i8,
            bound,
            best_move: best_local,
        });
        alpha
    }

    /// Fans the root's children out to the worker pool, one task per move
    /// on its own copy of the game. Siblings all search against the
    /// initial root window; the best (score, move) pair is aggregated
    /// under a mutex as results arrive. A failed subtree is logged and
    /// contributes nothing.
    fn search_root(
        &self,
        g: &Game,
        moves: &[Move],
        depth: i32,
        alpha: i32,
        beta: i32,
        best_local: &mut Move,
    ) -> i32 {
        let best = Arc::new(Mutex::new((-SCORE_INF, Move::NONE)));
        let mut pending = Vec::with_capacity(moves.len());

        for &mv in moves {
            let mut child = g.clone();
            let tt = Arc::clone(&self.tt);
            let stop = Arc::clone(&self.stop);
            let pool = Arc::clone(&self.pool);
            let best = Arc::clone(&best);
            let max_depth = self.max_depth;

            let handle = self.pool.enqueue(move || {
                if let Err(err) = child.make_move(mv) {
                    log::error!("root move {}-{} rejected: {err}", mv.from, mv.to);
                    return;
                }
                let mut worker = Searcher::new(tt, stop, pool, max_depth);
                let score = -worker.alpha_beta(&mut child, depth - 1, -beta, -alpha, true);

                let mut slot = best.lock().unwrap();
                if score > slot.0 {
                    *slot = (score, mv);
                }
            });
            pending.push((mv, handle));
        }

        for (mv, handle) in pending {
            if let Err(err) = handle.wait() {
                log::error!("worker failed for root move {}-{}: {err}", mv.from, mv.to);
            }
        }

        let (score, mv) = *best.lock().unwrap();
        // Every subtree failing still has to answer with something legal.
        *best_local = if mv == Move::NONE { moves[0] } else { mv };
        score
    }

    /// Stable descending sort: hash move first, then captures, then the
    /// ply's killers, then by history counter. Ties keep generation order.
    fn order_moves(&self, moves: &mut [Move], pv_move: Move, ply: usize) {
        moves.sort_by_key(|&mv| {
            Reverse(if mv == pv_move {
                10_000
            } else if mv.is_capture() {
                8_000
            } else if mv == self.killers[ply][0] {
                5_000
            } else if mv == self.killers[ply][1] {
                4_000
            } else {
                i32::from(self.history[mv.from.index()][mv.to.index()])
            })
        });
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
