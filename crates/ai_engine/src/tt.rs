//! Transposition table: a fixed-slot cache of search results keyed by the
//! position's zobrist hash, shared by all searchers under a reader/writer
//! lock.

use chess_core::Move;
use std::sync::RwLock;

/// How a cached score relates to the true minimax value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// The true value for the stored depth.
    Exact,
    /// A lower bound: cuts off when it reaches beta.
    Lower,
    /// An upper bound: cuts off when it stays below alpha.
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    /// Full hash, stored so probes can verify the slot matches.
    pub key: u64,
    /// Score relative to the side to move, in centipawns.
    pub score: i16,
    pub depth: i8,
    pub bound: Bound,
    pub best_move: Move,
}

impl Default for TTEntry {
    fn default() -> Self {
        TTEntry {
            key: 0,
            score: 0,
            // Below every real depth, so fresh slots always lose the
            // replacement test.
            depth: -1,
            bound: Bound::Exact,
            best_move: Move::NONE,
        }
    }
}

pub struct TranspositionTable {
    entries: RwLock<Vec<TTEntry>>,
}

impl TranspositionTable {
    pub const DEFAULT_CAPACITY: usize = 1 << 20;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TranspositionTable {
            entries: RwLock::new(vec![TTEntry::default(); capacity.max(1)]),
        }
    }

    /// Returns the entry at `key`'s slot iff it actually belongs to `key`.
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        let entries = self.entries.read().unwrap();
        let entry = entries[(key % entries.len() as u64) as usize];
        (entry.key == key).then_some(entry)
    }

    /// Depth-preferred replacement: the slot is overwritten only when the
    /// incoming entry searched at least as deep as the resident one.
    pub fn store(&self, entry: TTEntry) {
        let mut entries = self.entries.write().unwrap();
        let len = entries.len() as u64;
        let slot = &mut entries[(entry.key % len) as usize];
        if entry.depth >= slot.depth {
            *slot = entry;
        }
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tt_tests.rs"]
mod tt_tests;
