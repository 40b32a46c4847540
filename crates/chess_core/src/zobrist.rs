//! Zobrist position hashing.
//!
//! A position's 64-bit fingerprint is the XOR of random keys for every
//! occupied square, the castling-rights mask, the en-passant file, and the
//! side to move. The key tables are drawn once from a Mersenne Twister with
//! a fixed seed, so hashes are reproducible across runs.

use crate::game::Game;
use crate::types::Color;
use rand_mt::Mt64;
use std::sync::OnceLock;

const ZOBRIST_SEED: u64 = 2025;

/// Random key tables for every hashable position feature.
pub struct ZobristKeys {
    /// Indexed by `[square][piece_kind][color]`.
    pub pieces: [[[u64; 2]; 6]; 64],
    /// XOR-ed in when white is to move.
    pub side_to_move: u64,
    /// Indexed by the 4-bit castling-rights mask.
    pub castling: [u64; 16],
    /// Indexed by the en-passant target file.
    pub en_passant: [u64; 8],
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// The process-wide key tables, generated on first use.
pub fn keys() -> &'static ZobristKeys {
    KEYS.get_or_init(|| {
        let mut rng = Mt64::new(ZOBRIST_SEED);
        let mut pieces = [[[0u64; 2]; 6]; 64];
        for square in pieces.iter_mut() {
            for kind in square.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }
        let side_to_move = rng.next_u64();
        let mut castling = [0u64; 16];
        for key in castling.iter_mut() {
            *key = rng.next_u64();
        }
        let mut en_passant = [0u64; 8];
        for key in en_passant.iter_mut() {
            *key = rng.next_u64();
        }
        ZobristKeys {
            pieces,
            side_to_move,
            castling,
            en_passant,
        }
    })
}

/// Hash of the full position: piece placement, castling rights, en-passant
/// target, and side to move. Two positions agreeing on those four features
/// hash identically regardless of their move history.
pub fn hash_position(game: &Game) -> u64 {
    let keys = keys();
    let board = game.board();

    let mut h = 0u64;
    for rank in 0..8 {
        for file in 0..8 {
            let sq = crate::types::Square::new(file, rank);
            if let Some(pc) = board.at(sq) {
                h ^= keys.pieces[sq.index()][pc.kind.idx()][pc.color.idx()];
            }
        }
    }

    h ^= keys.castling[board.castling_rights().mask() as usize];
    if let Some(ep) = board.en_passant_target() {
        h ^= keys.en_passant[ep.file as usize];
    }
    if game.side_to_move() == Color::White {
        h ^= keys.side_to_move;
    }
    h
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
