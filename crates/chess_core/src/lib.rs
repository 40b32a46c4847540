//! Chess rules: board representation, move generation, reversible
//! make/undo, and position hashing. Engine-specific concerns (evaluation,
//! search, parallelism) live in the `ai_engine` crate.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;
pub mod zobrist;

pub use board::{Board, CastlingRights};
pub use error::RuleError;
pub use game::{Game, HistoryEntry};
pub use movegen::{piece_moves, pseudo_moves};
pub use perft::perft;
pub use types::{Color, Move, MoveFlags, Piece, PieceKind, Square};
pub use zobrist::hash_position;
