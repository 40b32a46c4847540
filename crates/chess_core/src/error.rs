use crate::types::Square;
use thiserror::Error;

/// Rule violations reported by [`Game::make_move`](crate::Game::make_move).
/// The game state is untouched when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleError {
    #[error("move leaves the board: {from} -> {to}")]
    OffBoard { from: Square, to: Square },

    #[error("no piece on source square {square}")]
    EmptySource { square: Square },

    #[error("cannot capture own piece on {square}")]
    FriendlyCapture { square: Square },
}
