//! Static evaluation: material plus a mobility bonus, reported relative to
//! the side to move.

use chess_core::{Color, Game, PieceKind, Square};

pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Material balance plus `5 * (own moves - opponent moves)`, the opponent's
/// mobility counted after a null move on a local copy. Degenerate positions
/// where neither side can move evaluate to zero. The result is negated for
/// black so callers always see a side-to-move-relative score.
pub fn evaluate(game: &Game) -> i32 {
    let mut copy = game.clone();
    let own_moves = copy.legal_moves().len() as i32;
    copy.make_null_move();
    let opponent_moves = copy.legal_moves().len() as i32;
    if own_moves == 0 && opponent_moves == 0 {
        return 0;
    }

    let mut score = 0i32;
    for rank in 0..8 {
        for file in 0..8 {
            if let Some(pc) = game.board().at(Square::new(file, rank)) {
                let v = piece_value(pc.kind);
                score += if pc.color == Color::White { v } else { -v };
            }
        }
    }

    score += 5 * own_moves - 5 * opponent_moves;

    if game.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
