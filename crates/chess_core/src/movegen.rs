//! Pseudo-legal move generation.
//!
//! Each piece kind contributes its geometric moves from a square; king
//! safety is the caller's concern (`Game::legal_moves` filters). Generation
//! order is fixed: rank-major board scan, then each generator's internal
//! offset order, so the move list is order-stable for a given position.

use crate::board::{Board, CastlingRights};
use crate::types::*;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Generate all pseudo-legal moves for `side` into `out`.
pub fn pseudo_moves(board: &Board, side: Color, out: &mut Vec<Move>) {
    for rank in 0..8 {
        for file in 0..8 {
            let from = Square::new(file, rank);
            if let Some(pc) = board.at(from)
                && pc.color == side
            {
                piece_moves(board, pc, from, out);
            }
        }
    }
}

/// Pseudo-legal moves of a single piece standing on `from`.
pub fn piece_moves(board: &Board, piece: Piece, from: Square, out: &mut Vec<Move>) {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece.color, from, out),
        PieceKind::Knight => knight_moves(board, piece.color, from, out),
        PieceKind::Bishop => ray_moves(board, piece.color, from, &DIAGONALS, out),
        PieceKind::Rook => ray_moves(board, piece.color, from, &ORTHOGONALS, out),
        PieceKind::Queen => {
            ray_moves(board, piece.color, from, &DIAGONALS, out);
            ray_moves(board, piece.color, from, &ORTHOGONALS, out);
        }
        PieceKind::King => king_moves(board, piece.color, from, out),
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Move>) {
    let (dir, start_rank, promo_rank) = match color {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    let forward = from.offset(0, dir);
    if forward.is_valid() && board.at(forward).is_none() {
        let mut mv = Move::new(from, forward);
        if forward.rank == promo_rank {
            mv.flags = MoveFlags::PROMOTION;
            mv.promo = Some(PieceKind::Queen);
        }
        out.push(mv);

        // Double push only from the start rank, and only through an empty
        // intermediate square.
        if from.rank == start_rank {
            let double = from.offset(0, 2 * dir);
            if double.is_valid() && board.at(double).is_none() {
                out.push(Move::new(from, double));
            }
        }
    }

    for df in [-1, 1] {
        let cap = from.offset(df, dir);
        if !cap.is_valid() {
            continue;
        }
        if let Some(tgt) = board.at(cap)
            && tgt.color != color
        {
            let mut mv = Move::with_flags(from, cap, MoveFlags::CAPTURE);
            if cap.rank == promo_rank {
                mv.flags = MoveFlags::CAPTURE | MoveFlags::PROMOTION;
                mv.promo = Some(PieceKind::Queen);
            }
            out.push(mv);
        }
        if board.en_passant_target() == Some(cap) {
            out.push(Move::with_flags(from, cap, MoveFlags::EN_PASSANT));
        }
    }
}

fn knight_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Move>) {
    for (df, dr) in KNIGHT_JUMPS {
        let to = from.offset(df, dr);
        if !to.is_valid() {
            continue;
        }
        match board.at(to) {
            None => out.push(Move::new(from, to)),
            Some(tgt) if tgt.color != color => {
                out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
            }
            Some(_) => {}
        }
    }
}

fn ray_moves(board: &Board, color: Color, from: Square, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut to = from.offset(df, dr);
        while to.is_valid() {
            match board.at(to) {
                None => out.push(Move::new(from, to)),
                Some(tgt) => {
                    if tgt.color != color {
                        out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
                    }
                    break;
                }
            }
            to = to.offset(df, dr);
        }
    }
}

fn king_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Move>) {
    for df in -1..=1 {
        for dr in -1..=1 {
            if df == 0 && dr == 0 {
                continue;
            }
            let to = from.offset(df, dr);
            if !to.is_valid() {
                continue;
            }
            match board.at(to) {
                None => out.push(Move::new(from, to)),
                Some(tgt) if tgt.color != color => {
                    out.push(Move::with_flags(from, to, MoveFlags::CAPTURE));
                }
                Some(_) => {}
            }
        }
    }

    castling_moves(board, color, from, out);
}

/// Castling is offered when the right survives, the squares between king
/// and rook are empty, and the king's origin, destination, and traversed
/// square are all safe. The post-apply legality filter stays as a backstop.
fn castling_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Move>) {
    let back = color.back_rank();
    let rights = board.castling_rights();
    let enemy = color.other();

    if rights.has(CastlingRights::kingside(color)) {
        let e = Square::new(4, back);
        let f = Square::new(5, back);
        let g = Square::new(6, back);
        if board.at(f).is_none()
            && board.at(g).is_none()
            && !board.is_square_attacked(e, enemy)
            && !board.is_square_attacked(f, enemy)
            && !board.is_square_attacked(g, enemy)
        {
            out.push(Move::with_flags(from, g, MoveFlags::CASTLE_KINGSIDE));
        }
    }

    if rights.has(CastlingRights::queenside(color)) {
        let e = Square::new(4, back);
        let d = Square::new(3, back);
        let c = Square::new(2, back);
        let b = Square::new(1, back);
        if board.at(d).is_none()
            && board.at(c).is_none()
            && board.at(b).is_none()
            && !board.is_square_attacked(e, enemy)
            && !board.is_square_attacked(d, enemy)
            && !board.is_square_attacked(c, enemy)
        {
            out.push(Move::with_flags(from, c, MoveFlags::CASTLE_QUEENSIDE));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
