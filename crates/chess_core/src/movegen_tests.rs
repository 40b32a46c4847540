use super::*;

fn moves_from(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::new();
    pseudo_moves(board, side, &mut out);
    out
}

#[test]
fn startpos_has_twenty_pseudo_moves() {
    let board = Board::startpos();
    assert_eq!(moves_from(&board, Color::White).len(), 20);
    assert_eq!(moves_from(&board, Color::Black).len(), 20);
}

#[test]
fn generation_order_is_stable() {
    let board = Board::startpos();
    assert_eq!(moves_from(&board, Color::White), moves_from(&board, Color::White));
}

#[test]
fn pawn_double_push_needs_both_squares_empty() {
    let mut board = Board::startpos();
    // Block e3: the e2 pawn loses both push moves.
    board.put(Square::new(4, 2), Piece::new(Color::Black, PieceKind::Knight));
    let moves = moves_from(&board, Color::White);
    assert!(!moves.iter().any(|m| m.from == Square::new(4, 1) && m.to == Square::new(4, 3)));
    assert!(!moves.iter().any(|m| m.from == Square::new(4, 1) && m.to == Square::new(4, 2)));
}

#[test]
fn pawn_capture_targets_enemies_only() {
    let mut board = Board::empty();
    board.put(Square::new(3, 3), Piece::new(Color::White, PieceKind::Pawn));
    board.put(Square::new(2, 4), Piece::new(Color::Black, PieceKind::Rook));
    board.put(Square::new(4, 4), Piece::new(Color::White, PieceKind::Knight));

    let moves = moves_from(&board, Color::White);
    let pawn_moves: Vec<_> = moves.iter().filter(|m| m.from == Square::new(3, 3)).collect();
    assert!(pawn_moves.iter().any(|m| m.to == Square::new(2, 4) && m.is_capture()));
    assert!(!pawn_moves.iter().any(|m| m.to == Square::new(4, 4)));
}

#[test]
fn promotion_defaults_to_queen() {
    let mut board = Board::empty();
    board.put(Square::new(4, 6), Piece::new(Color::White, PieceKind::Pawn));

    let moves = moves_from(&board, Color::White);
    assert_eq!(moves.len(), 1);
    let mv = moves[0];
    assert!(mv.is_promotion());
    assert!(!mv.is_capture());
    assert_eq!(mv.promo, Some(PieceKind::Queen));
}

#[test]
fn promotion_capture_carries_both_flags() {
    let mut board = Board::empty();
    board.put(Square::new(4, 6), Piece::new(Color::White, PieceKind::Pawn));
    board.put(Square::new(4, 7), Piece::new(Color::Black, PieceKind::Rook));
    board.put(Square::new(3, 7), Piece::new(Color::Black, PieceKind::Knight));

    let moves = moves_from(&board, Color::White);
    let cap = moves
        .iter()
        .find(|m| m.to == Square::new(3, 7))
        .expect("promotion capture generated");
    assert!(cap.is_capture() && cap.is_promotion());
    assert_eq!(cap.promo, Some(PieceKind::Queen));
    // Straight ahead is blocked.
    assert!(!moves.iter().any(|m| m.to == Square::new(4, 7)));
}

#[test]
fn en_passant_generated_for_matching_diagonal() {
    let mut board = Board::empty();
    board.put(Square::new(4, 4), Piece::new(Color::White, PieceKind::Pawn));
    board.put(Square::new(3, 4), Piece::new(Color::Black, PieceKind::Pawn));
    board.set_en_passant_target(Some(Square::new(3, 5)));

    let moves = moves_from(&board, Color::White);
    let ep: Vec<_> = moves
        .iter()
        .filter(|m| m.flags.contains(MoveFlags::EN_PASSANT))
        .collect();
    assert_eq!(ep.len(), 1);
    assert_eq!(ep[0].from, Square::new(4, 4));
    assert_eq!(ep[0].to, Square::new(3, 5));
}

#[test]
fn rook_rays_stop_at_blockers() {
    let mut board = Board::empty();
    board.put(Square::new(0, 0), Piece::new(Color::White, PieceKind::Rook));
    board.put(Square::new(0, 3), Piece::new(Color::Black, PieceKind::Pawn));
    board.put(Square::new(2, 0), Piece::new(Color::White, PieceKind::Pawn));

    let moves = moves_from(&board, Color::White);
    let rook: Vec<_> = moves.iter().filter(|m| m.from == Square::new(0, 0)).collect();
    assert!(rook.iter().any(|m| m.to == Square::new(0, 3) && m.is_capture()));
    assert!(!rook.iter().any(|m| m.to == Square::new(0, 4)));
    assert!(rook.iter().any(|m| m.to == Square::new(1, 0)));
    assert!(!rook.iter().any(|m| m.to == Square::new(2, 0)));
}

#[test]
fn castling_requires_empty_and_safe_path() {
    let mut board = Board::empty();
    board.put(Square::new(4, 0), Piece::new(Color::White, PieceKind::King));
    board.put(Square::new(7, 0), Piece::new(Color::White, PieceKind::Rook));
    board.set_castling_rights(CastlingRights::from_mask(CastlingRights::WHITE_KINGSIDE));

    let castle = |board: &Board| {
        moves_from(board, Color::White)
            .into_iter()
            .any(|m| m.flags.contains(MoveFlags::CASTLE_KINGSIDE))
    };
    assert!(castle(&board));

    // A black rook eyeing f1 forbids the traversal.
    board.put(Square::new(5, 7), Piece::new(Color::Black, PieceKind::Rook));
    assert!(!castle(&board));
    board.set(Square::new(5, 7), None);

    // A piece between king and rook forbids it too.
    board.put(Square::new(6, 0), Piece::new(Color::White, PieceKind::Knight));
    assert!(!castle(&board));
    board.set(Square::new(6, 0), None);

    // Without the right, nothing is offered.
    board.set_castling_rights(CastlingRights::NONE);
    assert!(!castle(&board));
}

#[test]
fn capture_generation_matches_attack_detection() {
    // Invariant: every generated capture of an occupied square implies the
    // attack probe agrees from the defender's point of view.
    let mut board = Board::startpos();
    board.put(Square::new(3, 2), Piece::new(Color::Black, PieceKind::Pawn));
    board.put(Square::new(4, 3), Piece::new(Color::White, PieceKind::Knight));
    board.put(Square::new(5, 4), Piece::new(Color::Black, PieceKind::Pawn));

    let mut checked = 0;
    for side in [Color::White, Color::Black] {
        for mv in moves_from(&board, side) {
            if mv.is_capture() {
                assert!(
                    board.is_square_attacked(mv.to, side),
                    "generated capture {}-{} not seen by attack probe",
                    mv.from,
                    mv.to
                );
                checked += 1;
            }
        }
    }
    assert!(checked >= 4, "expected captures on both sides, saw {checked}");
}
