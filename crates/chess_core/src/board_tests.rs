use super::*;

#[test]
fn startpos_layout() {
    let board = Board::startpos();
    assert_eq!(
        board.at(Square::new(4, 0)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        board.at(Square::new(3, 7)),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    for file in 0..8 {
        assert_eq!(
            board.at(Square::new(file, 1)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(
            board.at(Square::new(file, 6)),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }
    assert_eq!(board.at(Square::new(4, 3)), None);
    assert_eq!(board.castling_rights(), CastlingRights::ALL);
    assert_eq!(board.en_passant_target(), None);
}

#[test]
fn castling_rights_bits() {
    let mut rights = CastlingRights::ALL;
    assert!(rights.has(CastlingRights::kingside(Color::White)));
    rights.clear(CastlingRights::both(Color::White));
    assert!(!rights.has(CastlingRights::WHITE_KINGSIDE));
    assert!(!rights.has(CastlingRights::WHITE_QUEENSIDE));
    assert!(rights.has(CastlingRights::BLACK_KINGSIDE));
    assert_eq!(rights.mask(), 0b1100);
}

#[test]
fn take_transfers_ownership() {
    let mut board = Board::startpos();
    let pawn = board.take(Square::new(4, 1));
    assert_eq!(pawn, Some(Piece::new(Color::White, PieceKind::Pawn)));
    assert_eq!(board.at(Square::new(4, 1)), None);
}

#[test]
fn king_square_scan() {
    let board = Board::startpos();
    assert_eq!(board.king_square(Color::White), Some(Square::new(4, 0)));
    assert_eq!(board.king_square(Color::Black), Some(Square::new(4, 7)));
    assert_eq!(Board::empty().king_square(Color::White), None);
}

#[test]
fn pawn_attacks_are_color_directed() {
    let mut board = Board::empty();
    board.put(Square::new(3, 3), Piece::new(Color::White, PieceKind::Pawn));

    // A white pawn on d4 attacks c5 and e5, not c3/e3.
    assert!(board.is_square_attacked(Square::new(2, 4), Color::White));
    assert!(board.is_square_attacked(Square::new(4, 4), Color::White));
    assert!(!board.is_square_attacked(Square::new(2, 2), Color::White));
    assert!(!board.is_square_attacked(Square::new(3, 4), Color::White));
}

#[test]
fn sliding_attacks_are_blocked() {
    let mut board = Board::empty();
    board.put(Square::new(0, 0), Piece::new(Color::White, PieceKind::Rook));
    board.put(Square::new(0, 4), Piece::new(Color::Black, PieceKind::Pawn));

    assert!(board.is_square_attacked(Square::new(0, 4), Color::White));
    assert!(!board.is_square_attacked(Square::new(0, 5), Color::White));
    assert!(board.is_square_attacked(Square::new(5, 0), Color::White));
}

#[test]
fn knight_attacks_jump_over_pieces() {
    let mut board = Board::empty();
    board.put(
        Square::new(1, 0),
        Piece::new(Color::White, PieceKind::Knight),
    );
    board.put(Square::new(1, 1), Piece::new(Color::White, PieceKind::Pawn));
    board.put(Square::new(2, 1), Piece::new(Color::White, PieceKind::Pawn));

    assert!(board.is_square_attacked(Square::new(2, 2), Color::White));
    assert!(board.is_square_attacked(Square::new(0, 2), Color::White));
    assert!(!board.is_square_attacked(Square::new(1, 2), Color::White));
}

#[test]
fn queen_attacks_both_ray_families() {
    let mut board = Board::empty();
    board.put(
        Square::new(3, 3),
        Piece::new(Color::Black, PieceKind::Queen),
    );

    assert!(board.is_square_attacked(Square::new(3, 7), Color::Black));
    assert!(board.is_square_attacked(Square::new(7, 7), Color::Black));
    assert!(board.is_square_attacked(Square::new(0, 0), Color::Black));
    assert!(!board.is_square_attacked(Square::new(4, 1), Color::Black));
}

#[test]
fn attack_detection_ignores_en_passant_state() {
    let mut board = Board::empty();
    board.put(Square::new(0, 0), Piece::new(Color::White, PieceKind::King));
    let before = board.is_square_attacked(Square::new(3, 5), Color::White);
    board.set_en_passant_target(Some(Square::new(3, 5)));
    assert_eq!(board.is_square_attacked(Square::new(3, 5), Color::White), before);
}

#[test]
fn in_check_detects_contact() {
    let mut board = Board::empty();
    board.put(Square::new(4, 0), Piece::new(Color::White, PieceKind::King));
    board.put(Square::new(4, 7), Piece::new(Color::Black, PieceKind::King));
    assert!(!board.in_check(Color::White));

    board.put(Square::new(4, 5), Piece::new(Color::Black, PieceKind::Rook));
    assert!(board.in_check(Color::White));
    assert!(!board.in_check(Color::Black));
}
