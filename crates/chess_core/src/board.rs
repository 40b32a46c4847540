use crate::types::*;

/// The four castling permissions as a 4-bit mask. A bit stays set only
/// while the corresponding king and rook still sit on their home squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1;
    pub const WHITE_QUEENSIDE: u8 = 1 << 1;
    pub const BLACK_KINGSIDE: u8 = 1 << 2;
    pub const BLACK_QUEENSIDE: u8 = 1 << 3;

    pub const ALL: CastlingRights = CastlingRights(0b1111);
    pub const NONE: CastlingRights = CastlingRights(0);

    #[inline(always)]
    pub const fn from_mask(mask: u8) -> Self {
        CastlingRights(mask & 0b1111)
    }

    /// Raw mask, used to index the zobrist castle table.
    #[inline(always)]
    pub const fn mask(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn has(self, bits: u8) -> bool {
        self.0 & bits != 0
    }

    #[inline(always)]
    pub fn clear(&mut self, bits: u8) {
        self.0 &= !bits;
    }

    #[inline(always)]
    pub const fn kingside(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    #[inline(always)]
    pub const fn queenside(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline(always)]
    pub const fn both(color: Color) -> u8 {
        Self::kingside(color) | Self::queenside(color)
    }
}

/// Piece placement plus the per-position rule state: castling rights and
/// the en-passant target square (the square skipped by the previous ply's
/// double pawn push, if any).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Board {
    /// Board with no pieces and no castling rights. Positions are built up
    /// with [`Board::put`].
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// The standard starting position.
    pub fn startpos() -> Self {
        let mut board = Board {
            squares: [None; 64],
            castling: CastlingRights::ALL,
            en_passant: None,
        };

        const BACK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in BACK.iter().enumerate() {
            let file = file as i8;
            board.put(Square::new(file, 0), Piece::new(Color::White, kind));
            board.put(Square::new(file, 7), Piece::new(Color::Black, kind));
        }
        for file in 0..8 {
            board.put(
                Square::new(file, 1),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.put(
                Square::new(file, 6),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
        }
        board
    }

    #[inline(always)]
    pub fn at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline(always)]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Removes and returns whatever occupies `sq`.
    #[inline(always)]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    #[inline(always)]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    #[inline(always)]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline(always)]
    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    #[inline(always)]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline(always)]
    pub fn set_en_passant_target(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square::new(file, rank);
                if let Some(pc) = self.at(sq)
                    && pc.color == color
                    && pc.kind == PieceKind::King
                {
                    return Some(sq);
                }
            }
        }
        None
    }

    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(k) => self.is_square_attacked(k, color.other()),
            None => false,
        }
    }

    /// True iff any piece of `by` could capture on `target`, probed in
    /// reverse from the target square. Ignores castling rights and the
    /// en-passant state.
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawns attack one rank toward the enemy, so probe one rank back.
        let pawn_rank = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            let sq = target.offset(df, pawn_rank);
            if sq.is_valid()
                && let Some(pc) = self.at(sq)
                && pc.color == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

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
        for (df, dr) in KNIGHT_JUMPS {
            let sq = target.offset(df, dr);
            if sq.is_valid()
                && let Some(pc) = self.at(sq)
                && pc.color == by
                && pc.kind == PieceKind::Knight
            {
                return true;
            }
        }

        const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
        for (df, dr) in DIAGONALS {
            if self.ray_hits(target, df, dr, by, PieceKind::Bishop) {
                return true;
            }
        }

        const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        for (df, dr) in ORTHOGONALS {
            if self.ray_hits(target, df, dr, by, PieceKind::Rook) {
                return true;
            }
        }

        for df in -1..=1 {
            for dr in -1..=1 {
                if df == 0 && dr == 0 {
                    continue;
                }
                let sq = target.offset(df, dr);
                if sq.is_valid()
                    && let Some(pc) = self.at(sq)
                    && pc.color == by
                    && pc.kind == PieceKind::King
                {
                    return true;
                }
            }
        }

        false
    }

    /// Scans one ray from `target`; true if the first piece met is a queen
    /// or a `slider` of color `by`.
    fn ray_hits(&self, target: Square, df: i8, dr: i8, by: Color, slider: PieceKind) -> bool {
        let mut sq = target.offset(df, dr);
        while sq.is_valid() {
            if let Some(pc) = self.at(sq) {
                return pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen);
            }
            sq = sq.offset(df, dr);
        }
        false
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
