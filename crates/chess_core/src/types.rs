use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline(always)]
    pub const fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank the side's king and rooks start on.
    #[inline(always)]
    pub const fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    #[inline(always)]
    pub const fn idx(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

/// A board coordinate. File 0 is the queenside edge (the a-file), rank 0 is
/// white's back rank. Out-of-range squares are representable as transient
/// arithmetic results and answer `is_valid() == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline(always)]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// Linear index, rank-major. Only meaningful for valid squares.
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self.rank * 8 + self.file) as usize
    }

    #[inline(always)]
    pub const fn is_valid(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    #[inline(always)]
    pub const fn offset(self, df: i8, dr: i8) -> Square {
        Square::new(self.file + df, self.rank + dr)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            let file = (b'a' + self.file as u8) as char;
            let rank = (b'1' + self.rank as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "??")
        }
    }
}

/// Special-move markers carried by a [`Move`].
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLE_KINGSIDE: MoveFlags = MoveFlags(1 << 3);
    pub const CASTLE_QUEENSIDE: MoveFlags = MoveFlags(1 << 4);
    pub const NULL: MoveFlags = MoveFlags(1 << 5);

    #[inline(always)]
    pub const fn contains(self, other: MoveFlags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline(always)]
    fn bitor(self, rhs: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for MoveFlags {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: MoveFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for MoveFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(MoveFlags, &str); 6] = [
            (MoveFlags::CAPTURE, "CAPTURE"),
            (MoveFlags::PROMOTION, "PROMOTION"),
            (MoveFlags::EN_PASSANT, "EN_PASSANT"),
            (MoveFlags::CASTLE_KINGSIDE, "CASTLE_KINGSIDE"),
            (MoveFlags::CASTLE_QUEENSIDE, "CASTLE_QUEENSIDE"),
            (MoveFlags::NULL, "NULL"),
        ];
        let mut any = false;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if any {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                any = true;
            }
        }
        if !any {
            write!(f, "QUIET")?;
        }
        Ok(())
    }
}

/// A half-move. Equality is structural over all four fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flags: MoveFlags,
    pub promo: Option<PieceKind>,
}

impl Move {
    /// Sentinel for "no move" slots (killer tables, empty hash entries).
    /// Never produced by the move generator.
    pub const NONE: Move = Move {
        from: Square::new(0, 0),
        to: Square::new(0, 0),
        flags: MoveFlags::QUIET,
        promo: None,
    };

    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            flags: MoveFlags::QUIET,
            promo: None,
        }
    }

    #[inline(always)]
    pub const fn with_flags(from: Square, to: Square, flags: MoveFlags) -> Self {
        Move {
            from,
            to,
            flags,
            promo: None,
        }
    }

    #[inline(always)]
    pub fn is_capture(self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline(always)]
    pub fn is_promotion(self) -> bool {
        self.flags.contains(MoveFlags::PROMOTION)
    }

    #[inline(always)]
    pub fn is_castle(self) -> bool {
        self.flags
            .contains(MoveFlags::CASTLE_KINGSIDE | MoveFlags::CASTLE_QUEENSIDE)
    }
}
