use crate::board::{Board, CastlingRights};
use crate::error::RuleError;
use crate::movegen;
use crate::types::*;

/// Everything needed to reverse one make: the move itself, the captured
/// piece (owned here until undo returns it to the board), and the rule
/// state the move overwrote.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
}

/// A game in progress: board, side to move, and the move history. The
/// history stack is the sole source of truth for undo. Cloning yields the
/// independent deep copy handed to search workers.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// A fresh game from the standard starting position, white to move.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    /// Wraps an arbitrary position, e.g. one built by a presenter or test.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            side_to_move,
            history: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline(always)]
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    /// Applies `mv`. All preconditions are checked before the first board
    /// mutation, so a rejected move leaves the game untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), RuleError> {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            return Err(RuleError::OffBoard {
                from: mv.from,
                to: mv.to,
            });
        }
        let mover = self
            .board
            .at(mv.from)
            .ok_or(RuleError::EmptySource { square: mv.from })?;
        if let Some(target) = self.board.at(mv.to)
            && target.color == mover.color
        {
            return Err(RuleError::FriendlyCapture { square: mv.to });
        }

        let mut entry = HistoryEntry {
            mv,
            captured: None,
            castling: self.board.castling_rights(),
            en_passant: self.board.en_passant_target(),
        };

        if mv.flags.contains(MoveFlags::EN_PASSANT) {
            // The victim pawn sits behind the target square.
            entry.captured = self.board.take(Square::new(mv.to.file, mv.from.rank));
        } else if mv.flags.contains(MoveFlags::CAPTURE) {
            entry.captured = self.board.take(mv.to);
        }

        let mut rights = self.board.castling_rights();
        let back = self.side_to_move.back_rank();
        if mover.kind == PieceKind::King {
            rights.clear(CastlingRights::both(self.side_to_move));
        }
        if mover.kind == PieceKind::Rook {
            if mv.from == Square::new(0, back) {
                rights.clear(CastlingRights::queenside(self.side_to_move));
            }
            if mv.from == Square::new(7, back) {
                rights.clear(CastlingRights::kingside(self.side_to_move));
            }
        }
        if let Some(captured) = entry.captured
            && captured.kind == PieceKind::Rook
        {
            let opponent = self.side_to_move.other();
            let opp_back = opponent.back_rank();
            if mv.to == Square::new(0, opp_back) {
                rights.clear(CastlingRights::queenside(opponent));
            }
            if mv.to == Square::new(7, opp_back) {
                rights.clear(CastlingRights::kingside(opponent));
            }
        }
        self.board.set_castling_rights(rights);

        let mut placed = mover;
        if mv.flags.contains(MoveFlags::PROMOTION) {
            placed = Piece::new(mover.color, mv.promo.unwrap_or(PieceKind::Queen));
        }
        self.board.set(mv.from, None);
        self.board.put(mv.to, placed);

        if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
            let rook = self.board.take(Square::new(7, back));
            self.board.set(Square::new(5, back), rook);
        } else if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
            let rook = self.board.take(Square::new(0, back));
            self.board.set(Square::new(3, back), rook);
        }

        self.board.set_en_passant_target(None);
        if mover.kind == PieceKind::Pawn && (mv.to.rank - mv.from.rank).abs() == 2 {
            self.board.set_en_passant_target(Some(Square::new(
                mv.from.file,
                (mv.from.rank + mv.to.rank) / 2,
            )));
        }

        self.history.push(entry);
        self.side_to_move = self.side_to_move.other();
        Ok(())
    }

    /// Forfeits the turn: flips the side to move and clears the en-passant
    /// target, leaving the pieces alone. Used by the search to probe how
    /// far a side stands above beta. Reversed by [`Game::undo_move`].
    pub fn make_null_move(&mut self) {
        self.history.push(HistoryEntry {
            mv: Move {
                flags: MoveFlags::NULL,
                ..Move::NONE
            },
            captured: None,
            castling: self.board.castling_rights(),
            en_passant: self.board.en_passant_target(),
        });
        self.board.set_en_passant_target(None);
        self.side_to_move = self.side_to_move.other();
    }

    /// Exactly reverses the most recent make (null included). The history
    /// must be non-empty.
    pub fn undo_move(&mut self) {
        let entry = self
            .history
            .pop()
            .expect("undo_move called with empty history");

        self.side_to_move = self.side_to_move.other();
        self.board.set_castling_rights(entry.castling);
        self.board.set_en_passant_target(entry.en_passant);

        let mv = entry.mv;
        if mv.flags.contains(MoveFlags::NULL) {
            return;
        }

        // side_to_move has been flipped back, so it is the mover again.
        let back = self.side_to_move.back_rank();
        let mut piece = self.board.take(mv.to);
        if mv.flags.contains(MoveFlags::PROMOTION) {
            piece = Some(Piece::new(self.side_to_move, PieceKind::Pawn));
        }
        self.board.set(mv.from, piece);

        if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
            let rook = self.board.take(Square::new(5, back));
            self.board.set(Square::new(7, back), rook);
        } else if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
            let rook = self.board.take(Square::new(3, back));
            self.board.set(Square::new(0, back), rook);
        }

        if let Some(captured) = entry.captured {
            if mv.flags.contains(MoveFlags::EN_PASSANT) {
                self.board.put(Square::new(mv.to.file, mv.from.rank), captured);
            } else {
                self.board.put(mv.to, captured);
            }
        }
    }

    /// All fully legal moves for the side to move, in generation order.
    /// Empty means checkmate or stalemate. Filtering plays each candidate
    /// on one scratch clone and rejects it if the mover's king ends up
    /// attacked.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        movegen::pseudo_moves(&self.board, self.side_to_move, &mut out);

        let mover = self.side_to_move;
        let mut scratch = self.clone();
        out.retain(|&mv| {
            if scratch.make_move(mv).is_err() {
                return false;
            }
            let safe = match scratch.board.king_square(mover) {
                Some(k) => !scratch.board.is_square_attacked(k, mover.other()),
                None => true,
            };
            scratch.undo_move();
            safe
        });
        out
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
