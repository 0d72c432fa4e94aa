use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::{Board, Color, Piece, PieceKind, Promotion, Square};

/// Supplies the piece a pawn becomes on the far rank.
///
/// Called only when the move being played is a promotion, after the move
/// has been validated.
pub trait PromotionChooser {
    fn choose(&mut self, color: Color, square: Square) -> Promotion;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Promotion,
{
    fn choose(&mut self, color: Color, square: Square) -> Promotion {
        self(color, square)
    }
}

/// Promotes every pawn to a queen.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysQueen;

impl PromotionChooser for AlwaysQueen {
    fn choose(&mut self, _color: Color, _square: Square) -> Promotion {
        Promotion::Queen
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialMove {
    CastleKingside,
    CastleQueenside,
    DoublePawnPush,
    EnPassant,
    Promotion(Promotion),
}

/// What a move did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood before moving
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Moved(MoveRecord),
    /// The move took the opposing king; the mover has won.
    KingCaptured(MoveRecord),
}

impl MoveOutcome {
    #[must_use]
    pub const fn record(&self) -> &MoveRecord {
        match self {
            MoveOutcome::Moved(record) | MoveOutcome::KingCaptured(record) => record,
        }
    }

    #[must_use]
    pub const fn is_king_capture(&self) -> bool {
        matches!(self, MoveOutcome::KingCaptured(_))
    }
}

impl Board {
    /// Relocate the piece on `from` to `to`, performing the castling rook
    /// hop, en passant removal and promotion the move implies, and update
    /// the en passant target.
    ///
    /// Does not validate the move, switch the turn or touch the counters.
    pub(crate) fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Promotion,
    ) -> Option<MoveRecord> {
        let previous_ep = self.en_passant_target.take();
        let piece = self.take_piece(from)?;
        let mut captured = self.take_piece(to);
        let mut special = None;
        let mut placed = piece.moved();

        match piece.kind {
            PieceKind::King if from.1.abs_diff(to.1) == 2 => {
                let kingside = to.1 > from.1;
                let rook_from = Square(from.0, if kingside { 7 } else { 0 });
                let rook_to = Square(from.0, if kingside { from.1 + 1 } else { from.1 - 1 });
                if let Some(rook) = self.take_piece(rook_from) {
                    self.set_piece(rook_to, rook.moved());
                }
                special = Some(if kingside {
                    SpecialMove::CastleKingside
                } else {
                    SpecialMove::CastleQueenside
                });
            }
            PieceKind::Pawn => {
                if from.0.abs_diff(to.0) == 2 {
                    self.en_passant_target = Some(to);
                    special = Some(SpecialMove::DoublePawnPush);
                } else if captured.is_none() && previous_ep == Some(Square(from.0, to.1)) {
                    // The victim stands beside the capturing pawn, not on
                    // the destination square.
                    captured = self.take_piece(Square(from.0, to.1));
                    special = Some(SpecialMove::EnPassant);
                }

                if to.0 == piece.color.promotion_row() {
                    placed.kind = promotion.kind();
                    special = Some(SpecialMove::Promotion(promotion));
                }
            }
            _ => {}
        }

        self.set_piece(to, placed);

        Some(MoveRecord {
            from,
            to,
            piece,
            captured,
            special,
        })
    }

    /// Validate and play a move given as coordinates.
    pub fn try_play<P>(
        &mut self,
        from: Square,
        to: Square,
        chooser: &mut P,
    ) -> Result<MoveOutcome, MoveError>
    where
        P: PromotionChooser + ?Sized,
    {
        if let Some(winner) = self.winner {
            return Err(MoveError::GameOver { winner });
        }

        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if piece.color != self.current_turn {
            return Err(MoveError::WrongTurn {
                square: from,
                color: piece.color,
            });
        }
        if !self.get_valid_moves(from).contains(to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let promotion = if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
            chooser.choose(piece.color, to)
        } else {
            Promotion::Queen
        };

        let record = self
            .apply_move(from, to, promotion)
            .ok_or(MoveError::EmptySquare { square: from })?;
        self.last_move = Some((from, to));

        if let Some(captured) = record.captured {
            if captured.kind == PieceKind::King {
                self.winner = Some(piece.color);
                debug!("{} {} {from}-{to} captures the king", piece.color, piece.kind);
                return Ok(MoveOutcome::KingCaptured(record));
            }
        }

        self.current_turn = self.current_turn.opponent();
        self.move_count = self.move_count.saturating_add(1);

        match record.special {
            Some(special) => debug!(
                "{} {} {from}-{to} ({special:?}), move {}",
                piece.color, piece.kind, self.move_count
            ),
            None => debug!(
                "{} {} {from}-{to}, move {}",
                piece.color, piece.kind, self.move_count
            ),
        }

        Ok(MoveOutcome::Moved(record))
    }

    /// Validate and play a move given in algebraic notation (e.g. `"e2"`, `"e4"`).
    pub fn try_make_move<P>(
        &mut self,
        from: &str,
        to: &str,
        chooser: &mut P,
    ) -> Result<MoveOutcome, MoveError>
    where
        P: PromotionChooser + ?Sized,
    {
        let from_sq: Square = from.parse()?;
        let to_sq: Square = to.parse()?;
        self.try_play(from_sq, to_sq, chooser)
    }

    /// Play a move, promoting with `chooser`. Returns false, leaving the
    /// board untouched, when the move is rejected for any reason.
    pub fn make_move_with<P>(&mut self, from: &str, to: &str, chooser: &mut P) -> bool
    where
        P: PromotionChooser + ?Sized,
    {
        match self.try_make_move(from, to, chooser) {
            Ok(_) => true,
            Err(err) => {
                trace!("rejected {from}-{to}: {err}");
                false
            }
        }
    }

    /// Play a move in algebraic notation, promoting pawns to queens.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// assert!(board.make_move("e2", "e4"));
    /// assert!(!board.make_move("e4", "e5")); // Black to move
    /// ```
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.make_move_with(from, to, &mut AlwaysQueen)
    }
}
