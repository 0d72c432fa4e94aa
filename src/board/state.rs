#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square, SquareSet};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Where the game stands for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a legal reply
    Check,
    Checkmate { winner: Color },
    Stalemate,
    /// A king was taken off the board
    KingCaptured { winner: Color },
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::KingCaptured { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) current_turn: Color,
    pub(crate) last_move: Option<(Square, Square)>,
    /// Square of the pawn that just advanced two squares
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_count: u32,
    pub(crate) winner: Option<Color>,
}

impl Board {
    /// Standard initial position, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, col), Piece::new(kind, Color::Black));
            board.set_piece(Square(1, col), Piece::new(PieceKind::Pawn, Color::Black));
            board.set_piece(Square(6, col), Piece::new(PieceKind::Pawn, Color::White));
            board.set_piece(Square(7, col), Piece::new(kind, Color::White));
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            current_turn: Color::White,
            last_move: None,
            en_passant_target: None,
            move_count: 0,
            winner: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.0][sq.1] = Some(piece);
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    #[must_use]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Square of the pawn that may be captured en passant on this turn.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Square a pawn lands on when capturing en passant on this turn.
    #[must_use]
    pub fn en_passant_capture_square(&self) -> Option<Square> {
        let pawn_sq = self.en_passant_target?;
        pawn_sq.offset(self.current_turn.pawn_direction(), 0)
    }

    /// Number of moves (plies) applied since the start position.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Winner by king capture, if the game ended that way.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Every square with its occupant, a8 through h1, row by row.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |sq| (sq, self.piece_at(sq)))
    }

    /// Occupied squares holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares()
            .filter_map(move |(sq, piece)| piece.filter(|p| p.color == color).map(|p| (sq, p)))
    }

    pub(crate) fn occupied_by(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// True when no piece stands strictly between `from` and `to`.
    ///
    /// Only defined for squares sharing a row, column or diagonal; any other
    /// pair returns false.
    #[must_use]
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        let d_row = to.0 as isize - from.0 as isize;
        let d_col = to.1 as isize - from.1 as isize;
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return false;
        }
        let step = (d_row.signum(), d_col.signum());

        let mut current = from;
        loop {
            current = match current.offset(step.0, step.1) {
                Some(sq) => sq,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
