//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.get_valid_moves(Square(6, 0)).len(), 2);
//! ```

use super::{Board, Color, FenError, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
    move_count: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
            move_count: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new()
            .squares()
            .filter_map(|(sq, piece)| piece.map(|p| (sq, p)))
            .collect();
        builder
    }

    /// Place a piece on the board.
    ///
    /// Whether it counts as moved is decided at `build` time from where it
    /// stands: pawns off their start row, and kings or rooks off their home
    /// squares, are marked as moved.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, color)));
        self
    }

    /// Place a piece that has already moved (loses castling / double-step rights).
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(kind, color).moved()));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Mark the pawn on `pawn_square` as having just advanced two squares.
    #[must_use]
    pub const fn en_passant(mut self, pawn_square: Square) -> Self {
        self.en_passant_target = Some(pawn_square);
        self
    }

    /// Set the number of moves already played.
    #[must_use]
    pub const fn move_count(mut self, count: u32) -> Self {
        self.move_count = count;
        self
    }

    /// Build the board, rejecting a position with two kings of one color.
    ///
    /// # Errors
    /// Returns `FenError::TooManyKings` naming the first color found with
    /// more than one king.
    pub fn try_build(self) -> Result<Board, FenError> {
        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|(_, p)| p.is(PieceKind::King, color))
                .count();
            if kings > 1 {
                return Err(FenError::TooManyKings { color });
            }
        }
        Ok(self.build())
    }

    /// Build the board.
    ///
    /// King counts are not checked. With two kings of one color,
    /// `find_king` reports the first one scanning from a8 to h1; use
    /// `try_build` to reject such positions.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, piece) in self.pieces {
            let piece = if piece.has_moved || is_home_square(square, piece) {
                piece
            } else {
                piece.moved()
            };
            board.set_piece(square, piece);
        }

        board.current_turn = self.side_to_move;
        board.en_passant_target = self.en_passant_target;
        board.move_count = self.move_count;
        board
    }
}

/// Whether an unmoved `piece` could legitimately stand on `square`.
pub(crate) fn is_home_square(square: Square, piece: Piece) -> bool {
    let back = piece.color.back_row();
    match piece.kind {
        PieceKind::Pawn => square.0 == piece.color.pawn_start_row(),
        PieceKind::King => square == Square(back, 4),
        PieceKind::Rook => square == Square(back, 0) || square == Square(back, 7),
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}
