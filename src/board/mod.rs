//! Board representation and rule legality.
//!
//! An 8×8 grid of optional pieces with per-square move generation, check,
//! checkmate and stalemate detection, and move application covering
//! castling, en passant and promotion. Legality is decided by playing each
//! candidate on a board snapshot, so every query takes `&self`.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! assert_eq!(board.legal_move_count(Color::White), 20);
//! assert_eq!(board.get_valid_moves(Square(6, 4)).len(), 2); // e2
//! ```

mod attack_tables;
mod builder;
mod error;
mod fen;
mod make_move;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use fen::STARTING_FEN;
pub use make_move::{AlwaysQueen, MoveOutcome, MoveRecord, PromotionChooser, SpecialMove};
pub use state::{Board, GameStatus};
pub use types::{
    algebraic_to_index, index_to_algebraic, Color, Piece, PieceKind, Promotion, Square, SquareSet,
    SquareSetIter,
};
