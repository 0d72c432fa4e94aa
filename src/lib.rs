pub mod board;
pub mod cli;

pub use board::{Board, Color, GameStatus, MoveError, Piece, PieceKind, Promotion, Square};
