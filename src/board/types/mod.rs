//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Promotion` - the pieces a pawn may become
//! - `Square` - (row, col) coordinates with algebraic conversion
//! - `SquareSet` - 64-bit set of squares returned by move generation

mod piece;
mod square;
mod square_set;

pub use piece::{Color, Piece, PieceKind, Promotion};
pub use square::{algebraic_to_index, index_to_algebraic, Square};
pub use square_set::{SquareSet, SquareSetIter};
