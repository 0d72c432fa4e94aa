//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation and pins
//! - `special_moves.rs` - Castling, en passant and promotion
//! - `terminal.rs` - Check, checkmate, stalemate and king capture
//! - `make_move.rs` - Move application and rejection
//! - `proptest.rs` - Property-based tests

mod proptest;
mod special_moves;

use crate::board::{Board, Square, SquareSet};

/// Parse a list of algebraic squares into a set.
pub(super) fn squares(names: &[&str]) -> SquareSet {
    names
        .iter()
        .map(|name| name.parse::<Square>().expect("valid square"))
        .collect()
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Play a sequence of moves given as "e2e4"-style strings, panicking on the
/// first rejection.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        assert!(board.make_move(from, to), "move {mv} should be legal");
    }
}
