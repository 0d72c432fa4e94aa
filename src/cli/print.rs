use std::fmt::Write as _;

use crate::board::{Board, Color, Piece, PieceKind, SquareSet};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

fn unicode_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[must_use]
pub fn glyph(piece: Piece, ascii: bool) -> char {
    if ascii {
        piece.to_fen_char()
    } else {
        unicode_glyph(piece)
    }
}

/// Render the board as text, rank 8 at the top unless `flip` is set.
///
/// ```text
///    a  b  c  d  e  f  g  h
///   -------------------------
/// 8| r  n  b  q  k  b  n  r  |
/// ```
#[must_use]
pub fn render_board(board: &Board, ascii: bool, flip: bool) -> String {
    let cells: Vec<Option<Piece>> = board.squares().map(|(_, piece)| piece).collect();
    let order: Vec<usize> = if flip {
        (0..8).rev().collect()
    } else {
        (0..8).collect()
    };

    let mut out = String::from("  ");
    for &col in &order {
        let _ = write!(out, " {} ", FILES[col]);
    }
    out.push('\n');
    out.push_str("  -------------------------\n");

    for &row in &order {
        let _ = write!(out, "{}| ", 8 - row);
        for &col in &order {
            let c = cells[row * 8 + col].map_or('.', |piece| glyph(piece, ascii));
            let _ = write!(out, "{c}  ");
        }
        out.push_str("|\n");
    }
    out
}

/// Comma separated algebraic names, or `none`.
#[must_use]
pub fn format_squares(set: SquareSet) -> String {
    if set.is_empty() {
        return "none".to_string();
    }
    set.iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
