//! FEN import and export.
//!
//! The board keeps no castling-rights field; rights are expressed through the
//! `has_moved` flags of the king and rooks. Import marks a king or rook as
//! unmoved only when the castling field grants the matching right, and
//! export derives the field back from those flags.

use super::builder::is_home_square;
use super::error::FenError;
use super::{Board, Color, Piece, PieceKind, Square};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Castling field letter for a king/rook pair of `color` on the given side.
fn castling_char(color: Color, kingside: bool) -> char {
    let c = if kingside { 'k' } else { 'q' };
    if color == Color::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

impl Board {
    /// Parse a board position from FEN notation.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, rank 8 first, which is row 0
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                board.set_piece(Square(row, col), Piece::new(kind, color));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        for color in Color::BOTH {
            let kings = board
                .pieces_of(color)
                .filter(|(_, p)| p.kind == PieceKind::King)
                .count();
            if kings > 1 {
                return Err(FenError::TooManyKings { color });
            }
        }

        board.current_turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Castling rights become has_moved flags on kings and rooks
        let mut rights: Vec<(Color, bool)> = Vec::new();
        for c in parts[2].chars() {
            match c {
                'K' => rights.push((Color::White, true)),
                'Q' => rights.push((Color::White, false)),
                'k' => rights.push((Color::Black, true)),
                'q' => rights.push((Color::Black, false)),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        board.apply_castling_rights(&rights);

        // En passant field names the landing square; the board tracks the
        // pawn that advanced, one row further from the side to move.
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let landing: Square = parts[3].parse().map_err(|_| invalid())?;
            let pawn_sq = landing
                .offset(-board.current_turn.pawn_direction(), 0)
                .ok_or_else(invalid)?;
            let victim = board.piece_at(pawn_sq).ok_or_else(invalid)?;
            if !victim.is(PieceKind::Pawn, board.current_turn.opponent())
                || !board.is_empty(landing)
            {
                return Err(invalid());
            }
            Some(pawn_sq)
        };

        // Fullmove number (optional) seeds the ply counter
        if let Some((field, fullmove)) = parts
            .get(5)
            .and_then(|n| n.parse::<u32>().ok().map(|value| (*n, value)))
        {
            let black_to_move = u32::from(board.current_turn == Color::Black);
            board.move_count = fullmove
                .saturating_sub(1)
                .checked_mul(2)
                .and_then(|plies| plies.checked_add(black_to_move))
                .ok_or_else(|| FenError::InvalidFullmove {
                    found: field.to_string(),
                })?;
        }

        Ok(board)
    }

    /// Mark every piece as moved unless it stands where an unmoved piece
    /// would, and keep kings and rooks unmoved only for granted rights.
    fn apply_castling_rights(&mut self, rights: &[(Color, bool)]) {
        for sq in Square::all() {
            let Some(mut piece) = self.piece_at(sq) else {
                continue;
            };
            let back = piece.color.back_row();
            let unmoved = match piece.kind {
                PieceKind::King => {
                    sq == Square(back, 4) && rights.iter().any(|&(c, _)| c == piece.color)
                }
                PieceKind::Rook => {
                    (sq == Square(back, 7) && rights.contains(&(piece.color, true)))
                        || (sq == Square(back, 0) && rights.contains(&(piece.color, false)))
                }
                _ => is_home_square(sq, piece),
            };
            piece.has_moved = !unmoved;
            self.set_piece(sq, piece);
        }
    }

    /// Whether `color` keeps the right to castle on the given side: king and
    /// matching corner rook both unmoved.
    #[must_use]
    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        let back = color.back_row();
        let rook_sq = Square(back, if kingside { 7 } else { 0 });
        let unmoved = |sq: Square, kind: PieceKind| {
            self.piece_at(sq)
                .is_some_and(|p| p.is(kind, color) && !p.has_moved)
        };
        unmoved(Square(back, 4), PieceKind::King) && unmoved(rook_sq, PieceKind::Rook)
    }

    /// Convert the board position to FEN notation.
    ///
    /// The halfmove clock is not tracked and is always written as 0.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut rank = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        rank.push_str(&empty.to_string());
                        empty = 0;
                    }
                    rank.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            rows.push(rank);
        }

        let active = match self.current_turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for color in Color::BOTH {
            for kingside in [true, false] {
                if self.can_castle(color, kingside) {
                    castling.push(castling_char(color, kingside));
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_capture_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.move_count / 2 + 1
        )
    }
}
