//! Move generation and terminal-state detection.
//!
//! Generation runs in two stages. `generate_geometric_moves` dispatches on
//! the piece kind and returns every destination the movement pattern allows
//! (castling included). `get_valid_moves` then plays each candidate on a
//! board snapshot and keeps only those that leave the mover's king safe.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, GameStatus, PieceKind, Promotion, Square, SquareSet};
use sliders::SliderType;

impl Board {
    /// Destinations the piece on `from` can reach by its movement pattern,
    /// ignoring whether the move would leave its own king in check.
    pub(crate) fn generate_geometric_moves(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };

        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color),
            PieceKind::King => self.generate_king_moves(from, piece),
            PieceKind::Rook => self.generate_slider_moves(from, piece.color, SliderType::Rook),
            PieceKind::Bishop => {
                self.generate_slider_moves(from, piece.color, SliderType::Bishop)
            }
            PieceKind::Queen => self.generate_slider_moves(from, piece.color, SliderType::Queen),
        }
    }

    /// Legal destinations of the piece on `from`, whichever side is on move.
    ///
    /// Returns an empty set for an empty square.
    #[must_use]
    pub fn get_valid_moves(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };

        self.generate_geometric_moves(from)
            .iter()
            .filter(|&to| self.leaves_king_safe(from, to, piece.color))
            .collect()
    }

    fn leaves_king_safe(&self, from: Square, to: Square, color: Color) -> bool {
        let mut snapshot = self.clone();
        snapshot.apply_move(from, to, Promotion::Queen);
        !snapshot.is_in_check(color)
    }

    /// Every piece of `color` that has at least one legal move, with its
    /// destinations.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(Square, SquareSet)> {
        self.pieces_of(color)
            .map(|(from, _)| (from, self.get_valid_moves(from)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    /// Total number of legal (from, to) pairs for `color`.
    ///
    /// A promotion counts once regardless of the piece chosen.
    #[must_use]
    pub fn legal_move_count(&self, color: Color) -> usize {
        self.legal_moves(color)
            .iter()
            .map(|(_, moves)| moves.len())
            .sum()
    }

    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(from, _)| !self.get_valid_moves(from).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Status of the game from the point of view of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner {
            return GameStatus::KingCaptured { winner };
        }

        let color = self.current_turn;
        if self.find_king(color).is_none() {
            return GameStatus::KingCaptured {
                winner: color.opponent(),
            };
        }

        let in_check = self.is_in_check(color);
        match (in_check, self.has_legal_moves(color)) {
            (true, false) => GameStatus::Checkmate {
                winner: color.opponent(),
            },
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::Ongoing,
        }
    }
}
