use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Board, Color, Piece, PieceKind, Square, SquareSet};
use super::sliders::SliderType;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, king: Piece) -> SquareSet {
        let own_occ = self.occupied_by(king.color);
        let mut moves = SquareSet(KING_TARGETS[from.as_index()].0 & !own_occ.0);

        if !king.has_moved && !self.is_in_check(king.color) {
            for (rook_col, step) in [(7, 1), (0, -1)] {
                if let Some(dest) = self.castle_destination(from, king.color, rook_col, step) {
                    moves.insert(dest);
                }
            }
        }

        moves
    }

    /// Destination of the king when castling toward the rook on `rook_col`.
    ///
    /// The rook must be an unmoved rook of the king's color, every square
    /// between king and rook empty, and neither the square the king passes
    /// over nor the one it lands on attacked.
    fn castle_destination(
        &self,
        from: Square,
        color: Color,
        rook_col: usize,
        step: isize,
    ) -> Option<Square> {
        let rook_sq = Square(from.0, rook_col);
        let rook = self.piece_at(rook_sq)?;
        if !rook.is(PieceKind::Rook, color) || rook.has_moved {
            return None;
        }
        if !self.is_path_clear(from, rook_sq) {
            return None;
        }

        let transit = from.offset(0, step)?;
        let dest = from.offset(0, 2 * step)?;
        if self.is_square_attacked(transit, color) || self.is_square_attacked(dest, color) {
            return None;
        }
        Some(dest)
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Squares `piece` on `from` attacks: geometric moves without castling,
    /// pawn pushes or en passant, and without filtering own pieces.
    pub(crate) fn attacks_from(&self, from: Square, piece: Piece) -> SquareSet {
        match piece.kind {
            PieceKind::Pawn => self.pawn_attacks(from, piece.color),
            PieceKind::Knight => KNIGHT_TARGETS[from.as_index()],
            PieceKind::King => KING_TARGETS[from.as_index()],
            PieceKind::Rook => self.slider_reach(from, SliderType::Rook, |_| true),
            PieceKind::Bishop => self.slider_reach(from, SliderType::Bishop, |_| true),
            PieceKind::Queen => self.slider_reach(from, SliderType::Queen, |_| true),
        }
    }

    /// True when a piece of the opponent of `color` attacks `square`.
    ///
    /// The square is vacated on a snapshot first so that whatever stands on
    /// it (typically the king being tested) does not block the rays.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, color: Color) -> bool {
        let mut snapshot = self.clone();
        snapshot.take_piece(square);

        let attacked = snapshot
            .pieces_of(color.opponent())
            .any(|(from, piece)| snapshot.attacks_from(from, piece).contains(square));
        attacked
    }

    /// A side without a king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color),
            None => false,
        }
    }
}
