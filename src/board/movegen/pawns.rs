use super::super::{Board, Color, Piece, PieceKind, Square, SquareSet};

impl Board {
    pub(crate) fn generate_pawn_moves(&self, from: Square, pawn: Piece) -> SquareSet {
        let color = pawn.color;
        let dir = color.pawn_direction();
        let mut moves = SquareSet::EMPTY;

        if let Some(forward_sq) = from.offset(dir, 0) {
            if self.is_empty(forward_sq) {
                moves.insert(forward_sq);
                if !pawn.has_moved {
                    if let Some(double_sq) = from.offset(2 * dir, 0) {
                        if self.is_empty(double_sq) {
                            moves.insert(double_sq);
                        }
                    }
                }
            }
        }

        for target_sq in self.pawn_attacks(from, color) {
            if let Some(target) = self.piece_at(target_sq) {
                if target.color != color {
                    moves.insert(target_sq);
                }
            }
        }

        if let Some(ep_sq) = self.en_passant_capture_for(from, color) {
            moves.insert(ep_sq);
        }

        moves
    }

    /// Diagonal squares a pawn of `color` on `from` attacks.
    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> SquareSet {
        let dir = color.pawn_direction();
        [-1, 1]
            .into_iter()
            .filter_map(|dc| from.offset(dir, dc))
            .collect()
    }

    /// Landing square of an en passant capture by the pawn on `from`, if the
    /// pawn that just advanced two squares stands beside it.
    pub(crate) fn en_passant_capture_for(&self, from: Square, color: Color) -> Option<Square> {
        let victim_sq = self.en_passant_target?;
        if victim_sq.0 != from.0 || victim_sq.1.abs_diff(from.1) != 1 {
            return None;
        }
        let victim = self.piece_at(victim_sq)?;
        if !victim.is(PieceKind::Pawn, color.opponent()) {
            return None;
        }
        let landing = victim_sq.offset(color.pawn_direction(), 0)?;
        self.is_empty(landing).then_some(landing)
    }
}
