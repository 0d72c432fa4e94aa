use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Color, Square, SquareSet};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> SquareSet {
        let own_occ = self.occupied_by(color);
        SquareSet(KNIGHT_TARGETS[from.as_index()].0 & !own_occ.0)
    }
}
