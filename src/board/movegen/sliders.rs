use super::super::attack_tables::{DIAGONAL, KING_OFFSETS, ORTHOGONAL};
use super::super::{Board, Color, Piece, Square, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &ORTHOGONAL,
            SliderType::Queen => &KING_OFFSETS,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
    ) -> SquareSet {
        self.slider_reach(from, slider, |blocker| blocker.color != color)
    }

    /// Walk each ray one square at a time: empty squares are added and the
    /// walk continues; the first occupied square ends the ray and is added
    /// only when `include_blocker` accepts its piece.
    pub(crate) fn slider_reach(
        &self,
        from: Square,
        slider: SliderType,
        include_blocker: impl Fn(Piece) -> bool,
    ) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in slider.directions() {
            let mut current = from;
            while let Some(next) = current.offset(dr, dc) {
                match self.piece_at(next) {
                    None => moves.insert(next),
                    Some(blocker) => {
                        if include_blocker(blocker) {
                            moves.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
