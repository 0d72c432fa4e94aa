use once_cell::sync::Lazy;

use super::{Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn offset_table(offsets: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for sq in Square::all() {
        table[sq.as_index()] = offsets
            .iter()
            .filter_map(|&(dr, dc)| sq.offset(dr, dc))
            .collect();
    }
    table
}

pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| offset_table(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| offset_table(&KING_OFFSETS));
