//! Precomputed destination tables for the fixed-offset pieces.
//!
//! Knights and kings move by fixed offset sets; the on-board destinations
//! for each origin square never change, so they are built once and reused by
//! move generation and attack testing.

use once_cell::sync::Lazy;

use super::types::Square;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn build_table(offsets: &[(i32, i32); 8]) -> [Vec<Square>; 64] {
    std::array::from_fn(|index| {
        let row = (index / 8) as i32;
        let col = (index % 8) as i32;
        offsets
            .iter()
            .filter_map(|&(dr, dc)| Square::on_board(row + dr, col + dc))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_table(&KNIGHT_OFFSETS));

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build_table(&KING_OFFSETS));

#[inline]
pub(crate) fn table_index(square: Square) -> usize {
    square.0 * 8 + square.1
}
