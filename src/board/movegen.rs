//! Move generation: per-piece pseudo-legal rules plus self-check filtering.
//!
//! Two layers. [`Board::pseudo_legal_moves`] applies each piece's movement
//! pattern and board boundaries only. [`Board::legal_moves`] additionally
//! drops every candidate that would leave the mover's own king attacked.
//! Attack testing (see `status.rs`) always uses the pseudo-legal layer;
//! filtering there would recurse through the opponent's king safety, which
//! is both unbounded and irrelevant to whether a square is reachable.

use super::tables::{table_index, KING_TARGETS, KNIGHT_TARGETS};
use super::types::{Color, Move, Piece, Square};
use super::Board;

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Legal moves of the piece on `from`, or empty if the square is empty.
    ///
    /// Every returned move keeps the mover's own king out of check and stays
    /// on the board. `en_passant_target` is the square a pawn may capture
    /// onto this ply, as reported by the previous move's
    /// [`MoveOutcome`](crate::board::MoveOutcome).
    #[must_use]
    pub fn legal_moves(&self, from: Square, en_passant_target: Option<Square>) -> Vec<Move> {
        let Some((color, _)) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut moves = self.pseudo_legal_moves(from, en_passant_target);
        moves.retain(|&mv| self.keeps_king_safe(mv, color, en_passant_target));
        moves
    }

    /// Movement-pattern moves of the piece on `from`, ignoring king safety.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square, en_passant_target: Option<Square>) -> Vec<Move> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, en_passant_target, &mut moves),
            Piece::Knight => self.offset_moves(from, color, &KNIGHT_TARGETS, &mut moves),
            Piece::King => self.offset_moves(from, color, &KING_TARGETS, &mut moves),
            Piece::Rook => self.sliding_moves(from, color, &ROOK_DIRECTIONS, &mut moves),
            Piece::Bishop => self.sliding_moves(from, color, &BISHOP_DIRECTIONS, &mut moves),
            Piece::Queen => self.sliding_moves(from, color, &QUEEN_DIRECTIONS, &mut moves),
        }
        moves
    }

    /// All legal moves of `side`, flattened over the board in row-major
    /// scan order. The order is deterministic; search tie-breaking relies
    /// on it.
    #[must_use]
    pub fn all_legal_moves(&self, side: Color, en_passant_target: Option<Square>) -> Vec<Move> {
        let mut moves = Vec::new();
        for (square, color, _) in self.pieces() {
            if color == side {
                moves.extend(self.legal_moves(square, en_passant_target));
            }
        }
        moves
    }

    fn pawn_moves(
        &self,
        from: Square,
        color: Color,
        en_passant_target: Option<Square>,
        moves: &mut Vec<Move>,
    ) {
        let dir = color.forward();
        let row = from.0 as i32;
        let col = from.1 as i32;

        // Single advance, and the double advance behind it. Both require
        // empty destinations; the double additionally requires the home rank.
        if let Some(one) = Square::on_board(row + dir, col) {
            if self.piece_at(one).is_none() {
                moves.push(Move::new(from, one));

                if from.0 == color.pawn_start_row() {
                    if let Some(two) = Square::on_board(row + 2 * dir, col) {
                        if self.piece_at(two).is_none() {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        // Diagonal captures, en passant included.
        for dc in [-1, 1] {
            let Some(target) = Square::on_board(row + dir, col + dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some((occupant, _)) if occupant != color => {
                    moves.push(Move::new(from, target));
                }
                None if en_passant_target == Some(target) => {
                    moves.push(Move {
                        from,
                        to: target,
                        is_en_passant: true,
                    });
                }
                _ => {}
            }
        }
    }

    fn offset_moves(
        &self,
        from: Square,
        color: Color,
        targets: &[Vec<Square>; 64],
        moves: &mut Vec<Move>,
    ) {
        for &to in &targets[table_index(from)] {
            match self.piece_at(to) {
                Some((occupant, _)) if occupant == color => {}
                _ => moves.push(Move::new(from, to)),
            }
        }
    }

    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i32, i32)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            for step in 1..8 {
                let Some(to) = Square::on_board(from.0 as i32 + dr * step, from.1 as i32 + dc * step)
                else {
                    break;
                };
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some((occupant, _)) => {
                        if occupant != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }

    /// Would `mv` leave `color`'s king un-attacked?
    ///
    /// The trial is a plain relocation on a cloned board; an en-passant
    /// victim stays put for the duration of the test. A board with no king
    /// of the moving color filters nothing.
    fn keeps_king_safe(&self, mv: Move, color: Color, en_passant_target: Option<Square>) -> bool {
        let trial = self.with_piece_relocated(mv.from, mv.to);
        match trial.find_king(color) {
            Some(king) => !trial.is_attacked(king, color, en_passant_target),
            None => true,
        }
    }
}
