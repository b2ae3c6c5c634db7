//! Attack testing, check detection, and game-status classification.

use super::types::{Color, GameStatus, Square};
use super::Board;

impl Board {
    /// Is `square` reachable by any pseudo-legal move of the side opposing
    /// `defender`?
    ///
    /// Scans every opposing piece and stops at the first hit. Deliberately
    /// unfiltered: whether an attacking move would expose the attacker's own
    /// king has no bearing on whether it attacks `square`.
    #[must_use]
    pub fn is_attacked(
        &self,
        square: Square,
        defender: Color,
        en_passant_target: Option<Square>,
    ) -> bool {
        let attacker = defender.opposite();
        for (from, color, _) in self.pieces() {
            if color != attacker {
                continue;
            }
            if self
                .pseudo_legal_moves(from, en_passant_target)
                .iter()
                .any(|mv| mv.to == square)
            {
                return true;
            }
        }
        false
    }

    /// Is `color`'s king currently attacked?
    ///
    /// A board with no king of that color reports `false`.
    #[must_use]
    pub fn is_in_check(&self, color: Color, en_passant_target: Option<Square>) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_attacked(king, color, en_passant_target),
            None => false,
        }
    }

    /// Classify the position for `side_to_move`.
    ///
    /// Recomputed exhaustively (full board scan, full move generation) once
    /// per committed move. Check and mobility combine as:
    ///
    /// | in check | has moves | result              |
    /// |----------|-----------|---------------------|
    /// | yes      | yes       | `Check(side)`       |
    /// | yes      | no        | `Checkmate(winner)` |
    /// | no       | yes       | `Active`            |
    /// | no       | no        | `Stalemate`         |
    #[must_use]
    pub fn game_status(&self, side_to_move: Color, en_passant_target: Option<Square>) -> GameStatus {
        let in_check = self.is_in_check(side_to_move, en_passant_target);
        let has_moves = self.pieces().any(|(square, color, _)| {
            color == side_to_move && !self.legal_moves(square, en_passant_target).is_empty()
        });

        match (in_check, has_moves) {
            (true, true) => GameStatus::Check(side_to_move),
            (true, false) => GameStatus::Checkmate(side_to_move.opposite()),
            (false, true) => GameStatus::Active,
            (false, false) => GameStatus::Stalemate,
        }
    }
}
