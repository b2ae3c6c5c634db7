//! Move application: clone-and-mutate commitment of a chosen move.

use super::error::IllegalMoveError;
use super::types::{Color, Move, Piece, Square};
use super::Board;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What committing a move produced.
///
/// The caller alternates the side to move, appends `captured` to its own
/// capture record, and threads `en_passant_target` into the next ply's
/// queries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    /// The position after the move.
    pub board: Board,
    /// The piece removed by the move, if any.
    pub captured: Option<(Color, Piece)>,
    /// En-passant target for the next ply: set only when this move was a
    /// two-rank pawn advance, pointing at the skipped square.
    pub en_passant_target: Option<Square>,
}

impl Board {
    /// Commit `mv`, producing the next position. `self` is not modified.
    ///
    /// No legality checking happens here; callers must pass a move
    /// previously returned by [`Board::legal_moves`] (or the search). Use
    /// [`Board::apply_move_checked`] to have that contract enforced.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> MoveOutcome {
        let mut board = self.clone();

        // An en-passant victim sits beside the origin: the mover's row, the
        // destination's file. Otherwise the destination occupant (if any) is
        // the capture.
        let captured = if mv.is_en_passant {
            board.take_piece(Square(mv.from.0, mv.to.1))
        } else {
            board.piece_at(mv.to)
        };

        let moving = board.take_piece(mv.from);
        board.squares[mv.to.0][mv.to.1] = moving;

        let en_passant_target = match moving {
            Some((_, Piece::Pawn)) if mv.from.0.abs_diff(mv.to.0) == 2 => {
                Some(Square((mv.from.0 + mv.to.0) / 2, mv.from.1))
            }
            _ => None,
        };

        MoveOutcome {
            board,
            captured,
            en_passant_target,
        }
    }

    /// Commit `mv` after verifying it is a legal move of `side` in the
    /// current position.
    pub fn apply_move_checked(
        &self,
        mv: Move,
        side: Color,
        en_passant_target: Option<Square>,
    ) -> Result<MoveOutcome, IllegalMoveError> {
        match self.piece_at(mv.from) {
            None => Err(IllegalMoveError::EmptyOrigin { from: mv.from }),
            Some((color, _)) if color != side => Err(IllegalMoveError::WrongSide { mv, side }),
            Some(_) => {
                if self.legal_moves(mv.from, en_passant_target).contains(&mv) {
                    Ok(self.apply_move(mv))
                } else {
                    Err(IllegalMoveError::NotLegal { mv })
                }
            }
        }
    }
}
