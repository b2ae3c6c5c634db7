//! Error types for the checked move-commit path.

use std::fmt;

use super::types::{Color, Move, Square};

/// Rejection reasons from [`Board::apply_move_checked`](super::Board::apply_move_checked).
///
/// The unchecked commit path never produces these; they exist for callers
/// that want the legality contract enforced rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveError {
    /// The origin square holds no piece.
    EmptyOrigin { from: Square },
    /// The origin piece does not belong to the side to move.
    WrongSide { mv: Move, side: Color },
    /// The move is not in the current legal-move set of the origin piece.
    NotLegal { mv: Move },
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveError::EmptyOrigin { from } => {
                write!(f, "no piece on origin square ({}, {})", from.0, from.1)
            }
            IllegalMoveError::WrongSide { mv, side } => {
                write!(
                    f,
                    "piece on ({}, {}) does not belong to {:?}",
                    mv.from.0, mv.from.1, side
                )
            }
            IllegalMoveError::NotLegal { mv } => {
                write!(
                    f,
                    "move ({}, {}) -> ({}, {}) is not legal here",
                    mv.from.0, mv.from.1, mv.to.0, mv.to.1
                )
            }
        }
    }
}

impl std::error::Error for IllegalMoveError {}
