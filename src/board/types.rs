//! Core types: colors, pieces, squares, moves, and game status.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece types
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Colors
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White pawns advance toward row 0.
    #[inline]
    pub(crate) fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Home rank of this side's pawns.
    #[inline]
    pub(crate) fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Board square as (row, column), each in `0..8`.
///
/// Row 0 is black's home rank, row 7 is white's home rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Build a square from signed coordinates, or `None` if off the board.
    ///
    /// Every internally generated destination passes through this gate, so
    /// no out-of-range index reaches the grid.
    #[inline]
    #[must_use]
    pub fn on_board(row: i32, col: i32) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn col(self) -> usize {
        self.1
    }
}

/// A move from one square to another.
///
/// There is no promotion or castling representation: the reproduced rule set
/// has neither, and a pawn reaching the last rank remains a pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Set when a pawn captures diagonally onto the en-passant target square.
    pub is_en_passant: bool,
}

impl Move {
    /// A plain move with no en-passant flag.
    #[inline]
    #[must_use]
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            is_en_passant: false,
        }
    }
}

/// Derived state of the game for the side to move.
///
/// Never stored: always recomputed from a board, the side to move, and the
/// current en-passant target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has legal moves and is not in check.
    Active,
    /// The named side is in check but still has legal moves.
    Check(Color),
    /// The named side has won; the side to move is in check with no escape.
    Checkmate(Color),
    /// The side to move has no legal moves and is not in check.
    Stalemate,
}

impl GameStatus {
    /// True for checkmate and stalemate, the two states that end the game.
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }
}
