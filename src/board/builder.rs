//! Fluent builder for constructing chess positions.
//!
//! Test suites and callers set up arbitrary positions piece by piece; there
//! is no position notation anywhere in this crate.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_at(Square(6, 0)), Some((Color::White, Piece::Pawn)));
//! ```

use super::types::{Color, Piece, Square};
use super::Board;

/// A fluent builder for [`Board`] positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder pre-loaded with the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (square, color, piece) in Board::new().pieces() {
            builder.pieces.push((square, color, piece));
        }
        builder
    }

    /// Place a piece, replacing any existing piece on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove whatever occupies `square`.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
        }
        board
    }
}
