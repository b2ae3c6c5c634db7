//! Board state: the 8x8 piece grid.

use super::types::{Color, Piece, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable chess position: each cell holds either nothing or a
/// `(Color, Piece)` pair, so occupancy and ownership are always set and
/// cleared together.
///
/// Boards are plain values. Committing a move produces a new board (see
/// [`Board::apply_move`](crate::board::Board::apply_move)); nothing in this
/// crate mutates a board the caller still holds. The side to move and the
/// en-passant target travel alongside the board, owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// The standard initial position.
    #[must_use]
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            squares[0][file] = Some((Color::Black, *piece));
            squares[1][file] = Some((Color::Black, Piece::Pawn));
            squares[6][file] = Some((Color::White, Piece::Pawn));
            squares[7][file] = Some((Color::White, *piece));
        }
        Board { squares }
    }

    /// A board with no pieces on it.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The occupant of `square`, if any.
    ///
    /// A square outside the board reads as empty rather than indexing out
    /// of bounds; nothing internal produces one, but `Square` fields are
    /// public.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        *self.squares.get(square.0)?.get(square.1)?
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.0][square.1] = Some((color, piece));
    }

    /// Remove and return the occupant of `square`.
    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.0][square.1].take()
    }

    /// Every occupied square with its occupant, in row-major scan order.
    ///
    /// Scan order is part of the crate's determinism contract: move
    /// enumeration and attack testing both walk the board this way.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|(color, piece)| (Square(row, col), color, piece))
            })
        })
    }

    /// Locate `color`'s king by scanning the grid.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, piece)| c == color && piece == Piece::King)
            .map(|(square, _, _)| square)
    }

    /// Clone with the piece on `from` relocated to `to` and `from` cleared.
    ///
    /// Relocation only: an en-passant victim is not removed. This is the
    /// trial board the self-check filter tests king safety on.
    pub(crate) fn with_piece_relocated(&self, from: Square, to: Square) -> Board {
        let mut board = self.clone();
        let moving = board.take_piece(from);
        board.squares[to.0][to.1] = moving;
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
