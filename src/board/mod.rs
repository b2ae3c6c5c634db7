//! Chess board representation and game logic.
//!
//! The board is an 8x8 grid of optional `(Color, Piece)` cells. Move
//! generation, attack testing, status classification, and move application
//! are all pure: they take the position plus the caller-owned side to move
//! and en-passant target, and return new data.
//!
//! # Example
//! ```
//! use chess_core::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.all_legal_moves(Color::White, None);
//! assert_eq!(moves.len(), 20);
//! ```

mod apply;
mod builder;
mod error;
mod movegen;
mod state;
mod status;
mod tables;
mod types;

#[cfg(test)]
mod tests;

pub use apply::MoveOutcome;
pub use builder::BoardBuilder;
pub use error::IllegalMoveError;
pub use state::Board;
pub use types::{Color, GameStatus, Move, Piece, Square};
