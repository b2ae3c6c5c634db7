//! Two-player chess rules engine with a minimax computer opponent.
//!
//! The crate is the pure core of a chess game: legal move generation with
//! self-check filtering, check/checkmate/stalemate classification, move
//! application, and a depth-limited minimax search with alpha-beta pruning
//! over a material evaluation. Rendering and input handling belong to the
//! caller; every function here takes a position snapshot and returns new
//! data.
//!
//! Known limitation, kept deliberately: the rule set has no castling and no
//! pawn promotion; a pawn reaching the last rank remains a pawn.
//!
//! # Example
//! ```
//! use chess_core::{choose_move, Board, Color, Difficulty, GameStatus};
//!
//! let board = Board::new();
//! let mv = choose_move(&board, Color::White, None, Difficulty::Medium).unwrap();
//! let outcome = board.apply_move(mv);
//! let status = outcome.board.game_status(Color::Black, outcome.en_passant_target);
//! assert_eq!(status, GameStatus::Active);
//! ```

pub mod board;
pub mod search;
pub mod worker;

pub use board::{
    Board, BoardBuilder, Color, GameStatus, IllegalMoveError, Move, MoveOutcome, Piece, Square,
};
pub use search::{
    choose_move, choose_move_with_rng, evaluate_material, find_best_move, piece_value, Difficulty,
    SCORE_INFINITY,
};
pub use worker::{SearchRequest, SearchTask};
