//! Move search: difficulty levels, minimax, and alpha-beta pruning.
//!
//! The score convention is global: white-positive material, regardless of
//! which side is searching. The search direction flips with the side to
//! move at every node: white nodes maximize, black nodes minimize.
//!
//! Every ply re-derives legal moves and commits them on cloned boards
//! through the real move applicator. No transposition table, no heuristic
//! move ordering; determinism over raw speed. Moves are explored in
//! generation order and the first move reaching the best score is kept.

mod eval;

pub use eval::{evaluate_material, piece_value};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color, Move, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score bound: beyond any reachable material sum, used for the search
/// window and for positions where a side has no moves.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Strength of the computer opponent.
///
/// Three strategies over the same move enumeration and evaluation:
/// uniform-random, fixed-depth minimax, and deeper minimax with alpha-beta
/// pruning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    /// Uniform-random choice among all legal moves.
    Easy,
    /// Minimax to depth 2, no pruning.
    Medium,
    /// Minimax to depth 4 with alpha-beta pruning.
    Hard,
}

/// Pick a move for `side`, or `None` if it has no legal moves.
///
/// A terminal position is not an error here; the caller distinguishes
/// checkmate from stalemate via
/// [`Board::game_status`](crate::board::Board::game_status) before
/// interpreting the `None`.
#[must_use]
pub fn choose_move(
    board: &Board,
    side: Color,
    en_passant_target: Option<Square>,
    difficulty: Difficulty,
) -> Option<Move> {
    choose_move_with_rng(board, side, en_passant_target, difficulty, &mut rand::thread_rng())
}

/// [`choose_move`] with a caller-supplied RNG.
///
/// Only `Difficulty::Easy` consumes randomness; the other levels are fully
/// deterministic. Seed the RNG to make easy-mode games reproducible.
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    side: Color,
    en_passant_target: Option<Square>,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = board.all_legal_moves(side, en_passant_target);
    if moves.is_empty() {
        return None;
    }

    let chosen = match difficulty {
        Difficulty::Easy => moves.choose(rng).copied(),
        Difficulty::Medium => find_best_move(board, side, en_passant_target, 2, false).0,
        Difficulty::Hard => find_best_move(board, side, en_passant_target, 4, true).0,
    };

    #[cfg(feature = "logging")]
    log::debug!(
        "chose {:?} for {:?} at {:?} from {} legal moves",
        chosen,
        side,
        difficulty,
        moves.len()
    );

    chosen
}

/// Root search: the best move for `side` at `depth` plies, and its score.
///
/// `prune` toggles alpha-beta; pruning changes the set of explored nodes
/// but never the chosen score. Returns `(None, ±SCORE_INFINITY)` when
/// `side` has no legal moves.
#[must_use]
pub fn find_best_move(
    board: &Board,
    side: Color,
    en_passant_target: Option<Square>,
    depth: u32,
    prune: bool,
) -> (Option<Move>, i32) {
    let maximizing = side == Color::White;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;
    let mut alpha = -SCORE_INFINITY;
    let mut beta = SCORE_INFINITY;

    for mv in board.all_legal_moves(side, en_passant_target) {
        let outcome = board.apply_move(mv);
        let score = minimax(
            &outcome.board,
            side.opposite(),
            outcome.en_passant_target,
            depth.saturating_sub(1),
            alpha,
            beta,
            prune,
        );

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if prune {
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    break;
                }
            }
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if prune {
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    (best_move, best_score)
}

fn minimax(
    board: &Board,
    side: Color,
    en_passant_target: Option<Square>,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    prune: bool,
) -> i32 {
    if depth == 0 {
        return evaluate_material(board);
    }

    let moves = board.all_legal_moves(side, en_passant_target);
    let maximizing = side == Color::White;

    // No moves: worst possible outcome for the side that is stuck. Both
    // checkmate and stalemate land here; callers that need the distinction
    // classify the committed position via game_status.
    if moves.is_empty() {
        return if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
    }

    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };

    for mv in moves {
        let outcome = board.apply_move(mv);
        let score = minimax(
            &outcome.board,
            side.opposite(),
            outcome.en_passant_target,
            depth - 1,
            alpha,
            beta,
            prune,
        );

        if maximizing {
            best = best.max(score);
            if prune {
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
        } else {
            best = best.min(score);
            if prune {
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
        }
    }

    best
}
