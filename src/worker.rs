//! Background search execution.
//!
//! Deep searches run off the interactive thread so legality queries stay
//! responsive. The contract is snapshot-in, one-shot-reply-out: the caller
//! hands over an owned [`SearchRequest`] and polls (or blocks) for the
//! chosen move. No state is shared with the running search and there is no
//! cancellation; searches are bounded by fixed small depths on a fixed
//! small board.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::board::{Board, Color, Move, Square};
use crate::search::{choose_move, Difficulty};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An owned snapshot of everything the search needs.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchRequest {
    pub board: Board,
    pub side: Color,
    pub en_passant_target: Option<Square>,
    pub difficulty: Difficulty,
}

/// A running background search.
///
/// The reply is `Option<Move>`: `None` means the snapshot was terminal (no
/// legal moves), mirroring [`choose_move`].
pub struct SearchTask {
    receiver: Receiver<Option<Move>>,
    handle: Option<JoinHandle<()>>,
}

impl SearchTask {
    /// Start a search on a new thread.
    #[must_use]
    pub fn spawn(request: SearchRequest) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || {
            #[cfg(feature = "logging")]
            log::debug!(
                "search task started: {:?} to move at {:?}",
                request.side,
                request.difficulty
            );

            let chosen = choose_move(
                &request.board,
                request.side,
                request.en_passant_target,
                request.difficulty,
            );
            // The receiver may already be gone; a dropped task is simply an
            // abandoned search.
            let _ = sender.send(chosen);
        });

        SearchTask {
            receiver,
            handle: Some(handle),
        }
    }

    /// Poll for the reply without blocking.
    ///
    /// `None` while the search is still running; `Some(reply)` once it has
    /// finished, where the inner `Option<Move>` is `None` for a terminal
    /// snapshot.
    pub fn try_result(&self) -> Option<Option<Move>> {
        match self.receiver.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(None),
        }
    }

    /// Block until the search finishes and return its reply.
    pub fn join(mut self) -> Option<Move> {
        let reply = self.receiver.recv().unwrap_or(None);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        reply
    }
}
