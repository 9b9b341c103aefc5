//! Automated move suggestions.
//!
//! A [`MoveSuggester`] is an opaque, fallible source of moves: a random
//! player, a remote model, anything. Its answers are never trusted:
//! [`request_move`] runs it on a worker thread against a board snapshot,
//! bounds the wait, and re-validates the answer through the rule engine.
//! Every failure turns into a pass.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, TryLockError};
use std::thread;
use std::time::Duration;

use anyhow::anyhow;

use crate::board::{Board, Color};
use crate::error::MoveError;
use crate::game::{Game, Move};
use crate::rules::attempt_move_with;

pub trait MoveSuggester {
    /// Propose a move for `player`. The result may be illegal or off the board.
    fn suggest_move(
        &mut self,
        board: &Board,
        player: Color,
        last_move: Option<Move>,
    ) -> anyhow::Result<Move>;
}

pub type SharedSuggester = Arc<Mutex<dyn MoveSuggester + Send>>;

/// Why a suggestion was replaced by a pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fallback {
    #[error("suggester failed: {0}")]
    Failed(String),

    #[error("suggester timed out after {0:?}")]
    TimedOut(Duration),

    #[error("suggester stopped without answering")]
    Disconnected,

    #[error("previous suggestion still running")]
    Busy,

    #[error("suggested move rejected: {0}")]
    Rejected(MoveError),
}

/// The move to play and, if it is a substitute pass, the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggested {
    pub mv: Move,
    pub fallback: Option<Fallback>,
}

impl Suggested {
    fn accepted(mv: Move) -> Self {
        Self { mv, fallback: None }
    }

    fn pass(reason: Fallback) -> Self {
        Self {
            mv: Move::Pass,
            fallback: Some(reason),
        }
    }
}

/// Ask `suggester` for a move for the side to move in `game`, waiting at
/// most `timeout`. A late answer is discarded.
///
/// A suggester still working on an earlier, timed-out request is not called
/// again until it returns; no thread ever waits on it.
pub fn request_move(suggester: &SharedSuggester, game: &Game, timeout: Duration) -> Suggested {
    if matches!(suggester.try_lock(), Err(TryLockError::WouldBlock)) {
        return Suggested::pass(Fallback::Busy);
    }

    let board = game.board().clone();
    let player = game.to_move();
    let last_move = game.last_move();

    let (tx, rx) = mpsc::channel();
    let worker = Arc::clone(suggester);
    thread::spawn(move || {
        let result = match worker.try_lock() {
            Ok(mut s) => s.suggest_move(&board, player, last_move),
            Err(TryLockError::WouldBlock) => Err(anyhow!("suggester busy")),
            Err(TryLockError::Poisoned(_)) => Err(anyhow!("suggester state poisoned")),
        };
        // The receiver is gone if we already timed out.
        let _ = tx.send(result);
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(mv)) => validate(game, mv),
        Ok(Err(e)) => Suggested::pass(Fallback::Failed(format!("{e:#}"))),
        Err(RecvTimeoutError::Timeout) => Suggested::pass(Fallback::TimedOut(timeout)),
        Err(RecvTimeoutError::Disconnected) => Suggested::pass(Fallback::Disconnected),
    }
}

/// Check a suggested move against the current game. Pass and resign go
/// through unchanged; a placement must be legal.
pub fn validate(game: &Game, mv: Move) -> Suggested {
    let Move::Play { x, y } = mv else {
        return Suggested::accepted(mv);
    };
    match attempt_move_with(
        game.ko_rule(),
        game.board(),
        x,
        y,
        game.to_move(),
        game.history(),
    ) {
        Ok(_) => Suggested::accepted(mv),
        Err(e) => Suggested::pass(Fallback::Rejected(e)),
    }
}

/// Plays a uniformly random empty point, never filling a point whose
/// neighbors are all its own stones. Passes when nothing else is left.
pub struct RandomSuggester {
    rng: fastrand::Rng,
}

impl RandomSuggester {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MoveSuggester for RandomSuggester {
    fn suggest_move(
        &mut self,
        board: &Board,
        player: Color,
        _last_move: Option<Move>,
    ) -> anyhow::Result<Move> {
        let candidates: Vec<_> = board
            .empty_points()
            .filter(|&(x, y)| !is_own_eye(board, x, y, player))
            .collect();
        if candidates.is_empty() {
            return Ok(Move::Pass);
        }
        let (x, y) = candidates[self.rng.usize(..candidates.len())];
        Ok(Move::Play {
            x: x as i32,
            y: y as i32,
        })
    }
}

fn is_own_eye(board: &Board, x: usize, y: usize, player: Color) -> bool {
    board
        .neighbors(x, y)
        .all(|(nx, ny)| board.get(nx, ny) == Some(player))
}
