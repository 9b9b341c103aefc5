//! Move legality and capture.
//!
//! [`attempt_move`] is a pure function of its inputs: it works on a private
//! copy of the board and either returns the resulting position or a
//! [`MoveError`]. Turn order, history bookkeeping and prisoner totals belong
//! to the caller (see [`Game`](crate::game::Game)).
//!
//! Checks run in a fixed order:
//! 1. bounds, 2. occupancy, 3. tentative placement, 4. removal of every
//! adjacent opponent group left without liberties, 5. suicide, 6. ko.
//! Captures are resolved before the suicide test, so a move that only gains
//! liberties by capturing is legal.

use crate::board::{Board, Color, Fingerprint};
use crate::error::MoveError;
use crate::grid::in_bounds;
use crate::group::resolve_group;

/// Which board repetitions are forbidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KoRule {
    /// A move may not recreate the board as it stood two plies ago, i.e. an
    /// immediate recapture. Longer cycles are not detected.
    #[default]
    Simple,
    /// A move may not recreate any board recorded in the history.
    PositionalSuperko,
}

/// A legal move's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    /// Opponent stones removed by this move.
    pub captured: usize,
}

/// Try to play `player` at `(x, y)` under the simple ko rule.
///
/// `history` holds one fingerprint per ply, the last entry being the board
/// the move is played on. Neither `board` nor `history` is modified.
pub fn attempt_move(
    board: &Board,
    x: i32,
    y: i32,
    player: Color,
    history: &[Fingerprint],
) -> Result<MoveOutcome, MoveError> {
    attempt_move_with(KoRule::Simple, board, x, y, player, history)
}

/// [`attempt_move`] with a selectable repetition rule.
pub fn attempt_move_with(
    ko_rule: KoRule,
    board: &Board,
    x: i32,
    y: i32,
    player: Color,
    history: &[Fingerprint],
) -> Result<MoveOutcome, MoveError> {
    if !in_bounds(board.size(), x, y) {
        return Err(MoveError::OutOfBounds);
    }
    let (x, y) = (x as usize, y as usize);
    if board.get(x, y).is_some() {
        return Err(MoveError::Occupied);
    }

    let mut work = board.clone();
    work.set(x, y, Some(player));

    let opponent = player.opponent();
    let mut captured = 0;
    for (nx, ny) in board.neighbors(x, y) {
        // A group captured via an earlier neighbor is already gone here.
        if work.get(nx, ny) != Some(opponent) {
            continue;
        }
        let group = resolve_group(&work, nx, ny);
        if group.liberties == 0 {
            captured += group.len();
            for (sx, sy) in group.stones {
                work.set(sx, sy, None);
            }
        }
    }

    if resolve_group(&work, x, y).liberties == 0 {
        return Err(MoveError::Suicide);
    }

    let fingerprint = work.fingerprint();
    if repeats(ko_rule, &fingerprint, history) {
        return Err(MoveError::KoViolation);
    }

    Ok(MoveOutcome {
        board: work,
        captured,
    })
}

fn repeats(ko_rule: KoRule, fingerprint: &Fingerprint, history: &[Fingerprint]) -> bool {
    match ko_rule {
        KoRule::Simple => history
            .len()
            .checked_sub(2)
            .is_some_and(|i| &history[i] == fingerprint),
        KoRule::PositionalSuperko => history.contains(fingerprint),
    }
}
