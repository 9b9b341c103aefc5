//! Final result reporting.
//!
//! Counting territory is not part of this crate. A finished game is scored
//! by a pluggable [`Scorer`]; the bundled [`UndeterminedScorer`] leaves the
//! result open.

use std::fmt;

use crate::board::Color;
use crate::game::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameResult {
    /// `margin` is `None` for a win by resignation.
    Win { winner: Color, margin: Option<f32> },
    Jigo,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, margin } => {
                let side = match winner {
                    Color::Black => 'B',
                    Color::White => 'W',
                };
                match margin {
                    Some(m) => write!(f, "{side}+{m}"),
                    None => write!(f, "{side}+R"),
                }
            }
            GameResult::Jigo => write!(f, "0"),
        }
    }
}

/// Decides the result of a game that ended by two passes.
pub trait Scorer {
    /// `None` means the result cannot be determined.
    fn score(&self, position: &Position, komi: f32) -> Option<GameResult>;
}

/// Never determines a result.
#[derive(Debug, Default, Clone, Copy)]
pub struct UndeterminedScorer;

impl Scorer for UndeterminedScorer {
    fn score(&self, _position: &Position, _komi: f32) -> Option<GameResult> {
        None
    }
}
