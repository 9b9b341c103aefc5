//! Error types for move legality, game flow and configuration.

/// Why a move was rejected. All variants are recoverable; the position the
/// move was attempted on is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: point is off the board")]
    OutOfBounds,

    #[error("illegal move: point not empty")]
    Occupied,

    #[error("illegal move: suicide")]
    Suicide,

    #[error("illegal move: retakes ko")]
    KoViolation,
}

/// Errors from driving a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("game is over")]
    GameOver,
}

/// Errors from parsing a text coordinate such as `D4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("invalid coordinate: {0}")]
    Malformed(String),

    #[error("coordinate {0} is off a {1}x{1} board")]
    OffBoard(String, usize),
}

/// Errors from reading a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error("diagram has no rows")]
    Empty,

    #[error("row {row} has {len} points, expected {expected}")]
    Ragged { row: usize, len: usize, expected: usize },

    #[error("diagram size {0} is not supported")]
    Size(usize),

    #[error("unexpected character {0:?} in diagram")]
    BadChar(char),
}

/// Errors from building an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unacceptable size {size}, expected {min}..={max}")]
    BoardSize { size: usize, min: usize, max: usize },

    #[error("invalid komi {0}")]
    Komi(f32),

    #[error("suggestion timeout must be > 0")]
    Timeout,
}
