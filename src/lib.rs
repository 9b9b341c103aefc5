//! Tengen: a rule engine for the game of Go.
//!
//! Given a board, a proposed move and the move history, the engine decides
//! whether the move is legal and produces the resulting board.
//!
//! ## Modules
//!
//! - [`constants`] - Default board size and engine defaults
//! - [`grid`] - Bounds and neighbor helpers
//! - [`board`] - Board snapshots and fingerprints
//! - [`group`] - Group and liberty resolution
//! - [`rules`] - Move legality, capture and ko
//! - [`game`] - Turn order, passes, resignation and prisoners
//! - [`scoring`] - Pluggable final scoring
//! - [`suggest`] - Automated move suggestions with timeout and validation
//! - [`gtp`] - Go Text Protocol front-end
//!
//! ## Example
//!
//! ```
//! use tengen::board::{Board, Color};
//! use tengen::rules::attempt_move;
//!
//! let board = Board::new(19);
//! let history = vec![board.fingerprint()];
//! let outcome = attempt_move(&board, 3, 3, Color::Black, &history).unwrap();
//! assert_eq!(outcome.board.get(3, 3), Some(Color::Black));
//! assert_eq!(outcome.captured, 0);
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod group;
pub mod gtp;
pub mod rules;
pub mod scoring;
pub mod suggest;
