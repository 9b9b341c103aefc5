//! Board dimensions and engine defaults.
//!
//! The default board size is controlled by Cargo features:
//! - `board19x19` (default): 19x19 board
//! - `board13x13`: 13x13 board
//! - `board9x9`: 9x9 board
//!
//! ```sh
//! cargo build                                               # 19x19 (default)
//! cargo build --no-default-features --features board9x9    # 9x9
//! ```
//!
//! The size is only a default: `Board::new` accepts any size in
//! `MIN_SIZE..=MAX_SIZE` at runtime.

use std::time::Duration;

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN).
#[cfg(feature = "board19x19")]
pub const N: usize = 19;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Enable only one of 'board9x9', 'board13x13' or 'board19x19'");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!("Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'");

/// Smallest board that still has a meaningful liberty structure.
pub const MIN_SIZE: usize = 2;

/// Largest board addressable with GTP letters (A..Z without I).
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Game Defaults
// =============================================================================

/// Komi (compensation points for White).
pub const KOMI: f32 = 7.5;

/// How long an automated suggestion may take before the engine passes instead.
pub const SUGGEST_TIMEOUT: Duration = Duration::from_millis(2000);

// =============================================================================
// Fingerprint Characters
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty point.
pub const EMPTY: char = '.';
