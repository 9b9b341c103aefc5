//! Board representation.
//!
//! A [`Board`] is a value: cloning it yields an independent snapshot, and the
//! rule engine never mutates a board it was handed.

use std::fmt;
use std::str::FromStr;

use crate::constants::{EMPTY, MAX_SIZE, MIN_SIZE, N, STONE_BLACK, STONE_WHITE};
use crate::error::DiagramError;
use crate::grid::{neighbors, Point};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    fn to_char(self) -> char {
        match self {
            Color::Black => STONE_BLACK,
            Color::White => STONE_WHITE,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Canonical serialization of board contents: one character per point,
/// row-major. Depends on stones only, never on captures or move number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A square grid of points, stored flat with index `y * size + x`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(N)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    /// If `size` is outside `MIN_SIZE..=MAX_SIZE`. Callers validate sizes
    /// through [`EngineConfig`](crate::config::EngineConfig).
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "board size {size} outside {MIN_SIZE}..={MAX_SIZE}"
        );
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Stone at `(x, y)`, or `None` for an empty or off-board point.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Place or clear a stone without any rule checks. Intended for setting
    /// up positions; game play goes through [`attempt_move`](crate::rules::attempt_move).
    pub fn set(&mut self, x: usize, y: usize, stone: Option<Color>) {
        let i = self.idx(x, y);
        self.cells[i] = stone;
    }

    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.get(x, y).is_none()
    }

    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> {
        neighbors(self.size, x, y)
    }

    /// All points holding no stone, in row-major order.
    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| (i % self.size, i / self.size))
    }

    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint(
            self.cells
                .iter()
                .map(|c| c.map_or(EMPTY, Color::to_char))
                .collect(),
        )
    }

    /// Read a board from rows of `.`, `X` (black) and `O` (white).
    /// Whitespace inside a row is ignored; blank lines are skipped.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(DiagramError::Empty);
        }
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(DiagramError::Size(size));
        }
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(DiagramError::Ragged {
                    row: y,
                    len: row.len(),
                    expected: size,
                });
            }
            for (x, &ch) in row.iter().enumerate() {
                let stone = match ch {
                    EMPTY => None,
                    STONE_BLACK => Some(Color::Black),
                    STONE_WHITE => Some(Color::White),
                    other => return Err(DiagramError::BadChar(other)),
                };
                board.set(x, y, stone);
            }
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = self.get(x, y).map_or(EMPTY, Color::to_char);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
