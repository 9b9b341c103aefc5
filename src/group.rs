//! Group and liberty resolution.

use crate::board::Board;
use crate::grid::Point;

/// A maximal 4-connected set of same-colored stones and its liberty count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Member points, in traversal order.
    pub stones: Vec<Point>,
    /// Number of distinct empty points adjacent to any member.
    pub liberties: usize,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Collect the group containing `(x, y)` and count its liberties.
///
/// Uses an explicit stack with a `visited` bitset over the board, so each
/// point is expanded at most once. An empty or off-board seed yields an empty
/// group with zero liberties.
pub fn resolve_group(board: &Board, x: usize, y: usize) -> Group {
    let Some(color) = board.get(x, y) else {
        return Group {
            stones: Vec::new(),
            liberties: 0,
        };
    };

    let area = board.size() * board.size();
    let mut visited = vec![false; area];
    let mut liberty_seen = vec![false; area];
    let mut stack = vec![(x, y)];
    let mut stones = Vec::new();
    let mut liberties = 0;
    visited[board.idx(x, y)] = true;

    while let Some((cx, cy)) = stack.pop() {
        stones.push((cx, cy));
        for (nx, ny) in board.neighbors(cx, cy) {
            let ni = board.idx(nx, ny);
            match board.get(nx, ny) {
                None => {
                    if !liberty_seen[ni] {
                        liberty_seen[ni] = true;
                        liberties += 1;
                    }
                }
                Some(c) if c == color && !visited[ni] => {
                    visited[ni] = true;
                    stack.push((nx, ny));
                }
                _ => {}
            }
        }
    }

    Group { stones, liberties }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn lone_stone(x: usize, y: usize) -> Board {
        let mut board = Board::new(19);
        board.set(x, y, Some(Color::Black));
        board
    }

    #[test]
    fn test_lone_stone_liberties() {
        assert_eq!(resolve_group(&lone_stone(9, 9), 9, 9).liberties, 4);
        assert_eq!(resolve_group(&lone_stone(0, 9), 0, 9).liberties, 3);
        assert_eq!(resolve_group(&lone_stone(18, 18), 18, 18).liberties, 2);
    }

    #[test]
    fn test_empty_seed() {
        let board = Board::new(9);
        let group = resolve_group(&board, 4, 4);
        assert!(group.is_empty());
        assert_eq!(group.liberties, 0);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // Two stones in an L share the liberty at (1, 1).
        let board = Board::from_diagram(
            "
            . X . .
            . . X .
            . . . .
            . . . .
            ",
        )
        .unwrap();
        // Not connected: each is its own group.
        assert_eq!(resolve_group(&board, 1, 0).len(), 1);

        let board = Board::from_diagram(
            "
            X X . .
            X . . .
            . . . .
            . . . .
            ",
        )
        .unwrap();
        let group = resolve_group(&board, 0, 0);
        assert_eq!(group.len(), 3);
        // (2,0), (1,1), (0,2); (1,1) touches two members.
        assert_eq!(group.liberties, 3);
    }

    #[test]
    fn test_group_stops_at_other_color() {
        let board = Board::from_diagram(
            "
            X O . .
            X O . .
            X . . .
            . . . .
            ",
        )
        .unwrap();
        let black = resolve_group(&board, 0, 2);
        assert_eq!(black.len(), 3);
        assert_eq!(black.liberties, 2);

        let white = resolve_group(&board, 1, 0);
        let mut stones = white.stones.clone();
        stones.sort();
        assert_eq!(stones, vec![(1, 0), (1, 1)]);
        assert_eq!(white.liberties, 3);
    }

    #[test]
    fn test_large_group_no_recursion_limit() {
        let mut board = Board::new(25);
        for y in 0..25 {
            for x in 0..25 {
                if (x, y) != (24, 24) {
                    board.set(x, y, Some(Color::White));
                }
            }
        }
        let group = resolve_group(&board, 0, 0);
        assert_eq!(group.len(), 624);
        assert_eq!(group.liberties, 1);
    }
}
