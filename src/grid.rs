//! Geometry helpers for a square grid. No game rules live here.

/// A point on the board as `(x, y)`, with `(0, 0)` in the top-left corner.
pub type Point = (usize, usize);

/// True iff `0 <= x < size` and `0 <= y < size`.
#[inline]
pub fn in_bounds(size: usize, x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < size && (y as usize) < size
}

/// Orthogonal in-bounds neighbors of `(x, y)`.
///
/// Order is fixed: West, East, North, South. Corners yield 2 points,
/// edges 3 and interior points 4.
pub fn neighbors(size: usize, x: usize, y: usize) -> impl Iterator<Item = Point> {
    let mut v = [(0, 0); 4];
    let mut len = 0;
    if x > 0 {
        v[len] = (x - 1, y);
        len += 1;
    }
    if x + 1 < size {
        v[len] = (x + 1, y);
        len += 1;
    }
    if y > 0 {
        v[len] = (x, y - 1);
        len += 1;
    }
    if y + 1 < size {
        v[len] = (x, y + 1);
        len += 1;
    }
    v.into_iter().take(len)
}
