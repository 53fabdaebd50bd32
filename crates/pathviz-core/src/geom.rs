//! Geometry primitives: [`Cell`] coordinates and the four movement
//! directions.
//!
//! Rows grow downwards and columns grow to the right, matching the order in
//! which a square board is laid out on screen.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A `(row, col)` coordinate on the board.
///
/// Coordinates are signed so that neighbor arithmetic may step outside the
/// board; bounds are checked by [`GridModel`](crate::GridModel).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in direction `d`.
    #[inline]
    pub const fn step(self, d: Dir) -> Self {
        let (dr, dc) = d.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The four cardinal neighbours in [`Dir::ALL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Cell; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    /// Whether both coordinates are odd.
    #[inline]
    pub const fn is_odd(self) -> bool {
        self.row % 2 != 0 && self.col % 2 != 0
    }
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Cell {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.row * rhs, self.col * rhs)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four axis-aligned moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Expansion order used by every search: up, right, down, left.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    /// `(d_row, d_col)` offset of one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// The offset as a [`Cell`], handy for scaling with `*`.
    #[inline]
    pub const fn offset(self) -> Cell {
        let (dr, dc) = self.delta();
        Cell::new(dr, dc)
    }
}
