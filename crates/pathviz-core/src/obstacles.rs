//! The [`ObstacleSet`]: walls on the board.

use std::collections::HashSet;

use crate::geom::Cell;
use crate::grid::GridModel;

/// Mutable set of wall cells.
///
/// Read by searches, written by the maze generator and by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleSet {
    walls: HashSet<Cell>,
}

impl ObstacleSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `cell` is a wall.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Add a wall. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.walls.insert(cell)
    }

    /// Remove a wall. Returns `true` if it was present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    /// Flip `cell`. Returns `true` if it is a wall afterwards.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.walls.remove(&cell) {
            false
        } else {
            self.walls.insert(cell);
            true
        }
    }

    /// Turn every cell of `grid` into a wall, the starting state for maze
    /// carving.
    pub fn fill(&mut self, grid: GridModel) {
        self.walls.clear();
        self.walls.extend(grid.cells());
    }

    /// Remove every wall.
    pub fn clear(&mut self) {
        self.walls.clear();
    }

    /// Number of walls.
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether there are no walls.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Iterate over the walls in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.walls.iter().copied()
    }
}

impl FromIterator<Cell> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            walls: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for ObstacleSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.walls.extend(iter);
    }
}
