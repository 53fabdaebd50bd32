//! A caller-side [`Board`]: grid, walls and endpoints kept together.
//!
//! Searches and maze generation take the pieces separately; the board is a
//! convenience for front ends that edit one state between runs.

use crate::config::{BoardConfig, check_size};
use crate::error::{Endpoint, GridError};
use crate::geom::Cell;
use crate::grid::GridModel;
use crate::obstacles::ObstacleSet;

/// Editable board state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: GridModel,
    walls: ObstacleSet,
    start: Cell,
    end: Cell,
}

impl Board {
    /// An empty board with endpoints in opposite corners.
    pub fn new(grid: GridModel) -> Self {
        let (start, end) = grid.corners();
        Self {
            grid,
            walls: ObstacleSet::new(),
            start,
            end,
        }
    }

    /// An empty board sized by `config`.
    pub fn from_config(config: &BoardConfig) -> Result<Self, GridError> {
        Ok(Self::new(config.grid()?))
    }

    pub fn grid(&self) -> GridModel {
        self.grid
    }

    pub fn walls(&self) -> &ObstacleSet {
        &self.walls
    }

    pub fn walls_mut(&mut self) -> &mut ObstacleSet {
        &mut self.walls
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    /// Whether `cell` is one of the two endpoints.
    pub fn is_endpoint(&self, cell: Cell) -> bool {
        cell == self.start || cell == self.end
    }

    /// Change the side length. Walls are dropped and the endpoints return to
    /// the corners.
    pub fn resize(&mut self, num_cells: i32) -> Result<(), GridError> {
        check_size(num_cells)?;
        *self = Self::new(GridModel::new(num_cells)?);
        Ok(())
    }

    /// Move the start, clearing any wall under it.
    pub fn set_start(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_move(Endpoint::Start, cell, self.end)?;
        self.walls.remove(cell);
        self.start = cell;
        Ok(())
    }

    /// Move the end, clearing any wall under it.
    pub fn set_end(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_move(Endpoint::End, cell, self.start)?;
        self.walls.remove(cell);
        self.end = cell;
        Ok(())
    }

    fn check_move(&self, endpoint: Endpoint, cell: Cell, other: Cell) -> Result<(), GridError> {
        if !self.grid.contains(cell) {
            return Err(GridError::OutOfBounds { endpoint, cell });
        }
        if cell == other {
            return Err(GridError::Occupied { endpoint, cell });
        }
        Ok(())
    }

    /// Flip a wall. Endpoints and out-of-board cells are left alone.
    ///
    /// Returns whether `cell` is a wall afterwards.
    pub fn toggle_wall(&mut self, cell: Cell) -> bool {
        if self.is_endpoint(cell) || !self.grid.contains(cell) {
            return false;
        }
        self.walls.toggle(cell)
    }

    /// Wall off every cell, the starting point for maze carving.
    pub fn fill_walls(&mut self) {
        self.walls.fill(self.grid);
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Check that both endpoints are on the board and not walls.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_endpoints(self.grid, &self.walls, self.start, self.end)
    }
}

/// Check the search preconditions: both endpoints in bounds and open.
pub fn validate_endpoints(
    grid: GridModel,
    walls: &ObstacleSet,
    start: Cell,
    end: Cell,
) -> Result<(), GridError> {
    for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
        if !grid.contains(cell) {
            return Err(GridError::OutOfBounds { endpoint, cell });
        }
        if walls.contains(cell) {
            return Err(GridError::Blocked { endpoint, cell });
        }
    }
    Ok(())
}
