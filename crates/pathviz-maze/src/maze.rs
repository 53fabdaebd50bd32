//! Recursive-backtracking maze carving.
//!
//! The board is treated as a lattice of carve nodes at odd coordinates
//! separated by one-cell wall partitions. Starting from a random node the
//! carver walks to unvisited nodes two cells away, knocking out the wall in
//! between, and backtracks when stuck. The open cells form a spanning tree
//! over the lattice: exactly one corridor between any two nodes.

use pathviz_core::{
    Board, Cancelled, Cell, Dir, Endpoint, GridError, GridModel, ObstacleSet, Session,
};
use rand::Rng;
use rand::seq::SliceRandom;

/// How a generation run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenStatus {
    Completed,
    /// Stopped through the cancellation token; walls are left as carved so
    /// far and the endpoint clearing pass did not run.
    Cancelled,
}

/// One level of the backtracking walk.
struct Frame {
    cell: Cell,
    dirs: [Dir; 4],
    next: usize,
}

/// Maze generator driven by `R`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze into `walls`, which the caller has filled with every
    /// cell of `grid` beforehand. Carve targets are limited to the board.
    pub fn carve(
        &mut self,
        grid: GridModel,
        start: Cell,
        end: Cell,
        walls: &mut ObstacleSet,
        session: &mut Session<'_>,
    ) -> Result<GenStatus, GridError> {
        self.generate(grid, start, end, walls, |c| grid.contains(c), session)
    }

    /// Carve a maze into `walls`, entering only nodes accepted by
    /// `is_valid`.
    ///
    /// On completion start, end and their in-bounds neighbours are cleared
    /// so both endpoints can be entered.
    pub fn generate(
        &mut self,
        grid: GridModel,
        start: Cell,
        end: Cell,
        walls: &mut ObstacleSet,
        is_valid: impl Fn(Cell) -> bool,
        session: &mut Session<'_>,
    ) -> Result<GenStatus, GridError> {
        for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::End, end)] {
            if !grid.contains(cell) {
                return Err(GridError::OutOfBounds { endpoint, cell });
            }
        }

        let origin = self.origin(grid);
        log::debug!("maze: carving {n}x{n} from {origin}", n = grid.num_cells());

        // A one-cell board has no room for a carve node.
        if grid.contains(origin) {
            let carved = self.backtrack(grid, origin, start, end, walls, &is_valid, session);
            if carved.is_err() {
                log::debug!("maze: cancelled after {} steps", session.steps());
                return Ok(GenStatus::Cancelled);
            }
        }

        clear_around(grid, start, walls);
        clear_around(grid, end, walls);
        log::debug!("maze: done, {} walls left", walls.len());
        Ok(GenStatus::Completed)
    }

    /// Random carve node, or `(1, 1)` when the board has none.
    fn origin(&mut self, grid: GridModel) -> Cell {
        let odd: Vec<i32> = grid.odd_coords().collect();
        if odd.is_empty() {
            return Cell::new(1, 1);
        }
        let row = odd[self.rng.random_range(0..odd.len())];
        let col = odd[self.rng.random_range(0..odd.len())];
        Cell::new(row, col)
    }

    /// Uniform permutation of the four directions.
    fn shuffled_dirs(&mut self) -> [Dir; 4] {
        let mut dirs = Dir::ALL;
        dirs.shuffle(&mut self.rng);
        dirs
    }

    #[allow(clippy::too_many_arguments)]
    fn backtrack(
        &mut self,
        grid: GridModel,
        origin: Cell,
        start: Cell,
        end: Cell,
        walls: &mut ObstacleSet,
        is_valid: &impl Fn(Cell) -> bool,
        session: &mut Session<'_>,
    ) -> Result<(), Cancelled> {
        let mut carve = Carve {
            grid,
            start,
            end,
            walls,
            visited: vec![false; grid.len()],
            stack: Vec::new(),
        };
        let dirs = self.shuffled_dirs();
        carve.enter(origin, dirs, session)?;

        loop {
            let Some(frame) = carve.stack.last_mut() else {
                break;
            };
            if frame.next == frame.dirs.len() {
                carve.stack.pop();
                continue;
            }
            let (cur, d) = (frame.cell, frame.dirs[frame.next]);
            frame.next += 1;

            session.poll()?;
            let target = cur + d.offset() * 2;
            if !target.is_odd() || !is_valid(target) || !carve.is_unvisited(target) {
                continue;
            }
            carve.open(cur.step(d), session)?;
            let dirs = self.shuffled_dirs();
            carve.enter(target, dirs, session)?;
        }

        Ok(())
    }
}

/// State of one backtracking walk.
struct Carve<'w> {
    grid: GridModel,
    start: Cell,
    end: Cell,
    walls: &'w mut ObstacleSet,
    visited: Vec<bool>,
    stack: Vec<Frame>,
}

impl Carve<'_> {
    fn is_unvisited(&self, c: Cell) -> bool {
        self.grid.index(c).is_some_and(|i| !self.visited[i])
    }

    /// Knock out the wall at `c`. Endpoints are not shown.
    fn open(&mut self, c: Cell, session: &mut Session<'_>) -> Result<(), Cancelled> {
        self.walls.remove(c);
        if c == self.start || c == self.end {
            return Ok(());
        }
        session.opened(c)
    }

    /// Visit a carve node and push its frame.
    fn enter(&mut self, c: Cell, dirs: [Dir; 4], session: &mut Session<'_>) -> Result<(), Cancelled> {
        session.poll()?;
        if let Some(i) = self.grid.index(c) {
            self.visited[i] = true;
        }
        self.open(c, session)?;
        self.stack.push(Frame {
            cell: c,
            dirs,
            next: 0,
        });
        Ok(())
    }
}

/// Open `c` and its in-bounds neighbours.
fn clear_around(grid: GridModel, c: Cell, walls: &mut ObstacleSet) {
    walls.remove(c);
    for n in grid.neighbors(c) {
        walls.remove(n);
    }
}

/// Fill a [`Board`] with walls and carve a maze between its endpoints.
pub trait BoardMaze {
    fn generate_maze<R: Rng>(
        &mut self,
        maze: &mut MazeGen<R>,
        session: &mut Session<'_>,
    ) -> Result<GenStatus, GridError>;
}

impl BoardMaze for Board {
    fn generate_maze<R: Rng>(
        &mut self,
        maze: &mut MazeGen<R>,
        session: &mut Session<'_>,
    ) -> Result<GenStatus, GridError> {
        self.fill_walls();
        let (grid, start, end) = (self.grid(), self.start(), self.end());
        maze.carve(grid, start, end, self.walls_mut(), session)
    }
}
