use pathviz_core::{Cell, GridModel};

/// Sentinel g-score for cells not yet discovered.
pub(crate) const UNREACHED: u32 = u32::MAX;

/// Predecessor links of a search tree, keyed by flat cell index.
#[derive(Clone, Debug)]
pub struct ParentLinks {
    grid: GridModel,
    links: Vec<Option<Cell>>,
}

impl ParentLinks {
    /// Empty links for every cell of `grid`.
    pub fn new(grid: GridModel) -> Self {
        Self {
            grid,
            links: vec![None; grid.len()],
        }
    }

    pub fn grid(&self) -> GridModel {
        self.grid
    }

    /// Record `parent` as the predecessor of `child`. Out-of-board cells are
    /// ignored.
    pub fn set(&mut self, child: Cell, parent: Cell) {
        if let Some(i) = self.grid.index(child) {
            self.links[i] = Some(parent);
        }
    }

    /// Predecessor of `child`, if one was recorded.
    pub fn get(&self, child: Cell) -> Option<Cell> {
        self.grid.index(child).and_then(|i| self.links[i])
    }
}

/// Per-call search bookkeeping, dropped when the call returns.
pub(crate) struct SearchState {
    grid: GridModel,
    visited: Vec<bool>,
    g: Vec<u32>,
    /// Cells in the order they were marked visited.
    pub(crate) order: Vec<Cell>,
    pub(crate) parents: ParentLinks,
    /// Heap entries popped for cells that were already finalized.
    pub(crate) stale: usize,
}

impl SearchState {
    pub(crate) fn new(grid: GridModel) -> Self {
        let len = grid.len();
        Self {
            grid,
            visited: vec![false; len],
            g: vec![UNREACHED; len],
            order: Vec::new(),
            parents: ParentLinks::new(grid),
            stale: 0,
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, c: Cell) -> bool {
        self.grid.index(c).is_some_and(|i| self.visited[i])
    }

    /// Mark `c` visited, recording it in `order` the first time.
    pub(crate) fn mark(&mut self, c: Cell) {
        if let Some(i) = self.grid.index(c) {
            if !self.visited[i] {
                self.visited[i] = true;
                self.order.push(c);
            }
        }
    }

    #[inline]
    pub(crate) fn g(&self, c: Cell) -> u32 {
        self.grid.index(c).map_or(UNREACHED, |i| self.g[i])
    }

    #[inline]
    pub(crate) fn set_g(&mut self, c: Cell, cost: u32) {
        if let Some(i) = self.grid.index(c) {
            self.g[i] = cost;
        }
    }
}
