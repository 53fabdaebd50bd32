use pathviz_core::{Cancelled, Cell, GridError, GridModel, ObstacleSet, Session, validate_endpoints};

use crate::algorithm::Algorithm;
use crate::reconstruct::{Trace, reconstruct, reveal};
use crate::state::SearchState;

/// How a search run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was reached and the path revealed.
    Found,
    /// The frontier emptied without reaching the goal.
    NotFound,
    /// The goal was reached but its parent chain is broken; `path` holds
    /// only the tail that could be walked back.
    Malformed,
    /// The cancellation token tripped.
    Cancelled,
}

/// Result of [`SearchEngine::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// Cells after `start` up to and including the goal. Empty unless found
    /// or malformed, and empty when start equals end.
    pub path: Vec<Cell>,
    /// Cells marked visited, in marking order, start included.
    pub visited: Vec<Cell>,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Number of moves along the path.
    pub fn hops(&self) -> usize {
        self.path.len()
    }
}

/// Runs visualized searches over a board and its walls.
///
/// The engine borrows the walls; all per-run bookkeeping is created inside
/// [`run`](Self::run) and dropped before it returns.
#[derive(Copy, Clone, Debug)]
pub struct SearchEngine<'a> {
    pub(crate) grid: GridModel,
    pub(crate) walls: &'a ObstacleSet,
}

impl<'a> SearchEngine<'a> {
    pub fn new(grid: GridModel, walls: &'a ObstacleSet) -> Self {
        Self { grid, walls }
    }

    /// Whether a search may step onto `c`.
    #[inline]
    pub fn passable(&self, c: Cell) -> bool {
        self.grid.contains(c) && !self.walls.contains(c)
    }

    /// Search from `start` to `end`, reporting progress through `session`.
    ///
    /// Fails only when an endpoint is out of bounds or on a wall; an
    /// unreachable goal or a cancelled run are ordinary outcomes.
    pub fn run(
        &self,
        algorithm: Algorithm,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<SearchOutcome, GridError> {
        validate_endpoints(self.grid, self.walls, start, end)?;
        log::debug!("{algorithm}: searching {start} -> {end}");

        let mut st = SearchState::new(self.grid);
        let found = match algorithm {
            Algorithm::Bfs => self.bfs(&mut st, start, end, session),
            Algorithm::Dfs => self.dfs(&mut st, start, end, session),
            Algorithm::Dijkstra => self.dijkstra(&mut st, start, end, session),
            Algorithm::Astar => self.astar(&mut st, start, end, session),
        };

        let (status, path) = match found {
            Err(Cancelled) => (SearchStatus::Cancelled, Vec::new()),
            Ok(false) => (SearchStatus::NotFound, Vec::new()),
            Ok(true) => conclude(reconstruct(&st.parents, start, end), start, end, session),
        };

        log::debug!(
            "{algorithm}: {status:?} after visiting {} cells ({} stale pops), path of {} hops",
            st.order.len(),
            st.stale,
            path.len()
        );
        Ok(SearchOutcome {
            status,
            path,
            visited: st.order,
        })
    }

    /// Report `c` as visited unless it is an endpoint, which front ends
    /// style on their own.
    pub(crate) fn show(
        &self,
        c: Cell,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<(), Cancelled> {
        if c == start || c == end {
            return Ok(());
        }
        session.visited(c)
    }
}

/// Reveal a reached goal's trace and settle the run's status.
fn conclude(
    trace: Trace,
    start: Cell,
    end: Cell,
    session: &mut Session<'_>,
) -> (SearchStatus, Vec<Cell>) {
    match reveal(&trace.path, start, end, session) {
        Err(Cancelled) => (SearchStatus::Cancelled, Vec::new()),
        Ok(()) if trace.complete => (SearchStatus::Found, trace.path),
        Ok(()) => (SearchStatus::Malformed, trace.path),
    }
}
