use pathviz_core::{Cancelled, Cell, Session, manhattan};

use crate::engine::SearchEngine;
use crate::frontier::StableHeap;
use crate::state::SearchState;

impl SearchEngine<'_> {
    /// A* with the Manhattan heuristic.
    ///
    /// Manhattan distance is consistent on a 4-connected unit grid, so the
    /// first pop of a cell already carries its optimal g and lazy
    /// finalization is safe.
    pub(crate) fn astar(
        &self,
        st: &mut SearchState,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<bool, Cancelled> {
        let mut open = StableHeap::new();
        st.set_g(start, 0);
        open.push(start, manhattan(start, end));

        while let Some((cur, _)) = open.pop() {
            session.poll()?;
            if st.is_visited(cur) {
                st.stale += 1;
                continue;
            }
            st.mark(cur);
            self.show(cur, start, end, session)?;
            if cur == end {
                return Ok(true);
            }

            let g = st.g(cur);
            for n in cur.neighbors_4() {
                session.poll()?;
                if !self.passable(n) || st.is_visited(n) {
                    continue;
                }
                let tentative = g + 1;
                if tentative < st.g(n) {
                    st.set_g(n, tentative);
                    st.parents.set(n, cur);
                    open.push(n, tentative + manhattan(n, end));
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::state::SearchState;
    use crate::{Algorithm, SearchEngine};
    use pathviz_core::{Cell, GridModel, Never, ObstacleSet, Pacing, RecordingSink, Session};
    use std::collections::HashSet;

    /// ```text
    /// ...#.#
    /// .#...#
    /// ...#S.
    /// ...#..
    /// .#....
    /// .E#...
    /// ```
    fn detour_board() -> ObstacleSet {
        [(0, 3), (0, 5), (1, 1), (1, 5), (2, 3), (3, 3), (4, 1), (5, 2)]
            .into_iter()
            .map(Cell::from)
            .collect()
    }

    #[test]
    fn heuristic_keeps_open_grid_search_narrow() {
        let grid = GridModel::new(9).unwrap();
        let walls = ObstacleSet::new();
        let engine = SearchEngine::new(grid, &walls);
        let mut visited = Vec::new();
        for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
            let mut sink = RecordingSink::new();
            let mut session = Session::new(&mut sink, &Never, &0i32).with_pacing(Pacing::INSTANT);
            let out = engine
                .run(algorithm, Cell::new(4, 0), Cell::new(4, 8), &mut session)
                .unwrap();
            assert_eq!(out.hops(), 8);
            visited.push(out.visited.len());
        }
        // Goal straight ahead: A* walks the row, Dijkstra floods a diamond.
        assert_eq!(visited[1], 9);
        assert!(visited[0] > visited[1]);
    }

    #[test]
    fn cheaper_rediscovery_leaves_stale_entries_that_are_skipped() {
        let grid = GridModel::new(6).unwrap();
        let walls = detour_board();
        let engine = SearchEngine::new(grid, &walls);
        let (start, end) = (Cell::new(2, 4), Cell::new(5, 1));

        let mut st = SearchState::new(grid);
        let mut sink = RecordingSink::new();
        let mut session = Session::new(&mut sink, &Never, &0i32).with_pacing(Pacing::INSTANT);
        assert_eq!(engine.astar(&mut st, start, end, &mut session), Ok(true));
        drop(session);
        // (2,1) and (2,2) are queued again at a lower cost before their
        // first entries pop.
        assert_eq!(st.stale, 2);
        let distinct: HashSet<Cell> = sink.visited().into_iter().collect();
        assert_eq!(distinct.len(), sink.visited().len());

        for algorithm in [Algorithm::Dijkstra, Algorithm::Astar] {
            let mut sink = RecordingSink::new();
            let mut session = Session::new(&mut sink, &Never, &0i32).with_pacing(Pacing::INSTANT);
            let out = engine.run(algorithm, start, end, &mut session).unwrap();
            assert_eq!(out.hops(), 10, "{algorithm}");
            let distinct: HashSet<Cell> = out.visited.iter().copied().collect();
            assert_eq!(distinct.len(), out.visited.len(), "{algorithm}");
        }
    }
}
