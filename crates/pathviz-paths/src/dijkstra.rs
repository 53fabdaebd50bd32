use pathviz_core::{Cancelled, Cell, Session};

use crate::engine::SearchEngine;
use crate::frontier::StableHeap;
use crate::state::SearchState;

impl SearchEngine<'_> {
    /// Uniform-cost search with unit edges.
    ///
    /// Cells are finalized when popped; a better tentative cost pushes a new
    /// entry and leaves the old one in the heap to be skipped later.
    pub(crate) fn dijkstra(
        &self,
        st: &mut SearchState,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<bool, Cancelled> {
        let mut open = StableHeap::new();
        st.set_g(start, 0);
        open.push(start, 0);

        while let Some((cur, _)) = open.pop() {
            session.poll()?;
            // Skip stale entries.
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
                    open.push(n, tentative);
                }
            }
        }

        Ok(false)
    }
}
