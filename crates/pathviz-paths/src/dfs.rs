use pathviz_core::{Cancelled, Cell, Session};

use crate::engine::SearchEngine;
use crate::state::SearchState;

impl SearchEngine<'_> {
    /// Depth-first search on an explicit stack.
    ///
    /// A cell is marked when first popped; its parent is the cell that pushed
    /// that entry. Neighbours are pushed in reverse so the first direction in
    /// expansion order is explored first.
    pub(crate) fn dfs(
        &self,
        st: &mut SearchState,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<bool, Cancelled> {
        let mut stack: Vec<(Cell, Option<Cell>)> = vec![(start, None)];

        while let Some((cur, from)) = stack.pop() {
            session.poll()?;
            if st.is_visited(cur) {
                continue;
            }
            st.mark(cur);
            if let Some(p) = from {
                st.parents.set(cur, p);
            }
            self.show(cur, start, end, session)?;
            if cur == end {
                return Ok(true);
            }

            for n in cur.neighbors_4().into_iter().rev() {
                session.poll()?;
                if self.passable(n) && !st.is_visited(n) {
                    stack.push((n, Some(cur)));
                }
            }
        }

        Ok(false)
    }
}
