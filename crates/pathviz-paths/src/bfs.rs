use std::collections::VecDeque;

use pathviz_core::{Cancelled, Cell, Session};

use crate::engine::SearchEngine;
use crate::state::SearchState;

impl SearchEngine<'_> {
    /// Breadth-first search.
    ///
    /// Cells are marked and shown as they are enqueued, so every cell enters
    /// the queue at most once and the goal is dequeued at its hop distance.
    pub(crate) fn bfs(
        &self,
        st: &mut SearchState,
        start: Cell,
        end: Cell,
        session: &mut Session<'_>,
    ) -> Result<bool, Cancelled> {
        let mut queue = VecDeque::new();
        st.mark(start);
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            session.poll()?;
            if cur == end {
                return Ok(true);
            }

            for n in cur.neighbors_4() {
                session.poll()?;
                if !self.passable(n) || st.is_visited(n) {
                    continue;
                }
                st.mark(n);
                st.parents.set(n, cur);
                queue.push_back(n);
                self.show(n, start, end, session)?;
            }
        }

        Ok(false)
    }
}
