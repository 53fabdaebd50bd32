//! Path reconstruction from predecessor links.

use pathviz_core::{Cancelled, Cell, Session};

use crate::state::ParentLinks;

/// A path walked back from the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// Cells after `start` up to and including the goal.
    pub path: Vec<Cell>,
    /// `false` if the walk hit a cell with no recorded parent before
    /// reaching `start`; `path` then holds only the tail that was walked.
    pub complete: bool,
}

/// Follow parent links from `end` back to `start` and return them in
/// forward order.
///
/// A missing link ends the walk early with a partial trace. The walk is
/// bounded by the board size, so corrupted links that loop also end.
pub fn reconstruct(parents: &ParentLinks, start: Cell, end: Cell) -> Trace {
    let limit = parents.grid().len();
    let mut path = Vec::new();
    let mut cur = end;
    let mut complete = true;

    while cur != start {
        if path.len() >= limit {
            log::warn!("parent links from {end} loop without reaching {start}");
            complete = false;
            break;
        }
        path.push(cur);
        match parents.get(cur) {
            Some(p) => cur = p,
            None => {
                log::warn!("no parent recorded for {cur}, path to {end} is partial");
                complete = false;
                break;
            }
        }
    }

    path.reverse();
    Trace { path, complete }
}

/// Show each path cell except the endpoints, pausing after each one.
pub fn reveal(
    path: &[Cell],
    start: Cell,
    end: Cell,
    session: &mut Session<'_>,
) -> Result<(), Cancelled> {
    for &c in path {
        session.poll()?;
        if c == start || c == end {
            continue;
        }
        session.path(c)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{GridModel, Never, Pacing, RecordingSink};

    fn chain(grid: GridModel, cells: &[Cell]) -> ParentLinks {
        let mut links = ParentLinks::new(grid);
        for w in cells.windows(2) {
            links.set(w[1], w[0]);
        }
        links
    }

    #[test]
    fn walks_back_to_start() {
        let grid = GridModel::new(4).unwrap();
        let cells = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)];
        let t = reconstruct(&chain(grid, &cells), cells[0], cells[3]);
        assert!(t.complete);
        assert_eq!(t.path, cells[1..].to_vec());
    }

    #[test]
    fn start_equal_to_end_is_empty() {
        let grid = GridModel::new(4).unwrap();
        let t = reconstruct(&ParentLinks::new(grid), Cell::new(2, 2), Cell::new(2, 2));
        assert!(t.complete);
        assert!(t.path.is_empty());
    }

    #[test]
    fn broken_chain_returns_partial_tail() {
        let grid = GridModel::new(4).unwrap();
        // (1,1) has no parent.
        let links = chain(grid, &[Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]);
        let t = reconstruct(&links, Cell::new(0, 0), Cell::new(3, 1));
        assert!(!t.complete);
        assert_eq!(t.path, vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]);
    }

    #[test]
    fn looping_links_terminate() {
        let grid = GridModel::new(2).unwrap();
        let mut links = ParentLinks::new(grid);
        links.set(Cell::new(0, 1), Cell::new(1, 1));
        links.set(Cell::new(1, 1), Cell::new(0, 1));
        let t = reconstruct(&links, Cell::new(0, 0), Cell::new(1, 1));
        assert!(!t.complete);
        assert_eq!(t.path.len(), grid.len());
    }

    #[test]
    fn reveal_skips_endpoints() {
        let mut sink = RecordingSink::new();
        let mut session = Session::new(&mut sink, &Never, &0i32).with_pacing(Pacing::INSTANT);
        let path = [Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 2)];
        reveal(&path, Cell::new(0, 0), Cell::new(1, 2), &mut session).unwrap();
        drop(session);
        assert_eq!(sink.path(), vec![Cell::new(0, 1), Cell::new(0, 2)]);
    }
}
