//! The visualization boundary.
//!
//! Searches and the maze generator never touch presentation state; they
//! report progress to a [`VisualSink`] and the front end decides how to show
//! it.

use crate::geom::Cell;

/// Receiver of progress notifications. Calls are fire-and-forget.
pub trait VisualSink {
    /// A search reached `cell`.
    fn mark_visited(&mut self, cell: Cell);

    /// `cell` is part of the reconstructed path.
    fn mark_path(&mut self, cell: Cell);

    /// The maze generator carved `cell` open.
    fn mark_open(&mut self, cell: Cell);
}

impl<S: VisualSink + ?Sized> VisualSink for &mut S {
    fn mark_visited(&mut self, cell: Cell) {
        (**self).mark_visited(cell);
    }

    fn mark_path(&mut self, cell: Cell) {
        (**self).mark_path(cell);
    }

    fn mark_open(&mut self, cell: Cell) {
        (**self).mark_open(cell);
    }
}

/// A sink that discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl VisualSink for NullSink {
    fn mark_visited(&mut self, _cell: Cell) {}
    fn mark_path(&mut self, _cell: Cell) {}
    fn mark_open(&mut self, _cell: Cell) {}
}

/// One recorded notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SinkEvent {
    Visited(Cell),
    Path(Cell),
    Open(Cell),
}

impl SinkEvent {
    /// The cell the event refers to.
    pub fn cell(self) -> Cell {
        match self {
            Self::Visited(c) | Self::Path(c) | Self::Open(c) => c,
        }
    }
}

/// A sink that keeps every event in order, for replays and tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells passed to `mark_visited`, in order.
    pub fn visited(&self) -> Vec<Cell> {
        self.filter(|e| matches!(e, SinkEvent::Visited(_)))
    }

    /// Cells passed to `mark_path`, in order.
    pub fn path(&self) -> Vec<Cell> {
        self.filter(|e| matches!(e, SinkEvent::Path(_)))
    }

    /// Cells passed to `mark_open`, in order.
    pub fn opened(&self) -> Vec<Cell> {
        self.filter(|e| matches!(e, SinkEvent::Open(_)))
    }

    fn filter(&self, keep: impl Fn(&SinkEvent) -> bool) -> Vec<Cell> {
        self.events
            .iter()
            .filter(|e| keep(e))
            .map(|e| e.cell())
            .collect()
    }
}

impl VisualSink for RecordingSink {
    fn mark_visited(&mut self, cell: Cell) {
        self.events.push(SinkEvent::Visited(cell));
    }

    fn mark_path(&mut self, cell: Cell) {
        self.events.push(SinkEvent::Path(cell));
    }

    fn mark_open(&mut self, cell: Cell) {
        self.events.push(SinkEvent::Open(cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_splits_by_kind() {
        let mut sink = RecordingSink::new();
        sink.mark_visited(Cell::new(0, 1));
        sink.mark_open(Cell::new(1, 1));
        sink.mark_path(Cell::new(0, 2));
        sink.mark_visited(Cell::new(0, 2));
        assert_eq!(sink.visited(), vec![Cell::new(0, 1), Cell::new(0, 2)]);
        assert_eq!(sink.path(), vec![Cell::new(0, 2)]);
        assert_eq!(sink.opened(), vec![Cell::new(1, 1)]);
        assert_eq!(sink.events.len(), 4);
    }

    #[test]
    fn forwarding_through_mut_ref() {
        fn drive(mut s: impl VisualSink) {
            s.mark_path(Cell::new(3, 3));
        }
        let mut sink = RecordingSink::new();
        drive(&mut sink);
        assert_eq!(sink.events, vec![SinkEvent::Path(Cell::new(3, 3))]);
    }
}
