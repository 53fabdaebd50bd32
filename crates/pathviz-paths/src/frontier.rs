//! Stable min-heap used as the Dijkstra / A* frontier.
//!
//! Entries are keyed by `(priority, insertion_order)`: lower priorities pop
//! first and ties pop in the order they were pushed (FIFO), which keeps
//! visitation order reproducible for a given board.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: u32,
    /// Monotonically increasing push counter.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue with first-in-first-out tie-breaking.
///
/// Stale duplicates are allowed; callers skip items they have already
/// finalized.
#[derive(Debug)]
pub struct StableHeap<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Default for StableHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StableHeap<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: u32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            item,
            priority,
            seq,
        }));
    }

    /// Pop the lowest-priority item, returning it with its priority.
    pub fn pop(&mut self) -> Option<(T, u32)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_priority_first() {
        let mut h = StableHeap::new();
        h.push("c", 30);
        h.push("a", 10);
        h.push("b", 20);
        assert_eq!(h.pop(), Some(("a", 10)));
        assert_eq!(h.pop(), Some(("b", 20)));
        assert_eq!(h.pop(), Some(("c", 30)));
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut h = StableHeap::new();
        for (i, name) in ["first", "second", "third", "fourth"].into_iter().enumerate() {
            h.push(name, if i == 2 { 1 } else { 5 });
        }
        assert_eq!(h.len(), 4);
        let order: Vec<_> = std::iter::from_fn(|| h.pop().map(|(n, _)| n)).collect();
        assert_eq!(order, vec!["third", "first", "second", "fourth"]);
        assert!(h.is_empty());
    }

    #[test]
    fn interleaved_pushes_keep_fifo_ties() {
        let mut h = StableHeap::new();
        h.push(1, 2);
        h.push(2, 2);
        assert_eq!(h.pop(), Some((1, 2)));
        h.push(3, 2);
        h.push(4, 1);
        assert_eq!(h.pop(), Some((4, 1)));
        assert_eq!(h.pop(), Some((2, 2)));
        assert_eq!(h.pop(), Some((3, 2)));
    }
}
