//! Visualized graph search over obstacle grids.
//!
//! Four strategies share one [`SearchEngine`]:
//!
//! | Algorithm | Frontier | Marked visited | Shortest path |
//! |---|---|---|---|
//! | [`Algorithm::Bfs`] | FIFO queue | on enqueue | yes |
//! | [`Algorithm::Dfs`] | LIFO stack | on first pop | no |
//! | [`Algorithm::Dijkstra`] | stable min-heap on g | on pop | yes |
//! | [`Algorithm::Astar`] | stable min-heap on g + Manhattan | on pop | yes |
//!
//! Every run reports progress through a [`Session`](pathviz_core::Session):
//! each shown cell is followed by a pause, and the cancellation token is
//! polled at every dequeue and every neighbour considered. Equal priorities
//! pop in insertion order, so a given board always produces the same event
//! sequence.

mod algorithm;
mod astar;
mod bfs;
mod board;
mod dfs;
mod dijkstra;
mod engine;
mod frontier;
mod reconstruct;
mod state;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use board::BoardSearch;
pub use engine::{SearchEngine, SearchOutcome, SearchStatus};
pub use frontier::StableHeap;
pub use reconstruct::{Trace, reconstruct, reveal};
pub use state::ParentLinks;
