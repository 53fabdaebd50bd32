//! Maze generation for pathviz boards.
//!
//! [`MazeGen`] carves a perfect maze by recursive backtracking (run on an
//! explicit stack), reporting every opened cell through a
//! [`Session`](pathviz_core::Session) so the carve can be watched and
//! stopped midway.

mod maze;

pub use maze::{BoardMaze, GenStatus, MazeGen};
