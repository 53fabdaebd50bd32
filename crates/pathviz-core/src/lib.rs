//! **pathviz-core**: shared types for step-by-step grid search
//! visualization.
//!
//! This crate provides the pieces every run is made of: board geometry, the
//! wall set, the [`VisualSink`] boundary through which progress is reported,
//! cooperative cancellation, and the [`Session`] that paces each visual step.

pub mod board;
pub mod cancel;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod obstacles;
pub mod pace;
pub mod session;
pub mod sink;

pub use board::{Board, validate_endpoints};
pub use cancel::{Cancel, Never, StopToken};
pub use config::{BoardConfig, MAX_CELLS, MIN_CELLS, Pacing};
pub use error::{Cancelled, Endpoint, GridError};
pub use geom::{Cell, Dir, manhattan};
pub use grid::GridModel;
pub use obstacles::ObstacleSet;
pub use pace::{RecordingSleeper, Sleeper, SpeedSource, ThreadSleeper};
pub use session::Session;
pub use sink::{NullSink, RecordingSink, SinkEvent, VisualSink};
