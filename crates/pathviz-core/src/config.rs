//! Board and pacing configuration.

use std::time::Duration;

use crate::error::GridError;
use crate::grid::GridModel;

/// Smallest board side length accepted by [`BoardConfig`].
pub const MIN_CELLS: i32 = 5;
/// Largest board side length accepted by [`BoardConfig`].
pub const MAX_CELLS: i32 = 30;

/// Maps a speed setting to the pause after each visual step.
///
/// The pause is `max(min_delay_ms, base_delay_ms - speed)` milliseconds, so
/// faster settings shorten it down to a floor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pacing {
    pub base_delay_ms: u64,
    pub min_delay_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            base_delay_ms: 100,
            min_delay_ms: 5,
        }
    }
}

impl Pacing {
    /// A pacing that never pauses, for headless runs.
    pub const INSTANT: Self = Self {
        base_delay_ms: 0,
        min_delay_ms: 0,
    };

    /// Pause for one step at the given speed.
    pub fn delay(self, speed: i32) -> Duration {
        let raw = self.base_delay_ms as i64 - speed as i64;
        let ms = raw.max(self.min_delay_ms as i64).max(0);
        Duration::from_millis(ms as u64)
    }
}

/// Initial state of a [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Side length, within [`MIN_CELLS`]`..=`[`MAX_CELLS`].
    pub num_cells: i32,
    /// Visual speed; see [`Pacing::delay`].
    pub speed: i32,
    pub pacing: Pacing,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            num_cells: 15,
            speed: 70,
            pacing: Pacing::default(),
        }
    }
}

impl BoardConfig {
    /// Check the size range and build the grid described by this config.
    pub fn grid(&self) -> Result<GridModel, GridError> {
        check_size(self.num_cells)?;
        GridModel::new(self.num_cells)
    }
}

/// Fails with [`GridError::InvalidSize`] outside `MIN_CELLS..=MAX_CELLS`.
pub fn check_size(num_cells: i32) -> Result<(), GridError> {
    if (MIN_CELLS..=MAX_CELLS).contains(&num_cells) {
        Ok(())
    } else {
        Err(GridError::InvalidSize(num_cells))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: BoardConfig = serde_json::from_str(r#"{"num_cells": 21}"#).unwrap();
        assert_eq!(cfg.num_cells, 21);
        assert_eq!(cfg.speed, 70);
        assert_eq!(cfg.pacing, Pacing::default());
    }
}
