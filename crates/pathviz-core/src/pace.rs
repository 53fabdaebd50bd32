//! Speed sources and sleepers: the timing side of a visual run.

use std::cell::Cell;
use std::sync::atomic::{AtomicI32, Ordering};
use std::time::Duration;

/// Current visual speed. Re-read before every pause, so a front end can
/// change it while a run is active.
pub trait SpeedSource {
    fn speed(&self) -> i32;
}

impl SpeedSource for i32 {
    #[inline]
    fn speed(&self) -> i32 {
        *self
    }
}

impl SpeedSource for AtomicI32 {
    #[inline]
    fn speed(&self) -> i32 {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> i32> SpeedSource for F {
    #[inline]
    fn speed(&self) -> i32 {
        self()
    }
}

/// Blocks the active run for one step.
pub trait Sleeper {
    fn sleep(&self, d: Duration);
}

/// Sleeps the calling thread.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, d: Duration) {
        if !d.is_zero() {
            std::thread::sleep(d);
        }
    }
}

/// Returns immediately and keeps a tally of the requested pauses.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    count: Cell<usize>,
    total: Cell<Duration>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pauses requested.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Sum of all requested pauses.
    pub fn total(&self) -> Duration {
        self.total.get()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, d: Duration) {
        self.count.set(self.count.get() + 1);
        self.total.set(self.total.get() + d);
    }
}
