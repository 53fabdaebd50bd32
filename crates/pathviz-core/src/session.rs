//! The per-run [`Session`]: sink, cancellation, speed and sleeper in one
//! place.

use crate::cancel::Cancel;
use crate::config::Pacing;
use crate::error::Cancelled;
use crate::geom::Cell;
use crate::pace::{Sleeper, SpeedSource, ThreadSleeper};
use crate::sink::{SinkEvent, VisualSink};

/// Everything a search or a maze carve needs from the outside world.
///
/// Each notification polls the token, calls the sink, pauses for the current
/// speed and polls again. Once the token has been seen tripped the session
/// stays stopped and forwards nothing more.
pub struct Session<'a> {
    sink: &'a mut dyn VisualSink,
    cancel: &'a dyn Cancel,
    speed: &'a dyn SpeedSource,
    sleeper: &'a dyn Sleeper,
    pacing: Pacing,
    steps: usize,
    stopped: bool,
}

impl<'a> Session<'a> {
    /// A session that sleeps the current thread between steps.
    pub fn new(
        sink: &'a mut dyn VisualSink,
        cancel: &'a dyn Cancel,
        speed: &'a dyn SpeedSource,
    ) -> Self {
        Self {
            sink,
            cancel,
            speed,
            sleeper: &ThreadSleeper,
            pacing: Pacing::default(),
            steps: 0,
            stopped: false,
        }
    }

    /// Replace the sleeper.
    pub fn with_sleeper(mut self, sleeper: &'a dyn Sleeper) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Replace the speed-to-delay mapping.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Number of notifications forwarded to the sink so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the token has been observed tripped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Poll the cancellation token.
    pub fn poll(&mut self) -> Result<(), Cancelled> {
        if self.stopped || self.cancel.is_cancelled() {
            self.stopped = true;
            return Err(Cancelled);
        }
        Ok(())
    }

    /// Report a visited cell, then pause.
    pub fn visited(&mut self, cell: Cell) -> Result<(), Cancelled> {
        log::trace!("visited {cell}");
        self.emit(SinkEvent::Visited(cell))
    }

    /// Report a path cell, then pause.
    pub fn path(&mut self, cell: Cell) -> Result<(), Cancelled> {
        log::trace!("path {cell}");
        self.emit(SinkEvent::Path(cell))
    }

    /// Report a carved cell, then pause.
    pub fn opened(&mut self, cell: Cell) -> Result<(), Cancelled> {
        log::trace!("opened {cell}");
        self.emit(SinkEvent::Open(cell))
    }

    fn emit(&mut self, event: SinkEvent) -> Result<(), Cancelled> {
        self.poll()?;
        match event {
            SinkEvent::Visited(c) => self.sink.mark_visited(c),
            SinkEvent::Path(c) => self.sink.mark_path(c),
            SinkEvent::Open(c) => self.sink.mark_open(c),
        }
        self.steps += 1;
        let d = self.pacing.delay(self.speed.speed());
        self.sleeper.sleep(d);
        self.poll()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::Never;
    use crate::pace::RecordingSleeper;
    use crate::sink::RecordingSink;
    use std::cell::Cell as StdCell;
    use std::time::Duration;

    #[test]
    fn each_step_pauses_with_current_speed() {
        let mut sink = RecordingSink::new();
        let sleeper = RecordingSleeper::new();
        let speed = StdCell::new(70i32);
        let read_speed = || speed.get();
        let mut s = Session::new(&mut sink, &Never, &read_speed).with_sleeper(&sleeper);
        s.visited(Cell::new(0, 1)).unwrap();
        speed.set(98);
        s.path(Cell::new(0, 2)).unwrap();
        assert_eq!(s.steps(), 2);
        assert_eq!(sleeper.count(), 2);
        assert_eq!(sleeper.total(), Duration::from_millis(30 + 5));
        drop(s);
        assert_eq!(
            sink.events,
            vec![SinkEvent::Visited(Cell::new(0, 1)), SinkEvent::Path(Cell::new(0, 2))]
        );
    }

    #[test]
    fn tripped_token_blocks_further_events() {
        let mut sink = RecordingSink::new();
        let sleeper = RecordingSleeper::new();
        let stop = StdCell::new(false);
        let cancel = || stop.get();
        let mut s = Session::new(&mut sink, &cancel, &50i32).with_sleeper(&sleeper);
        s.opened(Cell::new(1, 1)).unwrap();
        stop.set(true);
        assert_eq!(s.opened(Cell::new(1, 2)), Err(Cancelled));
        // Stays stopped even if the flag is cleared.
        stop.set(false);
        assert_eq!(s.poll(), Err(Cancelled));
        assert!(s.is_stopped());
        drop(s);
        assert_eq!(sink.opened(), vec![Cell::new(1, 1)]);
        assert_eq!(sleeper.count(), 1);
    }

    #[test]
    fn cancellation_during_pause_is_seen_on_resume() {
        struct TripOnSleep<'t>(&'t StdCell<bool>);
        impl Sleeper for TripOnSleep<'_> {
            fn sleep(&self, _d: Duration) {
                self.0.set(true);
            }
        }

        let mut sink = RecordingSink::new();
        let stop = StdCell::new(false);
        let sleeper = TripOnSleep(&stop);
        let cancel = || stop.get();
        let mut s = Session::new(&mut sink, &cancel, &0i32).with_sleeper(&sleeper);
        assert_eq!(s.visited(Cell::new(2, 2)), Err(Cancelled));
        drop(s);
        assert_eq!(sink.visited(), vec![Cell::new(2, 2)]);
    }
}
