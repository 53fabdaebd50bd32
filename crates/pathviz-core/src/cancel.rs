//! Cooperative cancellation.
//!
//! A run polls its token at fixed step boundaries; flipping the token never
//! interrupts a step that is already underway.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A zero-argument stop predicate.
pub trait Cancel {
    /// Whether the current run should stop.
    fn is_cancelled(&self) -> bool;
}

impl<F: Fn() -> bool> Cancel for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

impl Cancel for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// A token that never trips.
#[derive(Copy, Clone, Debug, Default)]
pub struct Never;

impl Cancel for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A shareable stop flag backed by an [`AtomicBool`].
///
/// Clones observe the same flag, so one clone can drive a run while another
/// is kept by whoever may stop it.
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stop: Arc<AtomicBool>,
}

impl StopToken {
    /// Create a new, non-tripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the run to stop at its next poll point.
    #[inline]
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Re-arm the token before the next run.
    #[inline]
    pub fn reset(&self) {
        self.stop.store(false, Ordering::Relaxed);
    }
}

impl Cancel for StopToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closure_token() {
        let polls = Cell::new(0);
        let token = || {
            polls.set(polls.get() + 1);
            polls.get() > 2
        };
        assert!(!token.is_cancelled());
        assert!(!token.is_cancelled());
        assert!(token.is_cancelled());
    }

    #[test]
    fn stop_token_is_shared_between_clones() {
        let a = StopToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
        b.reset();
        assert!(!a.is_cancelled());
    }

    #[test]
    fn atomic_flag_from_another_thread() {
        let flag = Arc::new(AtomicBool::new(false));
        let remote = Arc::clone(&flag);
        std::thread::spawn(move || remote.store(true, Ordering::Relaxed))
            .join()
            .unwrap();
        assert!(flag.is_cancelled());
        assert!(!Never.is_cancelled());
    }
}
