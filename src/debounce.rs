//! Single-slot deferred task
//!
//! The host drives time by calling [`Debouncer::poll`] from its event
//! loop. Scheduling always replaces whatever was pending, so at most one
//! deferred run exists at a time.

use std::time::{Duration, Instant};

/// A cancellable "run once after a quiet period" slot
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    /// When the pending run becomes due
    due: Option<Instant>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a run `delay` after `now`, cancelling any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Drop the pending run, if any
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// When the pending run is due
    pub fn deadline(&self) -> Option<Instant> {
        self.due
    }

    /// Returns true exactly once when the pending run has come due
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_when_due() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, Duration::from_millis(100));

        assert!(!debouncer.poll(start + Duration::from_millis(50)));
        assert!(debouncer.poll(start + Duration::from_millis(100)));
        assert!(!debouncer.poll(start + Duration::from_millis(200)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, Duration::from_millis(100));
        debouncer.schedule(start + Duration::from_millis(80), Duration::from_millis(100));

        assert!(!debouncer.poll(start + Duration::from_millis(120)));
        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(180)));
        assert!(debouncer.poll(start + Duration::from_millis(180)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new();
        debouncer.schedule(start, Duration::ZERO);
        debouncer.cancel();
        assert!(!debouncer.poll(start));
    }
}
