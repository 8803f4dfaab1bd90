//! Trailing-edge debouncing for bursty input channels.
//!
//! The host feeds events and the current time in; nothing here owns a
//! timer. After each event the host polls with the current time and, if
//! something is pending, asks to be woken at [`Debouncer::deadline`].

use std::time::{Duration, Instant};

/// Collapses a burst of events into one trailing value.
///
/// Every new event replaces the pending value and restarts the quiet
/// period. The value is released once, by the first poll at or after the
/// deadline.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event at `now`, cancelling whatever was pending.
    pub fn push(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    /// Releases the pending value if its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(50 * MS);
        debouncer.push(start, 1);

        assert_eq!(debouncer.poll(start + 49 * MS), None);
        assert_eq!(debouncer.poll(start + 50 * MS), Some(1));
        assert_eq!(debouncer.poll(start + 200 * MS), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_keeps_last_value_and_resets_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(150 * MS);
        debouncer.push(start, 800.0_f32);
        debouncer.push(start + 100 * MS, 1000.0);
        debouncer.push(start + 200 * MS, 500.0);

        assert_eq!(debouncer.deadline(), Some(start + 350 * MS));
        assert_eq!(debouncer.poll(start + 300 * MS), None);
        assert_eq!(debouncer.poll(start + 350 * MS), Some(500.0));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(10 * MS);
        debouncer.push(start, "x");
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + 20 * MS), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
