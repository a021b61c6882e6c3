//! Fixed-interval schedule for automatic playback
//!
//! A [`Cadence`] never fires on its own. The host polls it with the current time, the
//! same way a UI event loop checks whether the next auto-step is due. Dropping the
//! cadence is cancellation: there is no timer left behind that could fire later.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    interval: Duration,
    next_due: Instant,
}

impl Cadence {
    /// Schedule the first firing one interval after `now`
    pub fn start(interval: Duration, now: Instant) -> Self {
        Cadence {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Change the interval without adding a second schedule.
    /// A pending firing is pulled in if the new interval is shorter.
    pub fn retune(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = self.next_due.min(now + interval);
    }

    /// Returns true (and schedules the next firing) when due.
    /// At most one firing per call; missed intervals are not replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut cadence = Cadence::start(Duration::from_millis(100), t0);

        assert!(!cadence.fire(t0));
        assert!(!cadence.fire(t0 + Duration::from_millis(99)));
        assert!(cadence.fire(t0 + Duration::from_millis(100)));
        assert!(!cadence.fire(t0 + Duration::from_millis(150)));
        assert!(cadence.fire(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let t0 = Instant::now();
        let mut cadence = Cadence::start(Duration::from_millis(100), t0);
        let late = t0 + Duration::from_secs(5);

        assert!(cadence.fire(late));
        assert!(!cadence.fire(late));
        assert_eq!(cadence.next_due(), late + Duration::from_millis(100));
    }

    #[test]
    fn test_retune_pulls_deadline_in() {
        let t0 = Instant::now();
        let mut cadence = Cadence::start(Duration::from_millis(900), t0);
        cadence.retune(Duration::from_millis(100), t0);

        assert_eq!(cadence.interval(), Duration::from_millis(100));
        assert!(cadence.fire(t0 + Duration::from_millis(100)));
    }
}
