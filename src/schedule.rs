//! Repeating interval timers polled from the frame loop.
//!
//! The dashboard has two periodic jobs (clock refresh and telemetry tick). Both
//! are driven by an [`IntervalTimer`] that the frame loop polls with the frame's
//! start instant, so every update lands between two frames and is never seen
//! half-applied.
//!
//! # Catch-up Policy
//!
//! A timer fires at most once per poll. If the loop stalls for several periods
//! (window dragged, debugger attached), the missed ticks are dropped and the
//! next deadline is rescheduled from the current instant instead of bursting.

use std::time::{Duration, Instant};

/// A fixed-period repeating timer.
#[derive(Clone, Debug)]
pub struct IntervalTimer {
    period: Duration,
    next_due: Instant,
    fired: u64,
}

impl IntervalTimer {
    /// Create a timer whose first tick is one period after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
            fired: 0,
        }
    }

    /// Check whether the timer is due at `now`, advancing the deadline if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }

        self.next_due += self.period;
        if self.next_due <= now {
            // Fell behind by more than a period: drop missed ticks
            self.next_due = now + self.period;
        }
        self.fired += 1;
        true
    }

    /// Number of ticks fired so far.
    #[inline]
    pub const fn fired(&self) -> u64 {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_not_due_before_period() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(SECOND, start);

        assert!(!timer.poll(start), "Timer should not fire at creation");
        assert!(!timer.poll(start + Duration::from_millis(999)));
        assert_eq!(timer.fired(), 0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(SECOND, start);

        assert!(timer.poll(start + SECOND), "Timer should fire exactly at the deadline");
        assert!(!timer.poll(start + SECOND), "Same instant should not fire twice");
        assert!(!timer.poll(start + Duration::from_millis(1500)));
        assert!(timer.poll(start + Duration::from_millis(2010)));
        assert_eq!(timer.fired(), 2);
    }

    #[test]
    fn test_keeps_cadence_with_late_polls() {
        // Polling 20ms late each time should not drift the schedule
        let start = Instant::now();
        let mut timer = IntervalTimer::new(SECOND, start);

        assert!(timer.poll(start + Duration::from_millis(1020)));
        assert!(!timer.poll(start + Duration::from_millis(1999)));
        assert!(
            timer.poll(start + Duration::from_millis(2000)),
            "Next deadline should stay on the original grid"
        );
    }

    #[test]
    fn test_no_burst_after_stall() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(SECOND, start);

        // Loop stalls for 5 periods
        let late = start + Duration::from_millis(5500);
        assert!(timer.poll(late));
        assert!(!timer.poll(late), "Missed ticks should be dropped, not replayed");
        assert!(!timer.poll(late + Duration::from_millis(999)));
        assert!(timer.poll(late + SECOND), "Deadline should restart from the late poll");
        assert_eq!(timer.fired(), 2);
    }
}
