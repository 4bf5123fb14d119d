//! Repeating auto-advance timer.
//!
//! The timer is driven by the host: it never sleeps, it only answers
//! "is a tick due at `now`?". Every `start` replaces the previous handle,
//! so at most one timer is logically active.

use std::time::{Duration, Instant};

/// Default auto-advance period (5 seconds).
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// Repeating timer with cancel/restart semantics.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    next_due: Option<Instant>,
    /// Incremented on every start; identifies the live timer.
    generation: u64,
}

impl AutoAdvance {
    /// Create a stopped timer with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a fresh timer whose first tick is one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.generation += 1;
        self.next_due = Some(now + self.interval);
        log::debug!(
            "auto-advance timer #{} scheduled in {:?}",
            self.generation,
            self.interval
        );
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            log::debug!("auto-advance timer #{} cancelled", self.generation);
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Identity of the most recently started timer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Instant of the next tick, if running.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Returns true if a tick is due at `now`, rescheduling the next one.
    ///
    /// Missed ticks are skipped: a late poll fires once and the following
    /// tick is due one interval after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ADVANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_stopped() {
        let mut timer = AutoAdvance::default();
        assert!(!timer.is_active());
        assert!(!timer.poll(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_tick_fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(Duration::from_millis(100));
        timer.start(t0);

        assert!(!timer.poll(t0 + Duration::from_millis(99)));
        assert!(timer.poll(t0 + Duration::from_millis(100)));
        assert!(!timer.poll(t0 + Duration::from_millis(150)));
        assert!(timer.poll(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_late_poll_skips_missed_ticks() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(Duration::from_millis(100));
        timer.start(t0);

        let late = t0 + Duration::from_millis(1000);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.next_due(), Some(late + Duration::from_millis(100)));
    }

    #[test]
    fn test_restart_replaces_handle() {
        let t0 = Instant::now();
        let mut timer = AutoAdvance::new(Duration::from_millis(100));
        timer.start(t0);
        let first = timer.generation();
        timer.cancel();
        timer.start(t0 + Duration::from_millis(50));

        assert!(timer.generation() > first);
        assert!(!timer.poll(t0 + Duration::from_millis(100)));
        assert!(timer.poll(t0 + Duration::from_millis(150)));
    }
}
