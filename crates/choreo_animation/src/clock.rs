//! Clock abstraction
//!
//! The manager never reads wall time directly; every "now" query goes
//! through an injected clock, so lifecycle logic runs under test without
//! real time passing.

use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Anchored to an arbitrary real instant at construction; `advance` shifts
/// the reported time forward from there.
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Duration::ZERO,
        }
    }

    /// Move the reported time forward by `step`.
    pub fn advance(&mut self, step: Duration) {
        self.offset += step;
    }

    /// Total time advanced since construction.
    pub fn elapsed(&self) -> Duration {
        self.offset
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances_only_on_demand() {
        let mut clock = ManualClock::new();
        let t0 = clock.now();
        assert_eq!(clock.now(), t0);

        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now() - t0, Duration::from_millis(16));

        clock.advance(Duration::from_millis(4));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
