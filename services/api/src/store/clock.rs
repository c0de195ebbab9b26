//! Time sources for timestamping lists and items.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// Supplies the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// With a non-zero tick, every call to [`Clock::now`] returns the current
/// instant and then advances it by the tick.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
    tick: Duration,
}

impl ManualClock {
    /// A clock frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::ticking(start, Duration::zero())
    }

    /// A clock starting at `start` that advances by `tick` after every read.
    pub fn ticking(start: DateTime<Utc>, tick: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            tick,
        }
    }

    /// Moves the clock to `instant`, which may be in the past.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *current;
        *current += self.tick;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::new(t0());
        assert_eq!(clock.now(), t0());
        assert_eq!(clock.now(), t0());

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now(), t0() + Duration::seconds(5));
    }

    #[test]
    fn test_ticking_clock_advances_per_read() {
        let clock = ManualClock::ticking(t0(), Duration::milliseconds(10));
        assert_eq!(clock.now(), t0());
        assert_eq!(clock.now(), t0() + Duration::milliseconds(10));
        assert_eq!(clock.now(), t0() + Duration::milliseconds(20));
    }

    #[test]
    fn test_set_can_move_backwards() {
        let clock = ManualClock::new(t0());
        clock.set(t0() - Duration::hours(1));
        assert_eq!(clock.now(), t0() - Duration::hours(1));
    }
}
