//! Timestamp sources for calculation results.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of wall-clock instants.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Wraps a clock so that successive readings never go backwards.
///
/// If the inner clock steps back (NTP adjustment, manual change), the last
/// issued instant is repeated until the inner clock catches up.
#[derive(Debug)]
pub struct MonotonicClock<C = SystemClock> {
    inner: C,
    last_nanos: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            last_nanos: AtomicI64::new(i64::MIN),
        }
    }
}

impl Default for MonotonicClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        // Outside the nanosecond range (years ~1677..2262) there is nothing to clamp against.
        let Some(nanos) = now.timestamp_nanos_opt() else {
            return now;
        };

        let prev = self.last_nanos.fetch_max(nanos, Ordering::AcqRel);
        if prev > nanos {
            DateTime::from_timestamp_nanos(prev)
        } else {
            now
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Mutex;

    use chrono::TimeDelta;

    use super::*;

    /// Replays a fixed sequence of instants.
    struct ScriptedClock {
        readings: Mutex<Vec<DateTime<Utc>>>,
    }

    impl ScriptedClock {
        fn new(mut readings: Vec<DateTime<Utc>>) -> Self {
            readings.reverse();
            Self {
                readings: Mutex::new(readings),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now(&self) -> DateTime<Utc> {
            self.readings.lock().unwrap().pop().unwrap()
        }
    }

    #[test]
    fn passes_through_forward_readings() {
        let t0 = Utc::now();
        let t1 = t0 + TimeDelta::milliseconds(5);
        let clock = MonotonicClock::new(ScriptedClock::new(vec![t0, t1]));

        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t1);
    }

    #[test]
    fn holds_last_instant_when_inner_clock_steps_back() {
        let t0 = Utc::now();
        let earlier = t0 - TimeDelta::seconds(30);
        let later = t0 + TimeDelta::seconds(1);
        let clock = MonotonicClock::new(ScriptedClock::new(vec![t0, earlier, later]));

        let first = clock.now();
        let second = clock.now();
        let third = clock.now();

        assert_eq!(first, t0);
        assert_eq!(second, t0);
        assert_eq!(third, later);
    }

    #[test]
    fn wraps_shared_trait_objects() {
        let t0 = Utc::now();
        let inner: Arc<dyn Clock> =
            Arc::new(ScriptedClock::new(vec![t0, t0 - TimeDelta::seconds(30)]));
        let clock = MonotonicClock::new(inner);

        assert_eq!(clock.now(), t0);
        assert_eq!(clock.now(), t0);
    }

    #[test]
    fn system_clock_readings_do_not_decrease() {
        let clock = MonotonicClock::default();
        let mut prev = clock.now();
        for _ in 0..1000 {
            let next = clock.now();
            assert!(next >= prev);
            prev = next;
        }
    }
}
