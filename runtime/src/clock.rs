//! Wall-clock time of day for log timestamps.

use chrono::{Local, NaiveTime, TimeDelta};
use std::time::Duration;

/// Source of the time of day stamped on log lines.
///
/// `elapsed` is the page's scheduler time, which deterministic clocks use
/// and the system clock ignores.
pub trait Clock {
    fn time_of_day(&self, elapsed: Duration) -> NaiveTime;
}

/// Local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_of_day(&self, _elapsed: Duration) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock that starts at `origin` and follows scheduler time. Wraps at
/// midnight.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    origin: NaiveTime,
}

impl FixedClock {
    pub fn new(origin: NaiveTime) -> Self {
        Self { origin }
    }
}

impl Clock for FixedClock {
    fn time_of_day(&self, elapsed: Duration) -> NaiveTime {
        let delta = TimeDelta::from_std(elapsed).unwrap_or(TimeDelta::zero());
        self.origin + delta
    }
}

/// 24-hour `HH:MM:SS`.
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_follows_elapsed_time_and_wraps() {
        let origin = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        let clock = FixedClock::new(origin);

        assert_eq!(format_timestamp(clock.time_of_day(Duration::ZERO)), "23:59:58");
        assert_eq!(
            format_timestamp(clock.time_of_day(Duration::from_millis(3500))),
            "00:00:01"
        );
    }
}
