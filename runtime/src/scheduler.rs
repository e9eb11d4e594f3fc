//! # Scheduler: Virtual Timers
//!
//! A single-threaded timer table driven by explicit time advancement. Tasks
//! are plain values handed back to the caller when due, so whoever owns the
//! scheduler also owns the state the tasks act on. Nothing here sleeps;
//! real-time drivers sleep until [`Scheduler::next_due`] themselves.

use std::time::Duration;

/// Shortest interval period; shorter ones are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer<T> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    /// Registration order, breaks ties between timers due at the same instant.
    seq: u64,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: Vec::new(),
        }
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    fn register(&mut self, delay: Duration, period: Option<Duration>, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.push(Timer {
            id,
            due: self.now + delay,
            period,
            seq,
            task,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Fires `task` every `period`, first after one full period. The period
    /// is at least [`MIN_INTERVAL`].
    pub fn set_interval(&mut self, period: Duration, task: T) -> TimerId {
        let period = period.max(MIN_INTERVAL);
        self.register(period, Some(period), task)
    }

    /// Fires `task` once after `delay`.
    pub fn set_timeout(&mut self, delay: Duration, task: T) -> TimerId {
        self.register(delay, None, task)
    }

    /// Cancels a timer. Returns false if it already fired or was cleared.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest due time among registered timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Moves the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl<T: Clone> Scheduler<T> {
    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its due time. Intervals are re-armed before the task is returned, so
    /// a handler that registers new timers sees a consistent table.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(index, _)| index)?;

        let due = self.timers[index].due;
        self.advance_to(due);

        match self.timers[index].period {
            Some(period) => {
                let seq = self.bump_seq();
                let timer = &mut self.timers[index];
                timer.due += period;
                timer.seq = seq;
                Some((timer.id, timer.task.clone()))
            }
            None => {
                let timer = self.timers.remove(index);
                Some((timer.id, timer.task))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T: Clone>(scheduler: &mut Scheduler<T>, until: Duration) -> Vec<(Duration, T)> {
        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(until) {
            fired.push((scheduler.now(), task));
        }
        scheduler.advance_to(until);
        fired
    }

    #[test]
    fn test_interval_fires_every_period() {
        let mut scheduler = Scheduler::new();
        scheduler.set_interval(Duration::from_millis(1500), "tick");

        let fired = drain(&mut scheduler, Duration::from_secs(5));
        let times: Vec<_> = fired.iter().map(|(at, _)| at.as_millis()).collect();
        assert_eq!(times, vec![1500, 3000, 4500]);
        assert_eq!(scheduler.now(), Duration::from_secs(5));
        assert_eq!(scheduler.next_due(), Some(Duration::from_millis(6000)));
    }

    #[test]
    fn test_zero_period_interval_is_clamped() {
        let mut scheduler = Scheduler::new();
        scheduler.set_interval(Duration::ZERO, ());

        let fired = drain(&mut scheduler, Duration::from_millis(10));
        assert_eq!(fired.len(), 10);
        assert_eq!(fired[0].0, MIN_INTERVAL);
    }

    #[test]
    fn test_timeout_fires_once_and_ties_keep_registration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.set_timeout(Duration::from_secs(2), "a");
        scheduler.set_timeout(Duration::from_secs(1), "b");
        scheduler.set_timeout(Duration::from_secs(2), "c");

        let tasks: Vec<_> = drain(&mut scheduler, Duration::from_secs(10))
            .into_iter()
            .map(|(_, task)| task)
            .collect();
        assert_eq!(tasks, vec!["b", "a", "c"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_clear_cancels_pending_timer() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.set_interval(Duration::from_secs(1), ());

        assert!(scheduler.clear(id));
        assert!(!scheduler.clear(id));
        assert!(!scheduler.is_pending(id));
        assert!(drain(&mut scheduler, Duration::from_secs(3)).is_empty());
    }

    #[test]
    fn test_timers_registered_mid_advance_still_fire() {
        let mut scheduler = Scheduler::new();
        scheduler.set_timeout(Duration::from_secs(1), 1);

        let mut fired = Vec::new();
        while let Some((_, task)) = scheduler.pop_due(Duration::from_secs(5)) {
            fired.push(task);
            if task == 1 {
                scheduler.set_timeout(Duration::from_secs(2), 2);
            }
        }
        assert_eq!(fired, vec![1, 2]);
        assert_eq!(scheduler.now(), Duration::from_secs(3));
    }
}
