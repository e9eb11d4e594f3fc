//! # Log Animator
//!
//! Streams the system-log script into its container, one line per interval,
//! then pauses, clears and starts over. The cycle only ends when [`stop`] is
//! called (page unload).
//!
//! ```text
//!  Idle --start--> Streaming --tick (cursor < len)--> Streaming
//!                      ^            |
//!                      |     cursor == len
//!                 drain timer       v
//!                      +------- Draining (ticks ignored)
//! ```
//!
//! [`stop`]: LogAnimator::stop

use crate::clock::format_timestamp;
use crate::document::{Document, ElementId};
use crate::scheduler::{Scheduler, TimerId};
use chrono::NaiveTime;
use folio_core::render::log_line;
use std::time::Duration;

/// Timer tasks owned by the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTimer {
    Tick,
    Drain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogState {
    Idle,
    Streaming,
    Draining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Line `index` of the script was appended.
    Appended { index: usize },
    /// The script is exhausted and the drain pause is running.
    Paused,
    /// Not started, or stopped.
    Idle,
}

#[derive(Debug, Clone)]
pub struct LogAnimator {
    script: Vec<String>,
    container: ElementId,
    cursor: usize,
    state: LogState,
    interval: Duration,
    drain_pause: Duration,
    line_height: f64,
    tick_timer: Option<TimerId>,
    drain_timer: Option<TimerId>,
}

impl LogAnimator {
    pub fn new(script: Vec<String>, container: ElementId) -> Self {
        Self {
            script,
            container,
            cursor: 0,
            state: LogState::Idle,
            interval: Duration::from_millis(1500),
            drain_pause: Duration::from_millis(5000),
            line_height: 20.0,
            tick_timer: None,
            drain_timer: None,
        }
    }

    pub fn with_timing(mut self, interval: Duration, drain_pause: Duration) -> Self {
        self.interval = interval;
        self.drain_pause = drain_pause;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn state(&self) -> LogState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Registers the tick interval. An empty script is a no-op that leaves
    /// the animator idle; returns whether streaming started.
    pub fn start<T: From<LogTimer>>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
        if self.state != LogState::Idle {
            return true;
        }
        if self.script.is_empty() {
            tracing::warn!("System log script is empty, animation not started");
            return false;
        }

        self.tick_timer = Some(scheduler.set_interval(self.interval, LogTimer::Tick.into()));
        self.state = LogState::Streaming;
        tracing::debug!(lines = self.script.len(), interval = ?self.interval, "Log animation started");
        true
    }

    /// Cancels both timers. The container keeps whatever it shows.
    pub fn stop<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(id) = self.tick_timer.take() {
            scheduler.clear(id);
        }
        if let Some(id) = self.drain_timer.take() {
            scheduler.clear(id);
        }
        self.state = LogState::Idle;
    }

    pub fn tick<T: From<LogTimer>>(
        &mut self,
        doc: &mut Document,
        scheduler: &mut Scheduler<T>,
        now: NaiveTime,
    ) -> TickOutcome {
        match self.state {
            LogState::Idle => TickOutcome::Idle,
            LogState::Draining => TickOutcome::Paused,
            LogState::Streaming => {
                let index = self.cursor;
                let Some(message) = self.script.get(index) else {
                    return TickOutcome::Idle;
                };

                let line = doc.instantiate(&log_line(&format_timestamp(now), message));
                doc.set_layout(line, index as f64 * self.line_height, self.line_height);
                doc.append_child(self.container, line);
                doc.scroll_to_end(self.container);
                self.cursor += 1;

                if self.cursor == self.script.len() {
                    self.state = LogState::Draining;
                    self.drain_timer =
                        Some(scheduler.set_timeout(self.drain_pause, LogTimer::Drain.into()));
                    tracing::debug!(pause = ?self.drain_pause, "Log script exhausted, draining");
                }
                TickOutcome::Appended { index }
            }
        }
    }

    /// Drain pause elapsed: clear the container and rewind.
    pub fn finish_drain(&mut self, doc: &mut Document) {
        if self.state != LogState::Draining {
            return;
        }
        doc.clear_children(self.container);
        doc.set_scroll_top(self.container, 0.0);
        self.cursor = 0;
        self.drain_timer = None;
        self.state = LogState::Streaming;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Harness {
        doc: Document,
        scheduler: Scheduler<LogTimer>,
        log: LogAnimator,
    }

    fn harness(script: &[&str]) -> Harness {
        let mut doc = Document::new();
        let container = doc.create_element("div");
        doc.append_child(doc.body(), container);
        let log = LogAnimator::new(script.iter().map(|s| s.to_string()).collect(), container)
            .with_timing(Duration::from_secs(1), Duration::from_millis(4500));
        Harness {
            doc,
            scheduler: Scheduler::new(),
            log,
        }
    }

    impl Harness {
        fn run_until(&mut self, millis: u64) {
            let until = Duration::from_millis(millis);
            let now = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
            while let Some((_, task)) = self.scheduler.pop_due(until) {
                match task {
                    LogTimer::Tick => {
                        self.log.tick(&mut self.doc, &mut self.scheduler, now);
                    }
                    LogTimer::Drain => self.log.finish_drain(&mut self.doc),
                }
            }
            self.scheduler.advance_to(until);
        }

        fn lines(&self) -> Vec<String> {
            self.doc
                .children(self.log.container())
                .into_iter()
                .map(|line| self.doc.text_content(line))
                .collect()
        }
    }

    #[test]
    fn test_appends_one_line_per_tick_in_order() {
        let mut h = harness(&["a", "b", "c"]);
        assert!(h.log.start(&mut h.scheduler));

        h.run_until(2000);
        assert_eq!(h.lines(), vec!["[12:00:00]a", "[12:00:00]b"]);
        assert_eq!(h.log.state(), LogState::Streaming);
        assert_eq!(h.doc.scroll_top(h.log.container()), 40.0);
    }

    #[test]
    fn test_drains_then_restarts_from_first_line() {
        let mut h = harness(&["a", "b", "c"]);
        h.log.start(&mut h.scheduler);

        // last line at 3s, drain fires at 7.5s
        h.run_until(7000);
        assert_eq!(h.log.state(), LogState::Draining);
        assert_eq!(h.lines().len(), 3);

        h.run_until(7500);
        assert!(h.lines().is_empty());
        assert_eq!(h.log.cursor(), 0);

        h.run_until(8000);
        assert_eq!(h.lines(), vec!["[12:00:00]a"]);
    }

    #[test]
    fn test_empty_script_stays_idle() {
        let mut h = harness(&[]);
        assert!(!h.log.start(&mut h.scheduler));
        assert_eq!(h.log.state(), LogState::Idle);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn test_stop_cancels_all_timers() {
        let mut h = harness(&["a"]);
        h.log.start(&mut h.scheduler);
        h.run_until(1000);
        assert_eq!(h.log.state(), LogState::Draining);
        assert_eq!(h.scheduler.pending(), 2);

        h.log.stop(&mut h.scheduler);
        assert_eq!(h.scheduler.pending(), 0);
        h.run_until(30_000);
        assert_eq!(h.lines(), vec!["[12:00:00]a"]);
    }
}
