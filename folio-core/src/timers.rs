//! Per-engine timer ownership.
//!
//! A [`TimerQueue`] holds at most one timer of each [`TimerKind`]. Scheduling
//! a kind replaces whatever was pending for it, which is how the engines
//! guarantee that a timer is always cancelled before a same-kind timer is
//! rescheduled. Dropping the queue drops every pending timer.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Timers an engine may have pending. Declaration order breaks ties between
/// timers due at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKind {
    /// Clears the transition lock.
    TransitionEnd,
    /// Ends the quiet period after a user interaction.
    AutoplayResume,
    /// Repeating autoplay advance.
    AutoplayTick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    deadline: Instant,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: HashMap<TimerKind, Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a one-shot timer `after` from `now`, replacing any pending
    /// timer of the same kind. Returns true when a pending timer was replaced.
    pub fn schedule(
        &mut self,
        kind: TimerKind,
        now: Instant,
        after: Duration,
    ) -> bool {
        self.timers
            .insert(
                kind,
                Timer {
                    deadline: now + after,
                    period: None,
                },
            )
            .is_some()
    }

    /// Schedule a repeating timer whose first deadline is one `period` out.
    pub fn schedule_repeating(
        &mut self,
        kind: TimerKind,
        now: Instant,
        period: Duration,
    ) -> bool {
        let period = period.max(Duration::from_millis(1));
        self.timers
            .insert(
                kind,
                Timer {
                    deadline: now + period,
                    period: Some(period),
                },
            )
            .is_some()
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.timers.remove(&kind).is_some()
    }

    pub fn is_scheduled(&self, kind: TimerKind) -> bool {
        self.timers.contains_key(&kind)
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.timers.get(&kind).map(|t| t.deadline)
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Remove and return the earliest timer due at or before `now`, along
    /// with the instant it was due. Repeating timers are re-armed one period
    /// after their previous deadline so catching up after a long gap fires
    /// every missed tick in order.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerKind, Instant)> {
        let (kind, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= now)
            .min_by(|(ka, ta), (kb, tb)| {
                ta.deadline.cmp(&tb.deadline).then(ka.cmp(kb))
            })
            .map(|(k, t)| (*k, *t))?;

        match timer.period {
            Some(period) => {
                self.timers.insert(
                    kind,
                    Timer {
                        deadline: timer.deadline + period,
                        period: Some(period),
                    },
                );
            }
            None => {
                self.timers.remove(&kind);
            }
        }
        Some((kind, timer.deadline))
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn scheduling_same_kind_replaces_deadline() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        assert!(!q.schedule(TimerKind::AutoplayResume, t0, ms(2000)));
        assert!(q.schedule(TimerKind::AutoplayResume, t0 + ms(500), ms(2000)));
        assert_eq!(q.len(), 1);
        assert_eq!(q.deadline(TimerKind::AutoplayResume), Some(t0 + ms(2500)));
    }

    #[test]
    fn pop_due_orders_by_deadline_then_kind() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule_repeating(TimerKind::AutoplayTick, t0, ms(100));
        q.schedule(TimerKind::TransitionEnd, t0, ms(100));
        q.schedule(TimerKind::AutoplayResume, t0, ms(50));

        assert_eq!(
            q.pop_due(t0 + ms(100)),
            Some((TimerKind::AutoplayResume, t0 + ms(50)))
        );
        assert_eq!(
            q.pop_due(t0 + ms(100)),
            Some((TimerKind::TransitionEnd, t0 + ms(100)))
        );
        assert_eq!(
            q.pop_due(t0 + ms(100)),
            Some((TimerKind::AutoplayTick, t0 + ms(100)))
        );
        assert_eq!(q.pop_due(t0 + ms(100)), None);
        // The repeating tick stays armed.
        assert_eq!(q.deadline(TimerKind::AutoplayTick), Some(t0 + ms(200)));
    }

    #[test]
    fn repeating_timer_catches_up_tick_by_tick() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule_repeating(TimerKind::AutoplayTick, t0, ms(10));
        let mut fired = 0;
        while q.pop_due(t0 + ms(35)).is_some() {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }

    #[test]
    fn clear_drops_everything() {
        let t0 = Instant::now();
        let mut q = TimerQueue::new();
        q.schedule(TimerKind::TransitionEnd, t0, ms(1));
        q.schedule_repeating(TimerKind::AutoplayTick, t0, ms(1));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.next_deadline(), None);
    }
}
