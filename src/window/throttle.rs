use std::time::{Duration, Instant};

/// Trailing-edge rate limiter with a single pending slot.
///
/// The host calls `trigger` for every incoming event and runs whatever it
/// returns. Events that arrive too early are parked; a newer early event
/// replaces the parked one. The host arms a timer for `next_deadline` and
/// calls `poll` when it fires. Time is always passed in, never read.
#[derive(Debug)]
pub struct CoalescingThrottle<E> {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<E>,
}

impl<E> CoalescingThrottle<E> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn trigger(&mut self, event: E, now: Instant) -> Option<E> {
        if self.is_due(now) {
            self.pending = None;
            self.last_run = Some(now);
            return Some(event);
        }

        self.pending = Some(event);
        None
    }

    pub fn poll(&mut self, now: Instant) -> Option<E> {
        if self.pending.is_none() || !self.is_due(now) {
            return None;
        }
        self.last_run = Some(now);
        self.pending.take()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_run.map(|last| last + self.interval)
    }

    /// Hands out the parked event regardless of the deadline.
    pub fn take_pending(&mut self) -> Option<E> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_due(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}
