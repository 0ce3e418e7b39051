//! Timer plumbing for the popup controller.
//!
//! The controller never sleeps; it asks a [`TimerHost`] to call it back via
//! `on_timer(token)` after a delay. Tokens carry a generation so a callback
//! that races a cancellation (or a teardown) is recognised as stale.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Grace,
    Animation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

pub trait TimerHost {
    /// Arrange for the owner's `on_timer(token)` to run after `delay`.
    fn schedule(&mut self, token: TimerToken, delay: Duration);
    /// Drop a pending timer. Unknown or already-fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

/// Deterministic in-memory timers driven by [`ManualTimers::advance`].
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    pending: Vec<(Duration, TimerToken)>,
    scheduled_total: usize,
    cancelled_total: usize,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_kinds(&self) -> Vec<TimerKind> {
        self.pending.iter().map(|(_, t)| t.kind).collect()
    }

    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    pub fn cancelled_total(&self) -> usize {
        self.cancelled_total
    }

    /// Move time forward and return every token that came due, in deadline order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerToken> {
        self.now += by;
        let now = self.now;
        let mut due: Vec<(Duration, TimerToken)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.0 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, t)| t).collect()
    }
}

impl TimerHost for ManualTimers {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.scheduled_total += 1;
        self.pending.push((self.now + delay, token));
    }

    fn cancel(&mut self, token: TimerToken) {
        let before = self.pending.len();
        self.pending.retain(|(_, t)| *t != token);
        if self.pending.len() != before {
            self.cancelled_total += 1;
        }
    }
}
