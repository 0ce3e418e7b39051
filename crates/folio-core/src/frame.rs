//! Per-refresh frame clock.
//!
//! The host calls [`FrameClock::tick`] once per display refresh; subscribers
//! run in subscription order so a single tick always sees a consistent order
//! of updates.

use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct Tick {
    pub index: u64,
    pub now: Instant,
    pub dt: Duration,
}

impl Tick {
    pub fn dt_sec(&self) -> f32 {
        self.dt.as_secs_f32()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Tick)>;

#[derive(Default)]
pub struct FrameClock {
    index: u64,
    last: Option<Instant>,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&Tick) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Advance the clock and notify every subscriber.
    ///
    /// `dt` is zero on the first tick and saturates to zero if the host hands
    /// us a timestamp older than the previous one.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let dt = match self.last {
            Some(prev) if now > prev => now - prev,
            _ => Duration::ZERO,
        };
        if self.last.map_or(true, |prev| now > prev) {
            self.last = Some(now);
        }
        let tick = Tick {
            index: self.index,
            now,
            dt,
        };
        self.index += 1;
        for (_, sub) in self.subscribers.iter_mut() {
            sub(&tick);
        }
        tick
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

/// What the host must release when its frame loop stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopAction {
    /// The loop was not running.
    None,
    /// Cancel the pending frame and release subscribers and callback now.
    ReleaseNow,
    /// A tick is on the stack; release once it returns.
    ReleaseAfterTick,
}

/// Outcome of [`LoopControl::end_tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEnd {
    /// Request the next frame.
    Continue,
    /// The loop was stopped during this tick; release subscribers and callback.
    Release,
    /// Stopped and already released; do nothing.
    Idle,
}

/// Run/stop bookkeeping for a host frame loop. A stop requested from inside a
/// subscriber is deferred until the tick returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopControl {
    running: bool,
    in_tick: bool,
    release_pending: bool,
}

impl LoopControl {
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn in_tick(&self) -> bool {
        self.in_tick
    }

    /// `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.release_pending = false;
        true
    }

    /// `false` if the loop is stopped and the frame should be skipped.
    pub fn begin_tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.in_tick = true;
        true
    }

    pub fn end_tick(&mut self) -> TickEnd {
        self.in_tick = false;
        if std::mem::take(&mut self.release_pending) {
            TickEnd::Release
        } else if self.running {
            TickEnd::Continue
        } else {
            TickEnd::Idle
        }
    }

    pub fn stop(&mut self) -> StopAction {
        if !self.running {
            return StopAction::None;
        }
        self.running = false;
        if self.in_tick {
            self.release_pending = true;
            StopAction::ReleaseAfterTick
        } else {
            StopAction::ReleaseNow
        }
    }
}
