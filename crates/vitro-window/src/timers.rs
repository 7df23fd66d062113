//! Window timers
//!
//! setTimeout/setInterval on a manual millisecond clock. Nothing here
//! spawns a thread or suspends: the host calls [`Timers::advance`]
//! and due callbacks run synchronously in fire-time order, FIFO at
//! equal deadlines.

use tracing::debug;

/// Timer handle returned by setTimeout/setInterval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

struct Timer {
    id: TimerId,
    deadline: u64,
    /// Re-arm period for intervals
    period: Option<u64>,
    /// Scheduling order, breaks deadline ties
    seq: u64,
    callback: Box<dyn FnMut()>,
}

/// Timer scheduler with a manual clock
#[derive(Default)]
pub struct Timers {
    now: u64,
    next_id: u32,
    next_seq: u64,
    pending: Vec<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current manual-clock time in milliseconds
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of scheduled timers
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Schedule a one-shot callback
    pub fn set_timeout(&mut self, callback: impl FnMut() + 'static, delay_ms: u64) -> TimerId {
        self.schedule(Box::new(callback), delay_ms, None)
    }

    /// Schedule a repeating callback
    pub fn set_interval(&mut self, callback: impl FnMut() + 'static, period_ms: u64) -> TimerId {
        // zero-period intervals still make forward progress
        self.schedule(Box::new(callback), period_ms, Some(period_ms.max(1)))
    }

    fn schedule(&mut self, callback: Box<dyn FnMut()>, delay_ms: u64, period: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer {
            id,
            deadline: self.now + delay_ms,
            period,
            seq,
            callback,
        });
        debug!(id = id.0, delay_ms, interval = period.is_some(), "timer scheduled");
        id
    }

    /// Cancel a timer; unknown ids are logged no-ops, browser-style
    pub fn clear_timeout(&mut self, id: TimerId) {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        if self.pending.len() == before {
            debug!(id = id.0, "clearTimeout for unknown id");
        }
    }

    /// Cancel an interval (same id space as timeouts)
    pub fn clear_interval(&mut self, id: TimerId) {
        self.clear_timeout(id);
    }

    /// Advance the clock by `ms`, running every callback whose
    /// deadline falls inside the window. Returns the number of
    /// callbacks fired.
    pub fn advance(&mut self, ms: u64) -> usize {
        let target = self.now + ms;
        let mut fired = 0;

        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, t)| t.deadline <= target)
                .min_by_key(|(_, t)| (t.deadline, t.seq))
                .map(|(i, _)| i);
            let Some(index) = next else { break };

            let mut timer = self.pending.remove(index);
            self.now = self.now.max(timer.deadline);
            (timer.callback)();
            fired += 1;

            if let Some(period) = timer.period {
                timer.deadline += period;
                timer.seq = self.next_seq;
                self.next_seq += 1;
                self.pending.push(timer);
            }
        }

        self.now = target;
        fired
    }
}
