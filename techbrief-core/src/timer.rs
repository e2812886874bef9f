//! Cancellable one-shot timers driven by the UI event loop.
//!
//! Nothing runs on its own: the owner calls `drain_due(now)` on every tick
//! and dispatches the returned events. Cancelling a handle guarantees its
//! event is never returned.

use std::time::Instant;

/// Identifies one scheduled event. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    handle: TimerHandle,
    at: Instant,
    event: E,
}

/// Deadline-ordered queue of pending events.
#[derive(Debug)]
pub struct TimerQueue<E> {
    pending: Vec<Pending<E>>,
    next_id: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire once `now >= at`.
    pub fn schedule(&mut self, at: Instant, event: E) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        // Keep sorted by deadline; equal deadlines fire in schedule order.
        let idx = self.pending.partition_point(|p| p.at <= at);
        self.pending.insert(idx, Pending { handle, at, event });
        handle
    }

    /// Cancel a pending event. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.pending.iter().position(|p| p.handle == handle) {
            Some(idx) => {
                self.pending.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove and return every event due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Instant) -> Vec<E> {
        let due = self.pending.partition_point(|p| p.at <= now);
        self.pending.drain(..due).map(|p| p.event).collect()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|p| p.at)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
