//! One-shot cooperative timers.
//!
//! Every timed behavior in the crate (autoplay, momentum chains, text
//! rotation, hover lingers) runs through a [`TimerQueue`] owned by the state
//! that needs it. The queue never reads the clock: callers inject `now` into
//! both scheduling and firing, which makes all timing deterministic under
//! test and keeps the whole crate single-threaded.

use std::time::{Duration, Instant};

/// Identifies one scheduled timer so it can be cancelled later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct TimerEntry<E> {
    id: u64,
    deadline: Instant,
    event: E,
}

/// A queue of pending one-shot timers carrying events of type `E`.
///
/// Firing drains every entry whose deadline has passed, in deadline order
/// with scheduling order breaking ties. A cancelled entry never fires, no
/// matter how overdue it is; there is no "already queued" window because
/// nothing fires outside an explicit [`fire_due`](Self::fire_due) call.
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: Vec<TimerEntry<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `event` to fire once `delay` has elapsed past `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            deadline: now + delay,
            event,
        });
        TimerHandle(id)
    }

    /// Drop the entry behind `handle`. Returns false when it already fired
    /// or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != handle.0);
        self.entries.len() != before
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remove and return the events of all entries due at `now`, ordered by
    /// deadline then by scheduling order.
    pub fn fire_due(&mut self, now: Instant) -> Vec<E> {
        if self.entries.iter().all(|entry| entry.deadline > now) {
            return Vec::new();
        }
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.deadline, entry.id));
        due.into_iter().map(|entry| entry.event).collect()
    }

    /// Earliest pending deadline, if any. Hosts use this to pick how long to
    /// sleep between ticks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
