//! One-shot delayed work for the host's cooperative frame loop.
//!
//! The core never blocks: hosts advance a [`Scheduler`] with wall-clock deltas and
//! dispatch whatever payloads come due. A timer cancelled before its due time is
//! never delivered, which is how teardown keeps stale callbacks from firing on
//! unmounted targets.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::foundation::error::{GlimmerError, GlimmerResult};

/// Identifier for a scheduled timer. Unique per [`Scheduler`] instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Clone, Copy, Debug)]
struct Entry {
    due_secs: f64,
    id: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.due_secs.total_cmp(&other.due_secs).is_eq()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Determinism rule: earlier due time first; ties broken by smaller id.
        self.due_secs
            .total_cmp(&other.due_secs)
            .then(self.id.cmp(&other.id))
    }
}

/// Single-threaded one-shot timer queue.
///
/// Payloads are opaque to the scheduler; hosts decide what a fired timer means.
#[derive(Debug)]
pub struct Scheduler<T> {
    now_secs: f64,
    next_id: u64,
    heap: BinaryHeap<Reverse<Entry>>,
    payloads: HashMap<u64, T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_secs: 0.0,
            next_id: 0,
            heap: BinaryHeap::new(),
            payloads: HashMap::new(),
        }
    }

    /// Current scheduler time in seconds.
    pub fn now_secs(&self) -> f64 {
        self.now_secs
    }

    /// Number of timers that are scheduled and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.payloads.len()
    }

    /// Schedule `payload` to fire `delay_secs` from now. Negative delays clamp to
    /// zero (due on the next `advance`); non-finite delays are rejected.
    pub fn schedule_after(&mut self, delay_secs: f64, payload: T) -> GlimmerResult<TimerId> {
        if !delay_secs.is_finite() {
            return Err(GlimmerError::validation("timer delay must be finite"));
        }
        let id = self.next_id;
        self.next_id += 1;

        self.heap.push(Reverse(Entry {
            due_secs: self.now_secs + delay_secs.max(0.0),
            id,
        }));
        let prev = self.payloads.insert(id, payload);
        debug_assert!(prev.is_none());
        Ok(TimerId(id))
    }

    /// Cancel a pending timer. Returns `true` if it had not yet fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        // Heap entries are removed lazily on pop.
        self.payloads.remove(&id.0).is_some()
    }

    /// Advance time by `dt_secs` and collect every timer that came due, in
    /// (due-time, id) order. Cancelled timers are skipped.
    pub fn advance(&mut self, dt_secs: f64) -> Vec<(TimerId, T)> {
        if dt_secs.is_finite() && dt_secs > 0.0 {
            self.now_secs += dt_secs;
        }

        let mut fired = Vec::new();
        while let Some(&Reverse(entry)) = self.heap.peek() {
            if entry.due_secs > self.now_secs {
                break;
            }
            let Reverse(entry) = self.heap.pop().unwrap_or(Reverse(entry));
            if let Some(payload) = self.payloads.remove(&entry.id) {
                fired.push((TimerId(entry.id), payload));
            }
        }
        fired
    }
}
