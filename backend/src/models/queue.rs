//! Time-ordered event queue
//!
//! A min-heap over pending [`Event`]s: extraction order is ascending
//! event time regardless of insertion order. `std::collections::BinaryHeap`
//! is a max-heap, so the internal ordering is reversed.
//!
//! # Tie-breaking
//!
//! Event time alone is not a total order over a run: a departure can
//! fire at the same instant as an arrival, or two tellers can free up
//! simultaneously. Ties are broken by **insertion order** (FIFO among
//! equal times) via a monotonically increasing sequence number. This
//! makes every run fully deterministic: arrivals seeded before the run
//! started are processed before any departure scheduled at the same
//! time, and same-time departures fire in the order they were created.

use crate::models::event::Event;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An event tagged with its queue insertion sequence number.
///
/// Ordering key is `(time, seq)` ascending, reversed so the max-heap
/// yields the earliest event first.
#[derive(Debug, Clone)]
struct ScheduledEvent {
    seq: u64,
    event: Event,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.event.time() == other.event.time() && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time()
            .cmp(&other.event.time())
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

/// Priority queue of pending events, earliest time first.
///
/// # Example
///
/// ```rust
/// use teller_simulator_core_rs::models::event::{ArrivalEvent, Event};
/// use teller_simulator_core_rs::models::queue::EventQueue;
///
/// let mut queue = EventQueue::new();
/// queue.push(Event::Arrival(ArrivalEvent { arrival_time: 30, transaction_time: 3 }));
/// queue.push(Event::Arrival(ArrivalEvent { arrival_time: 20, transaction_time: 6 }));
///
/// assert_eq!(queue.pop().unwrap().time(), 20);
/// assert_eq!(queue.pop().unwrap().time(), 30);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<ScheduledEvent>,
    next_seq: u64,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule an event; insertion order is remembered for tie-breaking
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(ScheduledEvent { seq, event });
    }

    /// Remove and return the earliest pending event
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|scheduled| scheduled.event)
    }

    /// Check whether any events are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop all pending events and reset the tie-break sequence
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
