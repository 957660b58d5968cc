//! Pending simulation events
//!
//! The event loop is driven entirely by two kinds of events:
//! - **Arrival**: a customer enters the bank, carrying the service
//!   duration they will need once a teller takes them.
//! - **Departure**: a teller finishes its current customer at a known
//!   future time.
//!
//! Both are closed over a single tagged union, [`Event`], whose derived
//! `time()` is the only key the event queue orders by.
//!
//! # Example
//!
//! ```rust
//! use teller_simulator_core_rs::models::event::{ArrivalEvent, Event};
//!
//! let arrival = ArrivalEvent {
//!     arrival_time: 20,
//!     transaction_time: 6,
//! };
//!
//! let event = Event::Arrival(arrival);
//! assert_eq!(event.time(), 20);
//! assert_eq!(event.event_type(), "Arrival");
//! ```

use crate::core::time::{TellerIndex, Time};
use serde::{Deserialize, Serialize};

/// A customer entering the bank.
///
/// Immutable value supplied by the caller; the simulator never mutates
/// it. `transaction_time` is how long the customer will occupy a teller
/// once service starts, not counting any time spent waiting in line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalEvent {
    /// Simulated time at which the customer enters the bank
    pub arrival_time: Time,

    /// Service duration once a teller takes this customer
    pub transaction_time: Time,
}

/// A customer waiting in the bank line.
///
/// Thin wrapper around the arrival that produced it; created only when
/// an arrival finds every teller busy, destroyed when a freed teller
/// takes the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    arrival: ArrivalEvent,
}

impl Customer {
    /// Wrap an arrival whose customer must wait in line
    pub fn new(arrival: ArrivalEvent) -> Self {
        Self { arrival }
    }

    /// The arrival that put this customer in the system
    pub fn arrival(&self) -> &ArrivalEvent {
        &self.arrival
    }
}

/// A teller finishing service at a known future time.
///
/// Created whenever a teller starts serving a customer; consumed
/// exactly once by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureEvent {
    /// Simulated time at which the teller finishes the current customer
    pub departure_time: Time,

    /// Which teller frees up
    pub teller: TellerIndex,
}

/// Either an arrival or a departure.
///
/// Closed two-variant union; the queue orders solely by [`Event::time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A customer enters the bank
    Arrival(ArrivalEvent),

    /// A teller finishes its current customer
    Departure(DepartureEvent),
}

impl Event {
    /// Get the simulated time at which this event fires
    pub fn time(&self) -> Time {
        match self {
            Event::Arrival(arrival) => arrival.arrival_time,
            Event::Departure(departure) => departure.departure_time,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival(_) => "Arrival",
            Event::Departure(_) => "Departure",
        }
    }
}

/// The fixed arrival dataset a simulator is constructed with.
///
/// Immutable for the simulator's lifetime; reseeds the event queue at
/// the start of every run. Order does not matter for correctness (the
/// queue orders by time) but it does pin down the documented tie-break
/// for same-time events.
pub type SimulationInput = Vec<ArrivalEvent>;
