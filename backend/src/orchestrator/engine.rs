//! Simulator engine
//!
//! Main event loop integrating all components:
//! - Event queue seeding from the fixed arrival dataset
//! - Arrival dispatch (first available teller, ascending index)
//! - Departure handling (line hand-off with zero idle gap)
//! - Trace logging (complete run history)
//! - Results aggregation (per-teller busy times)
//!
//! # Architecture
//!
//! Each run executes three phases, fully sequentially:
//!
//! ```text
//! 1. setup_run(teller_count)
//!    - validate teller count against [MIN_TELLERS, MAX_TELLERS]
//!    - reset tellers, clear trace, reseed event queue from the input
//! 2. event loop
//!    - pop the earliest event, dispatch to the arrival or departure
//!      handler, until the queue empties
//! 3. gather_results()
//!    - snapshot every teller's accumulated busy time
//! ```
//!
//! Simulated time never ticks on its own; it is always the timestamp of
//! the event being processed. Termination is guaranteed because each
//! processed event schedules at most one successor, and successors are
//! only ever departures for customers taken off the line or served on
//! arrival.
//!
//! # Example
//!
//! ```rust
//! use teller_simulator_core_rs::{ArrivalEvent, Simulator};
//!
//! let input = vec![
//!     ArrivalEvent { arrival_time: 20, transaction_time: 6 },
//!     ArrivalEvent { arrival_time: 22, transaction_time: 4 },
//! ];
//!
//! let mut simulator = Simulator::new(input);
//! let busiest = simulator.max_teller_busy_time(1).unwrap();
//! assert_eq!(busiest, 10);
//! ```

use crate::core::time::{TellerIndex, Time};
use crate::models::event::{ArrivalEvent, Customer, DepartureEvent, Event, SimulationInput};
use crate::models::line::WaitingLine;
use crate::models::queue::EventQueue;
use crate::models::teller::Teller;
use crate::models::trace::{TraceEntry, TraceLog};
use serde::Serialize;
use thiserror::Error;

/// Minimum number of tellers a run may be configured with
pub const MIN_TELLERS: usize = 1;

/// Maximum number of tellers a run may be configured with
pub const MAX_TELLERS: usize = 5;

/// Errors that can occur when requesting a run
///
/// Both variants are caller-facing and recoverable: retry with a valid
/// teller count. Internal invariant violations are panics, not errors
/// (see the module docs of `models::teller`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    #[error("invalid teller count {requested}: must be at least {min}")]
    TellerCountTooLow { requested: usize, min: usize },

    #[error("invalid teller count {requested}: must be at most {max}")]
    TellerCountTooHigh { requested: usize, max: usize },
}

/// Read-only snapshot of one completed run.
///
/// Busy times are indexed identically to the teller collection that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationResults {
    busy_times: Vec<Time>,
}

impl SimulationResults {
    fn new(busy_times: Vec<Time>) -> Self {
        Self { busy_times }
    }

    /// Accumulated busy time per teller, in teller index order
    pub fn busy_times(&self) -> &[Time] {
        &self.busy_times
    }

    /// Number of tellers the run was configured with
    pub fn num_tellers(&self) -> usize {
        self.busy_times.len()
    }

    /// Busy time of the busiest teller.
    ///
    /// # Panics
    ///
    /// Panics if the snapshot covers zero tellers; teller count
    /// validation makes that unreachable for results produced by a run.
    pub fn max_teller_busy_time(&self) -> Time {
        assert!(
            !self.busy_times.is_empty(),
            "results must cover at least one teller"
        );
        self.busy_times.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tellers' busy times.
    ///
    /// Equals the sum of all customers' transaction times after a
    /// completed run: no service time is created or lost.
    pub fn total_busy_time(&self) -> Time {
        self.busy_times.iter().sum()
    }
}

/// The discrete-event simulator for one bank branch.
///
/// Exclusively owns all mutable run state (event queue, waiting line,
/// tellers, trace log). The arrival dataset is immutable for the
/// simulator's lifetime and reseeds the queue at the start of every
/// run, so runs for different teller counts are fully independent and
/// re-running the same count is idempotent.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Fixed arrival dataset, reused to seed every run
    input: SimulationInput,

    /// Pending events, ordered by time (insertion order among ties)
    event_queue: EventQueue,

    /// The single FIFO line all tellers draw from
    waiting_line: WaitingLine,

    /// One state machine per configured teller slot
    tellers: Vec<Teller>,

    /// Complete history of the most recent run
    trace: TraceLog,
}

impl Simulator {
    /// Create a simulator over a fixed arrival dataset.
    ///
    /// The dataset does not need to be sorted; the event queue orders
    /// by time. Its order still matters for tie-breaking: arrivals are
    /// seeded in dataset order, and same-time events are processed in
    /// insertion order.
    pub fn new(input: SimulationInput) -> Self {
        Self {
            input,
            event_queue: EventQueue::new(),
            waiting_line: WaitingLine::new(),
            tellers: Vec::new(),
            trace: TraceLog::new(),
        }
    }

    /// The arrival dataset this simulator was constructed with
    pub fn input(&self) -> &[ArrivalEvent] {
        &self.input
    }

    /// Trace of the most recently completed run
    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    /// Run the simulation with `teller_count` tellers and return the
    /// per-teller busy time snapshot.
    pub fn run(&mut self, teller_count: usize) -> Result<SimulationResults, SimulationError> {
        self.setup_run(teller_count)?;

        while let Some(event) = self.event_queue.pop() {
            let current_time = event.time();
            match event {
                Event::Arrival(arrival) => self.process_arrival(current_time, arrival),
                Event::Departure(departure) => self.process_departure(current_time, departure),
            }
        }

        Ok(self.gather_results())
    }

    /// Run the simulation and reduce to the busiest teller's time.
    ///
    /// This is the headline staffing metric: how much cumulative work
    /// the single busiest teller absorbs for a given teller count.
    pub fn max_teller_busy_time(&mut self, teller_count: usize) -> Result<Time, SimulationError> {
        Ok(self.run(teller_count)?.max_teller_busy_time())
    }

    /// Validate the teller count and reset all mutable state for a run.
    fn setup_run(&mut self, teller_count: usize) -> Result<(), SimulationError> {
        if teller_count < MIN_TELLERS {
            return Err(SimulationError::TellerCountTooLow {
                requested: teller_count,
                min: MIN_TELLERS,
            });
        }
        if teller_count > MAX_TELLERS {
            return Err(SimulationError::TellerCountTooHigh {
                requested: teller_count,
                max: MAX_TELLERS,
            });
        }

        // A completed run drains both structures; anything left over is
        // an engine bug, not user input.
        assert!(
            self.event_queue.is_empty(),
            "event queue must be empty between runs"
        );
        assert!(
            self.waiting_line.is_empty(),
            "waiting line must be empty between runs"
        );
        self.event_queue.clear();
        self.waiting_line.clear();
        self.trace.clear();

        self.reset_tellers(teller_count);

        for arrival in &self.input {
            self.event_queue.push(Event::Arrival(*arrival));
        }

        Ok(())
    }

    /// Replace the teller collection with `teller_count` fresh idle
    /// tellers, discarding any prior run's state.
    fn reset_tellers(&mut self, teller_count: usize) {
        self.tellers.clear();
        self.tellers.resize_with(teller_count, Teller::new);
    }

    /// Index of the first available teller, scanning in ascending
    /// index order.
    ///
    /// Ascending-index selection is a deterministic, reproducible
    /// tie-break among idle tellers, not load balancing.
    fn find_available_teller(&self) -> Option<TellerIndex> {
        self.tellers.iter().position(Teller::is_available)
    }

    /// Handle a customer entering the bank.
    ///
    /// A free teller starts serving immediately and a departure is
    /// scheduled for when the transaction completes; otherwise the
    /// customer joins the back of the line with no departure yet.
    fn process_arrival(&mut self, current_time: Time, arrival: ArrivalEvent) {
        match self.find_available_teller() {
            Some(teller) => {
                self.tellers[teller].start_work(current_time);
                self.event_queue.push(Event::Departure(DepartureEvent {
                    departure_time: current_time + arrival.transaction_time,
                    teller,
                }));
                self.trace.log(TraceEntry::ServiceStarted {
                    time: current_time,
                    teller,
                    transaction_time: arrival.transaction_time,
                });
            }
            None => {
                self.waiting_line.push(Customer::new(arrival));
                self.trace.log(TraceEntry::CustomerQueued {
                    time: current_time,
                    transaction_time: arrival.transaction_time,
                });
            }
        }
    }

    /// Handle a teller finishing its current customer.
    ///
    /// With an empty line the teller goes idle. Otherwise it hands off
    /// to the next customer with zero idle gap: the completed interval
    /// and the new one abut exactly at `current_time`.
    fn process_departure(&mut self, current_time: Time, departure: DepartureEvent) {
        let teller = departure.teller;

        match self.waiting_line.pop() {
            None => {
                self.tellers[teller].stop_work(current_time);
                self.trace.log(TraceEntry::ServiceCompleted {
                    time: current_time,
                    teller,
                });
            }
            Some(next_customer) => {
                let transaction_time = next_customer.arrival().transaction_time;
                self.tellers[teller].stop_work(current_time);
                self.tellers[teller].start_work(current_time);
                self.event_queue.push(Event::Departure(DepartureEvent {
                    departure_time: current_time + transaction_time,
                    teller,
                }));
                self.trace.log(TraceEntry::ServiceCompleted {
                    time: current_time,
                    teller,
                });
                self.trace.log(TraceEntry::NextCustomerServed {
                    time: current_time,
                    teller,
                    transaction_time,
                });
            }
        }
    }

    /// Snapshot every teller's accumulated busy time, in index order.
    fn gather_results(&self) -> SimulationResults {
        SimulationResults::new(
            self.tellers
                .iter()
                .map(Teller::elapsed_time_working)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(arrival_time: Time, transaction_time: Time) -> ArrivalEvent {
        ArrivalEvent {
            arrival_time,
            transaction_time,
        }
    }

    #[test]
    fn test_empty_input_yields_zero_busy_times() {
        let mut simulator = Simulator::new(vec![]);
        let results = simulator.run(3).unwrap();

        assert_eq!(results.busy_times(), &[0, 0, 0]);
        assert_eq!(results.max_teller_busy_time(), 0);
        assert!(simulator.trace().is_empty());
    }

    #[test]
    fn test_single_customer_single_teller() {
        let mut simulator = Simulator::new(vec![arrival(5, 7)]);
        let results = simulator.run(1).unwrap();

        assert_eq!(results.busy_times(), &[7]);
        assert_eq!(simulator.trace().len(), 2); // started + completed
    }

    #[test]
    fn test_unsorted_input_is_ordered_by_time() {
        let mut simulator = Simulator::new(vec![arrival(30, 3), arrival(20, 6)]);
        let results = simulator.run(1).unwrap();

        assert_eq!(results.total_busy_time(), 9);
        let first = simulator.trace().entries()[0];
        assert_eq!(first.time(), 20);
    }

    #[test]
    fn test_teller_count_too_low() {
        let mut simulator = Simulator::new(vec![arrival(0, 1)]);
        assert_eq!(
            simulator.run(0).unwrap_err(),
            SimulationError::TellerCountTooLow {
                requested: 0,
                min: MIN_TELLERS
            }
        );
    }

    #[test]
    fn test_teller_count_too_high() {
        let mut simulator = Simulator::new(vec![arrival(0, 1)]);
        assert_eq!(
            simulator.run(6).unwrap_err(),
            SimulationError::TellerCountTooHigh {
                requested: 6,
                max: MAX_TELLERS
            }
        );
    }

    #[test]
    fn test_rejected_run_leaves_simulator_usable() {
        let mut simulator = Simulator::new(vec![arrival(0, 4)]);
        assert!(simulator.run(6).is_err());

        let results = simulator.run(1).unwrap();
        assert_eq!(results.max_teller_busy_time(), 4);
    }

    #[test]
    fn test_handoff_has_zero_idle_gap() {
        // Second customer arrives mid-service and is handed off at the
        // exact departure instant: one teller, intervals 10..15, 15..18.
        let mut simulator = Simulator::new(vec![arrival(10, 5), arrival(12, 3)]);
        let results = simulator.run(1).unwrap();

        assert_eq!(results.busy_times(), &[8]);
        let handoffs = simulator.trace().entries_of_type("NextCustomerServed");
        assert_eq!(handoffs.len(), 1);
        assert_eq!(handoffs[0].time(), 15);
    }

    #[test]
    fn test_results_reductions() {
        let results = SimulationResults::new(vec![6, 4, 2]);
        assert_eq!(results.max_teller_busy_time(), 6);
        assert_eq!(results.total_busy_time(), 12);
        assert_eq!(results.num_tellers(), 3);
    }

    #[test]
    #[should_panic(expected = "results must cover at least one teller")]
    fn test_empty_results_panics_on_max() {
        SimulationResults::new(vec![]).max_teller_busy_time();
    }
}
