//! Teller Simulator Core - Rust Engine
//!
//! Discrete-event simulation of customers arriving at a bank, queueing
//! when no teller is free, and being served by one of a fixed number of
//! tellers. Given an arrival dataset and a teller count it computes
//! per-teller cumulative busy time, from which a caller derives
//! wait-time/utilization trade-offs for staffing decisions.
//!
//! # Architecture
//!
//! - **core**: Time and teller-index primitives
//! - **models**: Domain types (events, event queue, waiting line,
//!   teller state machine, trace log)
//! - **orchestrator**: Main event loop and results aggregation
//!
//! # Critical Invariants
//!
//! 1. Simulated time advances only by event causality, never by ticking
//! 2. Every run is deterministic: same input + teller count → same
//!    result and same trace (same-time events resolve in insertion order)
//! 3. Event queue and waiting line are empty between runs

// Module declarations
pub mod core;
pub mod models;
pub mod orchestrator;

// Re-exports for convenience
pub use crate::core::time::{TellerIndex, Time};
pub use crate::models::{
    event::{ArrivalEvent, Customer, DepartureEvent, Event, SimulationInput},
    line::WaitingLine,
    queue::EventQueue,
    teller::Teller,
    trace::{TraceEntry, TraceLog},
};
pub use crate::orchestrator::{
    SimulationError, SimulationResults, Simulator, MAX_TELLERS, MIN_TELLERS,
};
