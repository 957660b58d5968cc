//! Time primitives for the simulation
//!
//! The simulation is event-driven: the clock never ticks on its own,
//! it jumps to the timestamp of the next pending event. A single
//! integer type represents both clock readings and durations, since
//! every duration in the system is the difference of two clock values.

/// Simulated time, in integer units.
///
/// Used for both absolute clock values (when an event fires) and
/// durations (how long a transaction takes). Ordinary scenarios fit
/// comfortably within `i64`; no wraparound handling is needed.
pub type Time = i64;

/// Index of a teller slot within the simulator's teller collection.
///
/// Departure events carry this index to identify which teller frees up.
pub type TellerIndex = usize;
