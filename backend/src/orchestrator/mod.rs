//! Orchestrator - the simulation event loop
//!
//! Owns the event queue, waiting line and teller collection, and drives
//! simulated time forward purely by event causality.
//!
//! See `engine.rs` for the full implementation.

pub mod engine;

// Re-export main types for convenience
pub use engine::{SimulationError, SimulationResults, Simulator, MAX_TELLERS, MIN_TELLERS};
