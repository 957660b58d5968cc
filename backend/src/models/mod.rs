//! Domain models for the teller simulator

pub mod event;
pub mod line;
pub mod queue;
pub mod teller;
pub mod trace;

// Re-exports
pub use event::{ArrivalEvent, Customer, DepartureEvent, Event, SimulationInput};
pub use line::WaitingLine;
pub use queue::EventQueue;
pub use teller::Teller;
pub use trace::{TraceEntry, TraceLog};
