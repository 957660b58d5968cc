//! Core primitives: simulation time and teller indexing

pub mod time;
