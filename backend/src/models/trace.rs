//! Trace log for run replay and auditing.
//!
//! The simulator records every state change it makes while processing
//! events. The trace enables:
//! - Deterministic replay audits (same input, same trace)
//! - Debugging (what happened and when)
//! - Derived checks (e.g. reconstructing per-teller busy intervals to
//!   verify they never overlap)
//!
//! # Entry Types
//!
//! - **ServiceStarted**: an arriving customer found a free teller
//! - **CustomerQueued**: all tellers were busy, customer joined the line
//! - **ServiceCompleted**: a teller finished its current customer
//! - **NextCustomerServed**: a freed teller immediately took the next
//!   customer from the line (intervals abut, zero idle gap)

use crate::core::time::{TellerIndex, Time};
use serde::{Deserialize, Serialize};

/// One state change made by the simulator during a run.
///
/// All entries carry the simulated time at which they occurred; entries
/// are logged in processing order within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEntry {
    /// Arriving customer was taken by a free teller immediately
    ServiceStarted {
        time: Time,
        teller: TellerIndex,
        transaction_time: Time,
    },

    /// All tellers busy; customer joined the back of the line
    CustomerQueued { time: Time, transaction_time: Time },

    /// Teller finished its current customer
    ServiceCompleted { time: Time, teller: TellerIndex },

    /// Freed teller immediately took the next customer off the line
    NextCustomerServed {
        time: Time,
        teller: TellerIndex,
        transaction_time: Time,
    },
}

impl TraceEntry {
    /// Get the simulated time at which this entry occurred
    pub fn time(&self) -> Time {
        match self {
            TraceEntry::ServiceStarted { time, .. } => *time,
            TraceEntry::CustomerQueued { time, .. } => *time,
            TraceEntry::ServiceCompleted { time, .. } => *time,
            TraceEntry::NextCustomerServed { time, .. } => *time,
        }
    }

    /// Get a short description of the entry type
    pub fn entry_type(&self) -> &'static str {
        match self {
            TraceEntry::ServiceStarted { .. } => "ServiceStarted",
            TraceEntry::CustomerQueued { .. } => "CustomerQueued",
            TraceEntry::ServiceCompleted { .. } => "ServiceCompleted",
            TraceEntry::NextCustomerServed { .. } => "NextCustomerServed",
        }
    }

    /// Get the teller index if the entry concerns a specific teller
    pub fn teller(&self) -> Option<TellerIndex> {
        match self {
            TraceEntry::ServiceStarted { teller, .. } => Some(*teller),
            TraceEntry::ServiceCompleted { teller, .. } => Some(*teller),
            TraceEntry::NextCustomerServed { teller, .. } => Some(*teller),
            TraceEntry::CustomerQueued { .. } => None,
        }
    }
}

/// Trace log for storing and querying entries from one run.
///
/// A simple wrapper around `Vec<TraceEntry>` with convenience queries.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    entries: Vec<TraceEntry>,
}

impl TraceLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn log(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    /// Number of entries logged
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in processing order
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Entries that occurred at a specific simulated time
    pub fn entries_at_time(&self, time: Time) -> Vec<&TraceEntry> {
        self.entries.iter().filter(|e| e.time() == time).collect()
    }

    /// Entries of a specific type
    pub fn entries_of_type(&self, entry_type: &str) -> Vec<&TraceEntry> {
        self.entries
            .iter()
            .filter(|e| e.entry_type() == entry_type)
            .collect()
    }

    /// Entries concerning a specific teller
    pub fn entries_for_teller(&self, teller: TellerIndex) -> Vec<&TraceEntry> {
        self.entries
            .iter()
            .filter(|e| e.teller() == Some(teller))
            .collect()
    }

    /// Serialize the full log to JSON, for export or replay tooling
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
