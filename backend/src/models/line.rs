//! The bank's waiting line
//!
//! A single strict-FIFO line that every teller draws from. Customers
//! enter at the back when all tellers are busy and leave from the front
//! when a teller frees up. The line is never reordered and never
//! inspected at arbitrary positions.

use crate::models::event::Customer;
use std::collections::VecDeque;

/// FIFO queue of customers waiting for a free teller.
///
/// Empty at the start and end of every well-formed run; only the
/// simulator observes it mid-run.
#[derive(Debug, Clone, Default)]
pub struct WaitingLine {
    customers: VecDeque<Customer>,
}

impl WaitingLine {
    /// Create an empty line
    pub fn new() -> Self {
        Self {
            customers: VecDeque::new(),
        }
    }

    /// Add a customer to the back of the line
    pub fn push(&mut self, customer: Customer) {
        self.customers.push_back(customer);
    }

    /// Take the customer at the front of the line
    pub fn pop(&mut self) -> Option<Customer> {
        self.customers.pop_front()
    }

    /// Check whether anyone is waiting
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Number of customers currently waiting
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Remove everyone from the line
    pub fn clear(&mut self) {
        self.customers.clear();
    }
}
