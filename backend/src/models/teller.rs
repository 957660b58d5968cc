//! Teller state machine
//!
//! Each teller is either idle or busy since some instant, and carries
//! the total busy time accumulated over completed service intervals.
//! The busy/idle distinction is modelled as `Option<Time>`, never a
//! sentinel time value: `Some(t)` iff the teller is currently serving a
//! customer who started at `t`.
//!
//! # Critical Invariants
//!
//! 1. `start_work` is only called on an idle teller
//! 2. `stop_work` is only called on a busy teller, at a time no earlier
//!    than the matching `start_work`
//!
//! Violations are engine bugs, not recoverable input: they panic
//! instead of returning an error, so they can never be silently
//! misread as a valid result.

use crate::core::time::Time;
use serde::{Deserialize, Serialize};

/// Per-teller simulation state: availability plus accumulated busy time.
///
/// # Example
///
/// ```rust
/// use teller_simulator_core_rs::Teller;
///
/// let mut teller = Teller::new();
/// assert!(teller.is_available());
///
/// teller.start_work(20);
/// assert!(!teller.is_available());
///
/// teller.stop_work(26);
/// assert!(teller.is_available());
/// assert_eq!(teller.elapsed_time_working(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teller {
    /// When the current service interval started; `None` while idle
    busy_since: Option<Time>,

    /// Total busy time over completed service intervals
    accumulated_busy_time: Time,
}

impl Teller {
    /// Create a fresh idle teller with zero accumulated busy time
    pub fn new() -> Self {
        Self {
            busy_since: None,
            accumulated_busy_time: 0,
        }
    }

    /// Check whether the teller is free to take a customer
    pub fn is_available(&self) -> bool {
        self.busy_since.is_none()
    }

    /// Begin serving a customer at `current_time`.
    ///
    /// # Panics
    ///
    /// Panics if the teller is already busy.
    pub fn start_work(&mut self, current_time: Time) {
        assert!(
            self.busy_since.is_none(),
            "start_work called on a teller already busy since {:?}",
            self.busy_since
        );
        self.busy_since = Some(current_time);
    }

    /// Finish serving the current customer at `current_time`, folding
    /// the completed interval into the accumulated busy time.
    ///
    /// # Panics
    ///
    /// Panics if the teller is idle, or if `current_time` precedes the
    /// start of the interval.
    pub fn stop_work(&mut self, current_time: Time) {
        let started = match self.busy_since.take() {
            Some(started) => started,
            None => panic!("stop_work called on an idle teller"),
        };
        assert!(
            current_time >= started,
            "stop_work at {} precedes start_work at {}",
            current_time,
            started
        );
        self.accumulated_busy_time += current_time - started;
    }

    /// Total busy time over completed intervals.
    ///
    /// Valid in any state; an in-progress interval is not counted until
    /// `stop_work` closes it.
    pub fn elapsed_time_working(&self) -> Time {
        self.accumulated_busy_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_teller_is_idle() {
        let teller = Teller::new();
        assert!(teller.is_available());
        assert_eq!(teller.elapsed_time_working(), 0);
    }

    #[test]
    fn test_busy_time_accumulates_across_intervals() {
        let mut teller = Teller::new();

        teller.start_work(20);
        teller.stop_work(26);
        assert_eq!(teller.elapsed_time_working(), 6);

        teller.start_work(30);
        teller.stop_work(33);
        assert_eq!(teller.elapsed_time_working(), 9);
    }

    #[test]
    fn test_in_progress_interval_not_counted() {
        let mut teller = Teller::new();
        teller.start_work(10);
        assert_eq!(teller.elapsed_time_working(), 0);
    }

    #[test]
    fn test_zero_length_interval() {
        let mut teller = Teller::new();
        teller.start_work(5);
        teller.stop_work(5);
        assert!(teller.is_available());
        assert_eq!(teller.elapsed_time_working(), 0);
    }

    #[test]
    #[should_panic(expected = "start_work called on a teller already busy")]
    fn test_start_while_busy_panics() {
        let mut teller = Teller::new();
        teller.start_work(1);
        teller.start_work(2);
    }

    #[test]
    #[should_panic(expected = "stop_work called on an idle teller")]
    fn test_stop_while_idle_panics() {
        let mut teller = Teller::new();
        teller.stop_work(1);
    }

    #[test]
    #[should_panic(expected = "precedes start_work")]
    fn test_stop_before_start_panics() {
        let mut teller = Teller::new();
        teller.start_work(10);
        teller.stop_work(9);
    }
}
