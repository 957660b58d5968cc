//! Command-line driver for the teller simulator.
//!
//! Runs the arrival dataset against every permitted teller count and
//! prints the busiest teller's cumulative busy time for each, so a
//! branch manager can weigh wait times against staffing costs.
//!
//! With no arguments the built-in sample dataset is used; otherwise the
//! single argument is a path to a JSON file containing an array of
//! `{"arrival_time": ..., "transaction_time": ...}` objects.

use std::env;
use std::error::Error;
use std::fs;
use std::process;

use teller_simulator_core_rs::{
    ArrivalEvent, SimulationInput, Simulator, MAX_TELLERS, MIN_TELLERS,
};

/// The fixed sample dataset: four customers over a short morning rush.
fn sample_input() -> SimulationInput {
    vec![
        ArrivalEvent { arrival_time: 20, transaction_time: 6 },
        ArrivalEvent { arrival_time: 22, transaction_time: 4 },
        ArrivalEvent { arrival_time: 23, transaction_time: 2 },
        ArrivalEvent { arrival_time: 30, transaction_time: 3 },
    ]
}

fn load_input(path: &str) -> Result<SimulationInput, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let input = serde_json::from_str(&raw)?;
    Ok(input)
}

fn run() -> Result<(), Box<dyn Error>> {
    let input = match env::args().nth(1) {
        Some(path) => load_input(&path)?,
        None => sample_input(),
    };

    let mut simulator = Simulator::new(input);

    for teller_count in MIN_TELLERS..=MAX_TELLERS {
        let busiest = simulator.max_teller_busy_time(teller_count)?;
        println!(
            "Busiest teller time with {} teller(s): {}",
            teller_count, busiest
        );
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
