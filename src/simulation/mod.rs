//! Simulation driver.
//!
//! Runs one trace through one freshly built policy instance and collects
//! counters and, optionally, a per-step event log.
//!
//! # Components
//! - [`simulate`] - The driver loop
//! - [`FrameTable`] - Fixed-width projection of the resident set
//! - [`SimulationStats`] - Hit/fault counters
//! - [`SimulationResult`] / [`StepEvent`] - Run output

mod frame_table;
mod simulator;
mod stats;

pub use frame_table::FrameTable;
pub use simulator::{simulate, simulate_with, SimulationResult, StepEvent};
pub use stats::SimulationStats;
