//! Common types and utilities shared across the simulator.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and run configuration
//! - Error types
//! - Page identifiers

pub mod config;
pub mod error;
mod page_id;

pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use page_id::PageId;
