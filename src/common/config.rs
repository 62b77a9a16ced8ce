//! Configuration constants and run configuration.

use crate::common::{Error, Result};

/// Window length used by the "fewest in window" rule when none is given.
///
/// The full report always runs Custom rule 1 with this window.
pub const DEFAULT_WINDOW_SIZE: usize = 4;

/// Bit set in an aging counter when its page is referenced.
pub const AGING_REFERENCE_BIT: u8 = 0x80;

/// Locality requires `avg_gap < len / LOCALITY_GAP_DIVISOR`.
pub const LOCALITY_GAP_DIVISOR: f64 = 4.0;

/// Locality requires `unique_ratio < LOCALITY_UNIQUE_RATIO`.
pub const LOCALITY_UNIQUE_RATIO: f64 = 0.5;

/// Sequential requires `seq_ratio > SEQUENTIAL_RATIO`.
pub const SEQUENTIAL_RATIO: f64 = 0.7;

/// Parameters for a single simulation run.
///
/// # Example
/// ```
/// use pagesim::SimulationConfig;
///
/// let config = SimulationConfig::new(3).with_steps();
/// assert!(config.validate().is_ok());
/// assert!(SimulationConfig::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of frames.
    pub capacity: usize,

    /// Record a per-step event with a frame snapshot.
    pub record_steps: bool,
}

impl SimulationConfig {
    /// Create a config that only collects counters.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            record_steps: false,
        }
    }

    /// Also record the per-step event log.
    pub fn with_steps(mut self) -> Self {
        self.record_steps = true;
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)
    }
}

/// Capacity must be at least one frame.
pub fn validate_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(capacity));
    }
    Ok(())
}
