//! Simulation statistics.

use std::fmt;

/// Hit/fault counters for one run.
///
/// `hits + faults` always equals the number of references admitted.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::default();
/// stats.record_hit();
/// stats.record_fault(false);
/// assert_eq!(stats.total(), 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References to a resident page.
    pub hits: u64,

    /// References that had to install a page.
    pub faults: u64,

    /// Faults that replaced a resident page.
    pub evictions: u64,
}

impl SimulationStats {
    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Count a fault, and an eviction if one happened.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total references.
    pub fn total(&self) -> u64 {
        self.hits + self.faults
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }

    /// Hit rate as a percentage.
    pub fn hit_rate_percent(&self) -> f64 {
        self.hit_rate() * 100.0
    }

    /// Fault rate as a percentage.
    pub fn fault_rate_percent(&self) -> f64 {
        self.fault_rate() * 100.0
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate_percent()
        )
    }
}
