//! The simulation driver loop.

use std::time::{Duration, Instant};

use crate::common::{PageId, Result, SimulationConfig};
use crate::replacer::{Access, PolicyKind};
use crate::simulation::{FrameTable, SimulationStats};
use crate::trace::Trace;

/// One admitted reference and the frame state it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    /// Position in the trace.
    pub index: usize,

    /// The referenced page.
    pub page: PageId,

    /// Hit, or fault with the evicted page.
    pub access: Access,

    /// Frame table after the reference.
    pub frames: FrameTable,
}

impl StepEvent {
    /// Whether the reference was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.access.is_hit()
    }
}

/// Output of one simulation run.
///
/// Everything except `elapsed` is a pure function of trace, capacity and
/// policy.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    /// Policy that was run.
    pub policy: PolicyKind,

    /// Number of frames.
    pub capacity: usize,

    /// Hit/fault counters.
    pub stats: SimulationStats,

    /// Per-step events, empty unless step recording was requested.
    pub steps: Vec<StepEvent>,

    /// Wall-clock time spent in the driver loop.
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Number of hits.
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    /// Number of faults.
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Number of references.
    pub fn total(&self) -> u64 {
        self.stats.total()
    }

    /// Hit rate as a percentage.
    pub fn hit_rate_percent(&self) -> f64 {
        self.stats.hit_rate_percent()
    }

    /// Execution time in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `trace` through a fresh `policy` instance with `capacity` frames,
/// collecting counters only.
///
/// # Errors
/// Configuration errors (`capacity` of 0, a zero custom window) are
/// returned before any reference is admitted.
///
/// # Example
/// ```
/// use pagesim::{simulate, PolicyKind, Trace};
///
/// let trace = Trace::from_pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
/// let result = simulate(&trace, 3, PolicyKind::Fifo).unwrap();
/// assert_eq!(result.faults(), 9);
/// assert_eq!(result.hits(), 3);
/// ```
pub fn simulate(trace: &Trace, capacity: usize, policy: PolicyKind) -> Result<SimulationResult> {
    simulate_with(trace, policy, &SimulationConfig::new(capacity))
}

/// Run `trace` through a fresh `policy` instance as described by `config`.
///
/// References are admitted strictly in trace order. With
/// `config.record_steps`, a [`StepEvent`] is recorded for every reference.
///
/// # Errors
/// Configuration errors are returned before any reference is admitted, so a
/// rejected run never yields a partial result.
pub fn simulate_with(
    trace: &Trace,
    policy: PolicyKind,
    config: &SimulationConfig,
) -> Result<SimulationResult> {
    config.validate()?;
    let mut replacer = policy.build(config.capacity, trace)?;

    tracing::debug!(
        policy = policy.name(),
        capacity = config.capacity,
        references = trace.len(),
        "simulation started"
    );

    let start = Instant::now();
    let mut stats = SimulationStats::default();
    let mut steps = Vec::with_capacity(if config.record_steps { trace.len() } else { 0 });

    for (index, &page) in trace.pages().iter().enumerate() {
        let access = replacer.admit(page)?;
        match access {
            Access::Hit => stats.record_hit(),
            Access::Fault { evicted } => stats.record_fault(evicted.is_some()),
        }

        if config.record_steps {
            steps.push(StepEvent {
                index,
                page,
                access,
                frames: replacer.frame_table(),
            });
        }
    }
    let elapsed = start.elapsed();

    tracing::debug!(
        policy = policy.name(),
        hits = stats.hits,
        faults = stats.faults,
        elapsed_us = elapsed.as_micros() as u64,
        "simulation finished"
    );

    Ok(SimulationResult {
        policy,
        capacity: config.capacity,
        stats,
        steps,
        elapsed,
    })
}
