//! Full report: every policy over one trace.

use std::collections::BTreeMap;
use std::thread;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::analysis::{classify, Pattern};
use crate::common::config::{validate_capacity, DEFAULT_WINDOW_SIZE};
use crate::common::Result;
use crate::replacer::{CustomRule, PolicyKind};
use crate::simulation::{simulate, SimulationResult};
use crate::trace::Trace;

/// Column headers of the row-per-policy summary table, in field order.
pub const SUMMARY_COLUMNS: [&str; 6] = [
    "Algorithm",
    "Hits",
    "Faults",
    "HitRate",
    "MissRate",
    "ExecutionTime(ms)",
];

/// The six fields persisted per policy run.
///
/// Serializes with the [`SUMMARY_COLUMNS`] names, in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySummary {
    #[serde(rename = "Algorithm")]
    pub name: String,

    #[serde(rename = "Hits")]
    pub hits: u64,

    #[serde(rename = "Faults")]
    pub faults: u64,

    #[serde(rename = "HitRate")]
    pub hit_rate_percent: f64,

    #[serde(rename = "MissRate")]
    pub fault_rate_percent: f64,

    #[serde(rename = "ExecutionTime(ms)")]
    pub execution_time_ms: f64,
}

impl From<&SimulationResult> for PolicySummary {
    fn from(result: &SimulationResult) -> Self {
        Self {
            name: result.policy.name().to_string(),
            hits: result.stats.hits,
            faults: result.stats.faults,
            hit_rate_percent: result.stats.hit_rate_percent(),
            fault_rate_percent: result.stats.fault_rate_percent(),
            execution_time_ms: result.elapsed_ms(),
        }
    }
}

/// Parameters of a full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Number of frames.
    pub capacity: usize,

    /// Window for custom rule 1.
    pub window_size: usize,

    /// Run the policies on separate threads.
    pub parallel: bool,
}

impl ReportConfig {
    /// Sequential report with the default window.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            window_size: DEFAULT_WINDOW_SIZE,
            parallel: false,
        }
    }

    /// Run each policy on its own thread.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Use `window_size` for custom rule 1.
    pub fn with_window(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.capacity)?;
        CustomRule::FewestInWindow {
            window: self.window_size,
        }
        .validate()
    }
}

/// Hit rates of every policy over one trace, and which one comes closest to
/// Optimal.
///
/// # Example
/// ```
/// use pagesim::{Report, ReportConfig, Trace};
///
/// let trace = Trace::from_pages([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]).unwrap();
/// let report = Report::generate(&trace, &ReportConfig::new(3)).unwrap();
///
/// assert_eq!(report.summaries().len(), 9);
/// let (name, rate) = report.closest_to_optimal().unwrap();
/// assert!(rate <= report.optimal_hit_rate());
/// assert_ne!(name, "Optimal");
/// ```
#[derive(Debug, Clone)]
pub struct Report {
    capacity: usize,
    trace_checksum: u32,
    pattern: Pattern,

    /// Summaries in run order.
    summaries: Vec<PolicySummary>,

    /// Hit rate (percent) by policy name.
    hit_rates: BTreeMap<String, f64>,

    optimal_hit_rate: f64,
    closest: Option<(String, f64)>,
}

impl Report {
    /// Run every policy configuration over `trace`.
    ///
    /// Custom runs twice, once per rule. Each run owns its policy state and
    /// only reads the shared trace, so parallel and sequential reports are
    /// identical apart from execution times.
    ///
    /// # Errors
    /// Configuration errors are returned before any policy runs.
    pub fn generate(trace: &Trace, config: &ReportConfig) -> Result<Self> {
        config.validate()?;

        let policies = PolicyKind::all(config.window_size);
        let results = if config.parallel {
            run_parallel(trace, config.capacity, &policies)?
        } else {
            policies
                .iter()
                .map(|&policy| simulate(trace, config.capacity, policy))
                .collect::<Result<Vec<_>>>()?
        };

        let summaries: Vec<PolicySummary> = results.iter().map(PolicySummary::from).collect();
        let hit_rates: BTreeMap<String, f64> = summaries
            .iter()
            .map(|s| (s.name.clone(), s.hit_rate_percent))
            .collect();

        let optimal_name = PolicyKind::Optimal.name();
        let optimal_hit_rate = hit_rates.get(optimal_name).copied().unwrap_or(0.0);

        // Name order; the first policy reaching the smallest difference wins.
        let mut closest: Option<(String, f64)> = None;
        let mut best_diff = f64::INFINITY;
        for (name, &rate) in &hit_rates {
            if name == optimal_name {
                continue;
            }
            let diff = (rate - optimal_hit_rate).abs();
            if diff < best_diff {
                best_diff = diff;
                closest = Some((name.clone(), rate));
            }
        }

        let report = Self {
            capacity: config.capacity,
            trace_checksum: trace.checksum(),
            pattern: classify(trace),
            summaries,
            hit_rates,
            optimal_hit_rate,
            closest,
        };

        tracing::debug!(
            capacity = report.capacity,
            checksum = report.trace_checksum,
            closest = report.closest.as_ref().map(|(name, _)| name.as_str()),
            "report generated"
        );

        Ok(report)
    }

    /// Number of frames every policy ran with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// CRC32 fingerprint of the trace the report was built from.
    pub fn trace_checksum(&self) -> u32 {
        self.trace_checksum
    }

    /// Classifier verdict for the trace.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// One summary per policy run, in run order.
    pub fn summaries(&self) -> &[PolicySummary] {
        &self.summaries
    }

    /// Hit rate (percent) by policy name.
    pub fn hit_rates(&self) -> &BTreeMap<String, f64> {
        &self.hit_rates
    }

    /// Hit rate (percent) of one policy.
    pub fn hit_rate(&self, name: &str) -> Option<f64> {
        self.hit_rates.get(name).copied()
    }

    /// Optimal's hit rate (percent).
    pub fn optimal_hit_rate(&self) -> f64 {
        self.optimal_hit_rate
    }

    /// The non-Optimal policy whose hit rate is closest to Optimal's.
    pub fn closest_to_optimal(&self) -> Option<(&str, f64)> {
        self.closest
            .as_ref()
            .map(|(name, rate)| (name.as_str(), *rate))
    }
}

/// One scoped thread per policy; results come back in `policies` order.
///
/// A panicking run propagates out of the scope.
fn run_parallel(
    trace: &Trace,
    capacity: usize,
    policies: &[PolicyKind],
) -> Result<Vec<SimulationResult>> {
    let collected: Mutex<BTreeMap<usize, Result<SimulationResult>>> = Mutex::new(BTreeMap::new());

    thread::scope(|scope| {
        for (index, &policy) in policies.iter().enumerate() {
            let collected = &collected;
            scope.spawn(move || {
                let result = simulate(trace, capacity, policy);
                collected.lock().insert(index, result);
            });
        }
    });

    collected.into_inner().into_values().collect()
}
