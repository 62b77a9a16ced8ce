//! Trace pattern classifier.
//!
//! Three metrics summarize a trace:
//! - `unique_ratio`: distinct pages over references
//! - `seq_ratio`: share of consecutive reference pairs whose ids differ by one
//! - `avg_gap`: mean distance between a reference and the previous reference
//!   to the same page, or the trace length if nothing repeats
//!
//! The first matching rule decides the verdict:
//! 1. `avg_gap < len / 4` and `unique_ratio < 0.5` → [`Pattern::Locality`]
//! 2. `seq_ratio > 0.7` → [`Pattern::Sequential`]
//! 3. otherwise → [`Pattern::Random`]
//!
//! A single-reference trace has no pairs and no gaps and is always Random.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::config::{LOCALITY_GAP_DIVISOR, LOCALITY_UNIQUE_RATIO, SEQUENTIAL_RATIO};
use crate::replacer::PolicyKind;
use crate::trace::Trace;

/// Reference pattern of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pattern {
    /// Short re-reference gaps over a small working set.
    Locality,
    /// Mostly consecutive page ids.
    Sequential,
    /// Neither of the above.
    Random,
}

impl Pattern {
    /// Policies recommended for this pattern.
    pub fn recommended(&self) -> &'static [PolicyKind] {
        match self {
            Pattern::Locality => &[PolicyKind::Optimal],
            Pattern::Sequential => &[PolicyKind::Fifo, PolicyKind::Lru],
            Pattern::Random => &[PolicyKind::Aging, PolicyKind::SecondChance],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Pattern::Locality => "Locality-based (Optimal recommended)",
            Pattern::Sequential => "Sequential (FIFO or LRU recommended)",
            Pattern::Random => "Random (Aging or Second Chance recommended)",
        };
        f.write_str(description)
    }
}

/// The metrics [`classify`] decides on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PatternMetrics {
    /// Number of references.
    pub len: usize,
    /// Distinct pages / references.
    pub unique_ratio: f64,
    /// Adjacent-id pairs / (references - 1); 0 for a single reference.
    pub seq_ratio: f64,
    /// Mean re-reference distance; `len` if no page repeats.
    pub avg_gap: f64,
}

impl PatternMetrics {
    /// Apply the decision rules.
    pub fn pattern(&self) -> Pattern {
        if self.len < 2 {
            return Pattern::Random;
        }
        let len = self.len as f64;
        if self.avg_gap < len / LOCALITY_GAP_DIVISOR && self.unique_ratio < LOCALITY_UNIQUE_RATIO
        {
            Pattern::Locality
        } else if self.seq_ratio > SEQUENTIAL_RATIO {
            Pattern::Sequential
        } else {
            Pattern::Random
        }
    }
}

/// Compute the classifier metrics of `trace` in one pass.
pub fn analyze(trace: &Trace) -> PatternMetrics {
    let len = trace.len();
    let mut distinct = HashSet::with_capacity(len);
    let mut last_seen = HashMap::with_capacity(len);
    let mut sequential = 0usize;
    let mut gap_sum = 0usize;
    let mut gaps = 0usize;

    for (index, &page) in trace.pages().iter().enumerate() {
        distinct.insert(page);
        if index > 0 && page.is_adjacent(trace[index - 1]) {
            sequential += 1;
        }
        if let Some(previous) = last_seen.insert(page, index) {
            gap_sum += index - previous;
            gaps += 1;
        }
    }

    let avg_gap = if gaps > 0 {
        gap_sum as f64 / gaps as f64
    } else {
        len as f64
    };
    let seq_ratio = if len > 1 {
        sequential as f64 / (len - 1) as f64
    } else {
        0.0
    };

    PatternMetrics {
        len,
        unique_ratio: distinct.len() as f64 / len as f64,
        seq_ratio,
        avg_gap,
    }
}

/// Classify the reference pattern of `trace`.
///
/// # Example
/// ```
/// use pagesim::{classify, Pattern, Trace};
///
/// let trace = Trace::from_pages(1..=10).unwrap();
/// assert_eq!(classify(&trace), Pattern::Sequential);
/// ```
pub fn classify(trace: &Trace) -> Pattern {
    analyze(trace).pattern()
}
