//! pagesim - a page replacement simulator with interchangeable eviction
//! policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Analysis (analysis/)                     │   │
//! │  │     Pattern Classifier        Report Aggregator          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation Driver (simulation/)             │   │
//! │  │        simulate → StepEvent + SimulationStats            │   │
//! │  │                     FrameTable                           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Replacers (replacer/)                      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │ FIFO | LRU | Optimal | Second Chance | LFU |    │   │   │
//! │  │   │      MFU | Aging | Custom (2 rules)             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Trace (trace)        Common (common/)             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`trace`] - Immutable page reference traces
//! - [`replacer`] - Replacement policy state machines
//! - [`simulation`] - The driver loop and its output
//! - [`analysis`] - Pattern classifier and cross-policy report
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, classify, Pattern, PolicyKind, Trace};
//!
//! let trace = Trace::from_pages([7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]).unwrap();
//!
//! let result = simulate(&trace, 3, PolicyKind::Optimal).unwrap();
//! assert_eq!(result.faults(), 7);
//! assert_eq!(result.hits(), 6);
//!
//! assert_eq!(classify(&trace), Pattern::Random);
//! ```

pub mod analysis;
pub mod common;
pub mod replacer;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_WINDOW_SIZE;
pub use common::{Error, PageId, Result, SimulationConfig};

pub use analysis::{
    analyze, classify, Pattern, PatternMetrics, PolicySummary, Report, ReportConfig,
    SUMMARY_COLUMNS,
};
pub use replacer::{Access, CustomRule, PolicyKind, Replacer};
pub use simulation::{
    simulate, simulate_with, FrameTable, SimulationResult, SimulationStats, StepEvent,
};
pub use trace::Trace;
