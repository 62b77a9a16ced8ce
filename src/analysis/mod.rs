//! Cross-policy analysis.
//!
//! - [`classify`] / [`analyze`] - Trace pattern classifier
//! - [`Report`] - Runs every policy over one trace and compares them

mod classifier;
mod report;

pub use classifier::{analyze, classify, Pattern, PatternMetrics};
pub use report::{PolicySummary, Report, ReportConfig, SUMMARY_COLUMNS};
