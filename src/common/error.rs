//! Error types for the simulator.

use thiserror::Error;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Every variant except [`Error::TraceMismatch`] and [`Error::TraceExhausted`]
/// is a configuration error: it is reported before any policy state exists,
/// so a rejected run never produces a partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Frame capacity must be at least 1.
    #[error("invalid capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),

    /// A trace needs at least one reference.
    #[error("trace is empty")]
    EmptyTrace,

    /// The "fewest in window" rule needs a window of at least one reference.
    #[error("invalid window size {0}: must be positive")]
    InvalidWindowSize(usize),

    /// Custom rules are numbered 1 and 2.
    #[error("unknown custom rule {0}: expected 1 or 2")]
    UnknownCustomRule(u8),

    /// Policy name or menu code did not match any policy.
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),

    /// A lookahead policy was fed a reference that differs from its trace.
    ///
    /// This indicates a caller bug: Optimal must be driven with the exact
    /// trace it was built from.
    #[error("trace mismatch at index {index}: expected {expected}, found {found}")]
    TraceMismatch {
        index: usize,
        expected: PageId,
        found: PageId,
    },

    /// A lookahead policy was fed more references than its trace holds.
    #[error("trace exhausted after {len} references")]
    TraceExhausted { len: usize },
}
