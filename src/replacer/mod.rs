//! Page replacement policies (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First-In-First-Out
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's farthest-next-use (needs the whole trace)
//! - [`SecondChanceReplacer`] - FIFO with a referenced bit (clock)
//! - [`FrequencyReplacer`] - LFU and MFU
//! - [`AgingReplacer`] - 8-bit shifted reference history
//! - [`CustomReplacer`] - "fewest in window" and "even priority" rules
//!
//! Every replacer exposes the same contract: `admit(page)` returns an
//! [`Access`] and updates the policy's bookkeeping so later calls see this
//! reference. [`Replacer`] closes the set of policies into one enum so the
//! simulation driver dispatches by exhaustive match.

mod aging;
mod custom;
mod fifo;
mod frequency;
mod lru;
mod optimal;
mod policy;
mod second_chance;

pub use aging::AgingReplacer;
pub use custom::CustomReplacer;
pub use fifo::FifoReplacer;
pub use frequency::{FrequencyMode, FrequencyReplacer};
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;
pub use policy::{CustomRule, PolicyKind};
pub use second_chance::SecondChanceReplacer;

use std::cmp::Reverse;

use crate::common::{PageId, Result};
use crate::simulation::FrameTable;

/// Outcome of admitting one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,

    /// The page was not resident and has been installed.
    ///
    /// `evicted` names the page it replaced, or `None` when a frame was free.
    Fault { evicted: Option<PageId> },
}

impl Access {
    /// Whether the reference was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// The page evicted by this reference, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Hit => None,
            Access::Fault { evicted } => *evicted,
        }
    }
}

/// A running policy instance: one variant per replacement policy.
///
/// Created fresh for each simulation run by [`PolicyKind::build`] and owned
/// exclusively by that run.
#[derive(Debug, Clone)]
pub enum Replacer {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
    SecondChance(SecondChanceReplacer),
    Frequency(FrequencyReplacer),
    Aging(AgingReplacer),
    Custom(CustomReplacer),
}

impl Replacer {
    /// Admit one reference.
    ///
    /// # Errors
    /// Only the Optimal policy can fail, and only when it is driven with a
    /// reference that differs from (or runs past) the trace it was built for.
    pub fn admit(&mut self, page: PageId) -> Result<Access> {
        let access = match self {
            Replacer::Fifo(r) => r.admit(page),
            Replacer::Lru(r) => r.admit(page),
            Replacer::Optimal(r) => r.admit(page)?,
            Replacer::SecondChance(r) => r.admit(page),
            Replacer::Frequency(r) => r.admit(page),
            Replacer::Aging(r) => r.admit(page),
            Replacer::Custom(r) => r.admit(page),
        };
        Ok(access)
    }

    /// Whether the policy needs the full trace before the first reference.
    pub fn requires_full_trace(&self) -> bool {
        matches!(self, Replacer::Optimal(_))
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        match self {
            Replacer::Fifo(r) => r.capacity(),
            Replacer::Lru(r) => r.capacity(),
            Replacer::Optimal(r) => r.capacity(),
            Replacer::SecondChance(r) => r.capacity(),
            Replacer::Frequency(r) => r.capacity(),
            Replacer::Aging(r) => r.capacity(),
            Replacer::Custom(r) => r.capacity(),
        }
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        match self {
            Replacer::Fifo(r) => r.len(),
            Replacer::Lru(r) => r.len(),
            Replacer::Optimal(r) => r.len(),
            Replacer::SecondChance(r) => r.len(),
            Replacer::Frequency(r) => r.len(),
            Replacer::Aging(r) => r.len(),
            Replacer::Custom(r) => r.len(),
        }
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Project the resident set onto `capacity` display slots.
    pub fn frame_table(&self) -> FrameTable {
        let capacity = self.capacity();
        match self {
            Replacer::Fifo(r) => FrameTable::project(capacity, r.residents()),
            Replacer::Lru(r) => FrameTable::project(capacity, r.residents()),
            Replacer::Optimal(r) => FrameTable::project(capacity, r.residents()),
            Replacer::SecondChance(r) => FrameTable::project(capacity, r.residents()),
            Replacer::Frequency(r) => FrameTable::project(capacity, r.residents()),
            Replacer::Aging(r) => FrameTable::project(capacity, r.residents()),
            Replacer::Custom(r) => FrameTable::project(capacity, r.residents()),
        }
    }
}

// ============================================================================
// Victim selection helpers
// ============================================================================

/// Index of the first resident with the smallest key.
///
/// `min_by_key` keeps the first of equal minima, which gives the
/// "first in residency order" tie-break every policy uses.
pub(crate) fn first_min_position<'a, K, F>(
    residents: impl IntoIterator<Item = &'a PageId>,
    mut key: F,
) -> Option<usize>
where
    K: Ord,
    F: FnMut(PageId) -> K,
{
    residents
        .into_iter()
        .enumerate()
        .min_by_key(|&(_, &page)| key(page))
        .map(|(index, _)| index)
}

/// Index of the first resident with the largest key.
///
/// `max_by_key` would keep the last of equal maxima, so this goes through
/// `Reverse` to keep the first.
pub(crate) fn first_max_position<'a, K, F>(
    residents: impl IntoIterator<Item = &'a PageId>,
    mut key: F,
) -> Option<usize>
where
    K: Ord,
    F: FnMut(PageId) -> K,
{
    first_min_position(residents, |page| Reverse(key(page)))
}

/// Fallback for a full frame table whose selection rule found no victim.
///
/// Unreachable with `capacity >= 1`. Debug builds panic; release builds log
/// at `error` and evict the first resident. A caller with no resident at
/// index 0 admits nothing.
pub(crate) fn victim_or_first(found: Option<usize>, policy: &'static str) -> usize {
    debug_assert!(
        found.is_some(),
        "{policy}: no eviction candidate while frames are full"
    );
    found.unwrap_or_else(|| {
        tracing::error!(policy, "no eviction candidate while frames are full");
        0
    })
}
