//! Frequency-counting replacement policies (LFU and MFU).

use std::collections::HashMap;

use crate::common::PageId;
use crate::replacer::{first_max_position, first_min_position, victim_or_first, Access};

/// Which end of the frequency range gets evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyMode {
    /// Evict the least frequently used page (LFU).
    Least,
    /// Evict the most frequently used page (MFU).
    Most,
}

/// Counts references per resident page and evicts by count.
///
/// A page's counter starts at 1 when it is admitted and is dropped when the
/// page is evicted, so a page that comes back starts over. Ties go to the
/// first page in residency order, which is admission order.
#[derive(Debug, Clone)]
pub struct FrequencyReplacer {
    capacity: usize,
    mode: FrequencyMode,

    /// Residents in admission order.
    residents: Vec<PageId>,

    /// Reference count of each resident.
    counts: HashMap<PageId, u64>,
}

impl FrequencyReplacer {
    /// Create a new frequency replacer with `capacity` frames.
    pub fn new(capacity: usize, mode: FrequencyMode) -> Self {
        Self {
            capacity,
            mode,
            residents: Vec::with_capacity(capacity),
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Create an LFU replacer.
    pub fn lfu(capacity: usize) -> Self {
        Self::new(capacity, FrequencyMode::Least)
    }

    /// Create an MFU replacer.
    pub fn mfu(capacity: usize) -> Self {
        Self::new(capacity, FrequencyMode::Most)
    }

    /// Record a reference to `page`.
    pub fn admit(&mut self, page: PageId) -> Access {
        if let Some(count) = self.counts.get_mut(&page) {
            *count += 1;
            return Access::Hit;
        }

        let evicted = if self.len() >= self.capacity {
            let Some(victim) = self.evict(page) else {
                return Access::Fault { evicted: None };
            };
            Some(victim)
        } else {
            None
        };

        self.residents.push(page);
        self.counts.insert(page, 1);

        Access::Fault { evicted }
    }

    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let count = |page: PageId| self.counts.get(&page).copied().unwrap_or(0);
        let found = match self.mode {
            FrequencyMode::Least => first_min_position(&self.residents, count),
            FrequencyMode::Most => first_max_position(&self.residents, count),
        };
        let index = victim_or_first(found, self.name());
        if index >= self.residents.len() {
            return None;
        }
        let victim = self.residents.remove(index);
        self.counts.remove(&victim);
        tracing::trace!(
            policy = self.name(),
            victim = victim.0,
            incoming = incoming.0,
            "evict"
        );
        Some(victim)
    }

    /// Reference count of a resident page.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        self.counts.get(&page).copied()
    }

    /// Eviction mode.
    pub fn mode(&self) -> FrequencyMode {
        self.mode
    }

    fn name(&self) -> &'static str {
        match self.mode {
            FrequencyMode::Least => "LFU",
            FrequencyMode::Most => "MFU",
        }
    }

    /// Residents in admission order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.residents.iter().copied()
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.counts.contains_key(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.residents.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
