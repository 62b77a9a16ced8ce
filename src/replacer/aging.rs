//! Aging replacement policy.

use std::collections::HashMap;

use crate::common::config::AGING_REFERENCE_BIT;
use crate::common::PageId;
use crate::replacer::{first_min_position, victim_or_first, Access};

/// Approximates LRU with an 8-bit reference history per page.
///
/// On every reference, before deciding hit or fault, each resident counter
/// is shifted right by one bit. The referenced page then gets its top bit
/// set (a newly admitted page starts at exactly `0x80`). The victim is the
/// resident with the smallest counter, first in residency order on ties.
#[derive(Debug, Clone)]
pub struct AgingReplacer {
    capacity: usize,

    /// Residents in admission order.
    residents: Vec<PageId>,

    /// Reference history of each resident.
    counters: HashMap<PageId, u8>,
}

impl AgingReplacer {
    /// Create a new Aging replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            residents: Vec::with_capacity(capacity),
            counters: HashMap::with_capacity(capacity),
        }
    }

    /// Record a reference to `page`.
    pub fn admit(&mut self, page: PageId) -> Access {
        self.tick();

        if let Some(counter) = self.counters.get_mut(&page) {
            *counter |= AGING_REFERENCE_BIT;
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
        self.counters.insert(page, AGING_REFERENCE_BIT);

        Access::Fault { evicted }
    }

    /// Age every resident counter by one step.
    fn tick(&mut self) {
        for counter in self.counters.values_mut() {
            *counter >>= 1;
        }
    }

    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let found = first_min_position(&self.residents, |page| {
            self.counters.get(&page).copied().unwrap_or(0)
        });
        let index = victim_or_first(found, "Aging");
        if index >= self.residents.len() {
            return None;
        }
        let victim = self.residents.remove(index);
        self.counters.remove(&victim);
        tracing::trace!(policy = "Aging", victim = victim.0, incoming = incoming.0, "evict");
        Some(victim)
    }

    /// Counter of a resident page.
    pub fn counter(&self, page: PageId) -> Option<u8> {
        self.counters.get(&page).copied()
    }

    /// Residents paired with their counters, in residency order.
    pub fn counters(&self) -> impl Iterator<Item = (PageId, u8)> + '_ {
        self.residents
            .iter()
            .map(|&page| (page, self.counters.get(&page).copied().unwrap_or(0)))
    }

    /// Residents in admission order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.residents.iter().copied()
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.counters.contains_key(&page)
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
