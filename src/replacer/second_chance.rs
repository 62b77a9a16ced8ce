//! Second-Chance (clock) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::replacer::{victim_or_first, Access};

/// A resident page and its referenced bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    page: PageId,
    referenced: bool,
}

/// FIFO with a referenced bit per page.
///
/// On a fault with full frames, the queue head is inspected: if its bit is
/// set, the bit is cleared and the page rotates to the tail; the first page
/// found with a clear bit is evicted. Bits cleared during a scan stay
/// cleared. Newly admitted pages start with the bit set.
#[derive(Debug, Clone)]
pub struct SecondChanceReplacer {
    capacity: usize,

    /// Resident pages in queue order (front = next to inspect).
    queue: VecDeque<Entry>,
}

impl SecondChanceReplacer {
    /// Create a new Second-Chance replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a reference to `page`.
    pub fn admit(&mut self, page: PageId) -> Access {
        if let Some(entry) = self.queue.iter_mut().find(|e| e.page == page) {
            entry.referenced = true;
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

        self.queue.push_back(Entry {
            page,
            referenced: true,
        });

        Access::Fault { evicted }
    }

    /// Rotate referenced pages to the tail until an unreferenced one is found.
    ///
    /// Every rotation clears a bit, so the scan ends within two passes.
    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let mut found = None;
        for _ in 0..2 * self.queue.len() {
            let Some(mut entry) = self.queue.pop_front() else {
                break;
            };
            if !entry.referenced {
                found = Some(entry.page);
                break;
            }
            entry.referenced = false;
            self.queue.push_back(entry);
        }

        let victim = match found {
            Some(page) => page,
            None => self.queue.remove(victim_or_first(None, "Second Chance"))?.page,
        };
        tracing::trace!(
            policy = "Second Chance",
            victim = victim.0,
            incoming = incoming.0,
            "evict"
        );
        Some(victim)
    }

    /// Whether `page` is resident with its referenced bit set.
    pub fn is_referenced(&self, page: PageId) -> Option<bool> {
        self.queue
            .iter()
            .find(|e| e.page == page)
            .map(|e| e.referenced)
    }

    /// Residents in queue order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().map(|e| e.page)
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.queue.iter().any(|e| e.page == page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
