//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;
use crate::replacer::{victim_or_first, Access};

/// Evicts pages in the order they were admitted.
///
/// Hits never reorder the queue. The display keeps slots stable: an incoming
/// page takes over the slot of the page it evicted.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    capacity: usize,

    /// Page IDs in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Residents in display-slot order.
    slots: Vec<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Record a reference to `page`.
    pub fn admit(&mut self, page: PageId) -> Access {
        if self.resident.contains(&page) {
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

        match evicted.and_then(|victim| self.slots.iter().position(|&p| p == victim)) {
            Some(slot) => self.slots[slot] = page,
            None => self.slots.push(page),
        }
        self.queue.push_back(page);
        self.resident.insert(page);

        Access::Fault { evicted }
    }

    /// Remove and return the oldest resident page.
    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let found = (!self.queue.is_empty()).then_some(0);
        let victim = self.queue.remove(victim_or_first(found, "FIFO"))?;
        self.resident.remove(&victim);
        tracing::trace!(policy = "FIFO", victim = victim.0, incoming = incoming.0, "evict");
        Some(victim)
    }

    /// Residents in display-slot order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admit_all(replacer: &mut FifoReplacer, ids: &[u32]) -> Vec<Access> {
        ids.iter().map(|&id| replacer.admit(PageId::new(id))).collect()
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(3);

        let accesses = admit_all(&mut replacer, &[0, 1, 2]);
        assert!(accesses
            .iter()
            .all(|a| *a == Access::Fault { evicted: None }));
        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.admit(PageId::new(3)).evicted(), Some(PageId::new(0)));
        assert_eq!(replacer.admit(PageId::new(4)).evicted(), Some(PageId::new(1)));
        assert_eq!(replacer.admit(PageId::new(5)).evicted(), Some(PageId::new(2)));
    }

    #[test]
    fn test_fifo_hit_does_not_reorder() {
        let mut replacer = FifoReplacer::new(2);

        admit_all(&mut replacer, &[0, 1]);
        assert_eq!(replacer.admit(PageId::new(0)), Access::Hit);

        // 0 was admitted first, so it still goes first
        assert_eq!(replacer.admit(PageId::new(2)).evicted(), Some(PageId::new(0)));
        assert!(!replacer.contains(PageId::new(0)));
        assert!(replacer.contains(PageId::new(1)));
    }

    #[test]
    fn test_fifo_slots_are_stable() {
        let mut replacer = FifoReplacer::new(3);

        admit_all(&mut replacer, &[1, 2, 3, 4]);
        // 4 takes the slot 1 vacated
        let residents: Vec<u32> = replacer.residents().map(|p| p.0).collect();
        assert_eq!(residents, vec![4, 2, 3]);

        admit_all(&mut replacer, &[5]);
        let residents: Vec<u32> = replacer.residents().map(|p| p.0).collect();
        assert_eq!(residents, vec![4, 5, 3]);
    }

    #[test]
    fn test_fifo_single_frame() {
        let mut replacer = FifoReplacer::new(1);

        let accesses = admit_all(&mut replacer, &[1, 1, 1, 1]);
        assert_eq!(accesses[0], Access::Fault { evicted: None });
        assert!(accesses[1..].iter().all(Access::is_hit));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no eviction candidate")]
    fn test_fifo_zero_frames_trips_fallback_assert() {
        FifoReplacer::new(0).admit(PageId::new(1));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_fifo_zero_frames_admits_nothing() {
        let mut replacer = FifoReplacer::new(0);
        assert_eq!(replacer.admit(PageId::new(1)), Access::Fault { evicted: None });
        assert!(replacer.is_empty());
    }
}
