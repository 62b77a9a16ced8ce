//! LRU (Least Recently Used) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;
use crate::replacer::{victim_or_first, Access};

/// Evicts the page that has gone unreferenced the longest.
///
/// The recency list runs from most recent (front) to least recent (back),
/// which is also the display order.
#[derive(Debug, Clone)]
pub struct LruReplacer {
    capacity: usize,

    /// Pages by recency (front = most recently used).
    recency: VecDeque<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            recency: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
        }
    }

    /// Record a reference to `page`.
    ///
    /// Hit or fault, `page` ends up at the most-recent end.
    pub fn admit(&mut self, page: PageId) -> Access {
        if self.resident.contains(&page) {
            if let Some(pos) = self.recency.iter().position(|&p| p == page) {
                self.recency.remove(pos);
            }
            self.recency.push_front(page);
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

        self.recency.push_front(page);
        self.resident.insert(page);

        Access::Fault { evicted }
    }

    fn evict(&mut self, incoming: PageId) -> Option<PageId> {
        let found = self.recency.len().checked_sub(1);
        let victim = self.recency.remove(victim_or_first(found, "LRU"))?;
        self.resident.remove(&victim);
        tracing::trace!(policy = "LRU", victim = victim.0, incoming = incoming.0, "evict");
        Some(victim)
    }

    /// Residents from most to least recently used.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.recency.iter().copied()
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

    fn admit_all(replacer: &mut LruReplacer, ids: &[u32]) {
        for &id in ids {
            replacer.admit(PageId::new(id));
        }
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(3);

        admit_all(&mut replacer, &[1, 2, 3]);
        assert_eq!(replacer.admit(PageId::new(1)), Access::Hit);

        // 2 is now the least recently used
        assert_eq!(replacer.admit(PageId::new(4)).evicted(), Some(PageId::new(2)));
        assert_eq!(replacer.admit(PageId::new(5)).evicted(), Some(PageId::new(3)));
        assert_eq!(replacer.admit(PageId::new(6)).evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_lru_display_order() {
        let mut replacer = LruReplacer::new(3);

        admit_all(&mut replacer, &[1, 2, 3, 2]);
        let residents: Vec<u32> = replacer.residents().map(|p| p.0).collect();
        assert_eq!(residents, vec![2, 3, 1]);
    }

    #[test]
    fn test_lru_hit_keeps_size() {
        let mut replacer = LruReplacer::new(2);

        admit_all(&mut replacer, &[7, 7, 7]);
        assert_eq!(replacer.len(), 1);
        assert!(replacer.contains(PageId::new(7)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no eviction candidate")]
    fn test_lru_zero_frames_trips_fallback_assert() {
        LruReplacer::new(0).admit(PageId::new(1));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_lru_zero_frames_admits_nothing() {
        let mut replacer = LruReplacer::new(0);
        assert_eq!(replacer.admit(PageId::new(1)), Access::Fault { evicted: None });
        assert!(replacer.is_empty());
    }
}
