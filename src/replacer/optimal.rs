//! Optimal (Belady) replacement policy.
//!
//! Optimal is the one policy that is not online: choosing a victim needs the
//! position of every resident's next reference, so the whole trace has to be
//! known before the first reference is admitted. The replacer precomputes a
//! next-use table from the trace once and then walks it with a cursor.

use std::collections::HashMap;

use crate::common::{Error, PageId, Result};
use crate::replacer::{first_max_position, victim_or_first, Access};
use crate::trace::Trace;

/// Evicts the resident page whose next reference is farthest away.
///
/// A page that is never referenced again counts as farthest. Ties go to the
/// first such page in slot order, and the incoming page takes the victim's
/// slot.
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    capacity: usize,

    /// The trace this replacer was built for.
    pages: Vec<PageId>,

    /// `next_use[i]` is the index of the next reference to `pages[i]` after
    /// `i`, or `pages.len()` if there is none.
    next_use: Vec<usize>,

    /// Index of the next reference to be admitted.
    cursor: usize,

    /// Residents in slot order.
    frames: Vec<PageId>,

    /// Next reference index of each resident, relative to the cursor.
    upcoming: HashMap<PageId, usize>,
}

impl OptimalReplacer {
    /// Create a new Optimal replacer for `trace`.
    pub fn new(capacity: usize, trace: &Trace) -> Self {
        let pages = trace.pages().to_vec();
        let never = pages.len();

        let mut next_use = vec![never; pages.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();
        for (index, &page) in pages.iter().enumerate().rev() {
            if let Some(next) = seen.insert(page, index) {
                next_use[index] = next;
            }
        }

        Self {
            capacity,
            pages,
            next_use,
            cursor: 0,
            frames: Vec::with_capacity(capacity),
            upcoming: HashMap::with_capacity(capacity),
        }
    }

    /// Record the next reference of the trace, which must be `page`.
    ///
    /// # Errors
    /// - `Error::TraceMismatch` if `page` is not the trace's next reference
    /// - `Error::TraceExhausted` if the whole trace has been admitted
    pub fn admit(&mut self, page: PageId) -> Result<Access> {
        let index = self.cursor;
        let expected = *self.pages.get(index).ok_or(Error::TraceExhausted {
            len: self.pages.len(),
        })?;
        if expected != page {
            return Err(Error::TraceMismatch {
                index,
                expected,
                found: page,
            });
        }
        self.cursor += 1;

        let hit = self.upcoming.contains_key(&page);
        self.upcoming.insert(page, self.next_use[index]);
        if hit {
            return Ok(Access::Hit);
        }

        if self.frames.len() < self.capacity {
            self.frames.push(page);
            return Ok(Access::Fault { evicted: None });
        }

        let never = self.pages.len();
        let slot = victim_or_first(
            first_max_position(&self.frames, |p| {
                self.upcoming.get(&p).copied().unwrap_or(never)
            }),
            "Optimal",
        );
        let Some(frame) = self.frames.get_mut(slot) else {
            self.upcoming.remove(&page);
            return Ok(Access::Fault { evicted: None });
        };
        let victim = std::mem::replace(frame, page);
        self.upcoming.remove(&victim);
        tracing::trace!(policy = "Optimal", victim = victim.0, incoming = page.0, "evict");

        Ok(Access::Fault {
            evicted: Some(victim),
        })
    }

    /// Position of the next reference to be admitted.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Residents in slot order.
    pub fn residents(&self) -> impl Iterator<Item = PageId> + '_ {
        self.frames.iter().copied()
    }

    /// Whether `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.frames.contains(&page)
    }

    /// Number of resident pages.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no page is resident.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(ids: &[u32], capacity: usize) -> (OptimalReplacer, Vec<Access>) {
        let trace = Trace::from_pages(ids.iter().copied()).unwrap();
        let mut replacer = OptimalReplacer::new(capacity, &trace);
        let accesses = trace
            .pages()
            .iter()
            .map(|&p| replacer.admit(p).unwrap())
            .collect();
        (replacer, accesses)
    }

    #[test]
    fn test_optimal_next_use_table() {
        let trace = Trace::from_pages([1, 2, 1, 3, 2]).unwrap();
        let replacer = OptimalReplacer::new(2, &trace);
        assert_eq!(replacer.next_use, vec![2, 4, 5, 5, 5]);
    }

    #[test]
    fn test_optimal_evicts_farthest() {
        // At 4: 1 is next used at 5, 2 at 6, 3 never -> evict 3
        let (_, accesses) = run(&[1, 2, 3, 4, 1, 2], 3);
        assert_eq!(accesses[3].evicted(), Some(PageId::new(3)));
        assert!(accesses[4].is_hit());
        assert!(accesses[5].is_hit());
    }

    #[test]
    fn test_optimal_never_used_tie_breaks_by_slot() {
        // At 4: 1, 2 and 3 are never used again -> first slot wins
        let (replacer, accesses) = run(&[1, 2, 3, 4], 3);
        assert_eq!(accesses[3].evicted(), Some(PageId::new(1)));

        let residents: Vec<u32> = replacer.residents().map(|p| p.0).collect();
        assert_eq!(residents, vec![4, 2, 3]);
    }

    #[test]
    fn test_optimal_textbook_trace() {
        let (_, accesses) = run(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2], 3);
        let faults = accesses.iter().filter(|a| !a.is_hit()).count();
        assert_eq!(faults, 7);
    }

    #[test]
    fn test_optimal_rejects_mismatch() {
        let trace = Trace::from_pages([1, 2]).unwrap();
        let mut replacer = OptimalReplacer::new(1, &trace);

        assert_eq!(
            replacer.admit(PageId::new(2)),
            Err(Error::TraceMismatch {
                index: 0,
                expected: PageId::new(1),
                found: PageId::new(2),
            })
        );
        // A rejected reference does not advance the cursor
        assert_eq!(replacer.cursor(), 0);
    }

    #[test]
    fn test_optimal_rejects_overrun() {
        let trace = Trace::from_pages([1]).unwrap();
        let mut replacer = OptimalReplacer::new(1, &trace);

        assert!(replacer.admit(PageId::new(1)).is_ok());
        assert_eq!(
            replacer.admit(PageId::new(1)),
            Err(Error::TraceExhausted { len: 1 })
        );
    }
}
