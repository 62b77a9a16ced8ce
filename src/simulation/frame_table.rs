//! Fixed-width frame table projection.

use std::fmt;

use crate::common::PageId;

/// `capacity` display slots, residents first, then empty slots.
///
/// A frame table is a rendering of a policy's resident set in that policy's
/// natural order. It has no mutation path of its own and never drives an
/// eviction decision.
///
/// # Example
/// ```
/// use pagesim::{FrameTable, PageId};
///
/// let table = FrameTable::project(3, [PageId::new(4), PageId::new(1)]);
/// assert_eq!(table.occupied(), 2);
/// assert_eq!(table.to_string(), "4 1 -");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Place `residents` left to right into `capacity` slots.
    ///
    /// Residents beyond `capacity` are dropped, so the table never holds
    /// more than `capacity` pages.
    pub fn project<I>(capacity: usize, residents: I) -> Self
    where
        I: IntoIterator<Item = PageId>,
    {
        let mut slots: Vec<Option<PageId>> =
            residents.into_iter().take(capacity).map(Some).collect();
        slots.resize(capacity, None);
        Self { slots }
    }

    /// The slots in display order.
    #[inline]
    pub fn slots(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether `page` occupies a slot.
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }
}

impl fmt::Display for FrameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(page) => write!(f, "{}", page.0)?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}
