//! Page reference traces.

use std::ops::Deref;

use crate::common::{Error, PageId, Result};

/// An ordered, immutable, non-empty sequence of page references.
///
/// A trace is the simulator's only input stream. It is built once and
/// shared read-only by every policy run, so running policies concurrently
/// needs no synchronization on the trace itself.
///
/// # Example
/// ```
/// use pagesim::{PageId, Trace};
///
/// let trace = Trace::from_pages([7, 0, 1, 2, 0]).unwrap();
/// assert_eq!(trace.len(), 5);
/// assert_eq!(trace[1], PageId::new(0));
/// assert_eq!(trace.distinct_pages(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trace {
    pages: Vec<PageId>,
}

impl Trace {
    /// Build a trace from page identifiers.
    ///
    /// # Errors
    /// - `Error::EmptyTrace` if `pages` is empty
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptyTrace);
        }
        Ok(Self { pages })
    }

    /// Build a trace from raw integer identifiers.
    ///
    /// # Errors
    /// - `Error::EmptyTrace` if `pages` yields nothing
    pub fn from_pages<I>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        Self::new(pages.into_iter().map(PageId::new).collect())
    }

    /// The references in order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Number of distinct pages referenced.
    pub fn distinct_pages(&self) -> usize {
        let mut seen: Vec<PageId> = self.pages.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// CRC32 fingerprint of the trace.
    ///
    /// Computed over the little-endian encoding of each page id, so two
    /// traces share a checksum exactly when they hold the same references
    /// (up to CRC collisions).
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for page in &self.pages {
            hasher.update(&page.0.to_le_bytes());
        }
        hasher.finalize()
    }
}

impl Deref for Trace {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.pages
    }
}

impl TryFrom<Vec<u32>> for Trace {
    type Error = Error;

    fn try_from(pages: Vec<u32>) -> Result<Self> {
        Self::from_pages(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_rejects_empty() {
        assert_eq!(Trace::new(vec![]), Err(Error::EmptyTrace));
        assert_eq!(Trace::from_pages(Vec::new()), Err(Error::EmptyTrace));
    }

    #[test]
    fn test_trace_preserves_order() {
        let trace = Trace::from_pages([3, 1, 2]).unwrap();
        assert_eq!(
            trace.pages(),
            &[PageId::new(3), PageId::new(1), PageId::new(2)]
        );
    }

    #[test]
    fn test_trace_distinct_pages() {
        let trace = Trace::from_pages([1, 1, 2, 1, 3, 2]).unwrap();
        assert_eq!(trace.distinct_pages(), 3);
    }

    #[test]
    fn test_trace_checksum() {
        let a = Trace::from_pages([1, 2, 3]).unwrap();
        let b = Trace::from_pages([1, 2, 3]).unwrap();
        let c = Trace::from_pages([3, 2, 1]).unwrap();

        assert_eq!(a.checksum(), b.checksum());
        assert_ne!(a.checksum(), c.checksum());
    }

    #[test]
    fn test_trace_try_from() {
        let trace = Trace::try_from(vec![5, 6]).unwrap();
        assert_eq!(trace.len(), 2);
        assert!(Trace::try_from(Vec::<u32>::new()).is_err());
    }
}
