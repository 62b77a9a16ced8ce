//! Page identifier type.

use std::fmt;

/// Identifies a page in a reference trace.
///
/// Pages carry identity only: no size, no lifetime. Using `u32` matches the
/// non-negative integer domain traces are written in.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert!(!page_id.is_odd());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }

    /// Whether the identifier is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0 % 2 != 0
    }

    /// Whether two pages are numerically adjacent (differ by exactly one).
    #[inline]
    pub fn is_adjacent(&self, other: PageId) -> bool {
        self.0.abs_diff(other.0) == 1
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
        assert_eq!(PageId::from(42), pid);
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_parity() {
        assert!(PageId::new(7).is_odd());
        assert!(!PageId::new(0).is_odd());
        assert!(!PageId::new(10).is_odd());
    }

    #[test]
    fn test_page_id_adjacency() {
        assert!(PageId::new(3).is_adjacent(PageId::new(4)));
        assert!(PageId::new(4).is_adjacent(PageId::new(3)));
        assert!(!PageId::new(4).is_adjacent(PageId::new(4)));
        assert!(!PageId::new(0).is_adjacent(PageId::new(2)));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
