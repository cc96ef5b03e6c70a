//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::sim::replacer::{Policy, Replacer};

/// One FIFO step as a pure function.
///
/// Returns the new resident set and the evicted page, if any. A hit returns
/// the set unchanged and no eviction; a fault appends `value`, dropping the
/// front (oldest) page first when the set is already at `capacity`.
///
/// # Panics
/// Panics if `capacity` is 0.
///
/// # Example
/// ```
/// use pagesim::sim::replacer::step;
/// use pagesim::PageId;
///
/// let resident = [PageId::new(1), PageId::new(2)];
/// let (next, evicted) = step(&resident, 2, PageId::new(3));
/// assert_eq!(next, vec![PageId::new(2), PageId::new(3)]);
/// assert_eq!(evicted, Some(PageId::new(1)));
/// ```
pub fn step(resident: &[PageId], capacity: usize, value: PageId) -> (Vec<PageId>, Option<PageId>) {
    assert!(capacity > 0, "capacity must be > 0");

    if resident.contains(&value) {
        return (resident.to_vec(), None);
    }

    let mut next = resident.to_vec();
    let evicted = if next.len() < capacity {
        None
    } else {
        Some(next.remove(0))
    };
    next.push(value);
    (next, evicted)
}

/// Evicts pages in the order they were loaded.
///
/// Resident pages are appended as they load, so the front slot is always
/// the oldest. Re-referencing a page does not reorder it.
#[derive(Debug, Default)]
pub struct FifoReplacer;

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        FifoReplacer
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn victim(&mut self, _resident: &[PageId], _upcoming: &[PageId]) -> usize {
        0
    }
}
