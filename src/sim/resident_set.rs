//! The set of pages currently held in frames.

use std::fmt;

use crate::common::PageId;

/// Ordered, bounded, duplicate-free collection of resident pages.
///
/// Slot order is significant: for append-style policies the front is the
/// oldest insertion, for in-place policies a page keeps the slot it was
/// loaded into.
///
/// # Invariants
/// - `len() <= capacity()`
/// - no page appears twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentSet {
    pages: Vec<PageId>,
    capacity: usize,
}

impl ResidentSet {
    /// Create an empty resident set with room for `capacity` pages.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn to_vec(&self) -> Vec<PageId> {
        self.pages.clone()
    }

    /// Append a page as the newest member. Returns the slot it landed in.
    pub(crate) fn push_back(&mut self, page: PageId) -> usize {
        debug_assert!(!self.is_full(), "push_back on a full resident set");
        debug_assert!(!self.contains(page), "page {} already resident", page);
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Remove the page in `slot`, shifting later pages towards the front.
    pub(crate) fn remove(&mut self, slot: usize) -> PageId {
        self.pages.remove(slot)
    }

    /// Overwrite the page in `slot`, returning the page it held.
    pub(crate) fn replace(&mut self, slot: usize, page: PageId) -> PageId {
        debug_assert!(!self.contains(page), "page {} already resident", page);
        std::mem::replace(&mut self.pages[slot], page)
    }
}

impl fmt::Display for ResidentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join_pages(&self.pages))
    }
}

/// Format pages as `a, b, c`.
pub(crate) fn join_pages(pages: &[PageId]) -> String {
    pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
