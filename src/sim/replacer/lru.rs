//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::replacer::{Policy, Replacer};

/// Evicts the resident page whose most recent reference is oldest.
///
/// Each reference stamps the page with a logical clock tick.
#[derive(Debug, Default)]
pub struct LruReplacer {
    last_used: HashMap<PageId, u64>,
    tick: u64,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for LruReplacer {
    fn policy(&self) -> Policy {
        Policy::Lru
    }

    fn record_access(&mut self, page: PageId, _hit: bool) {
        self.tick += 1;
        self.last_used.insert(page, self.tick);
    }

    fn record_evict(&mut self, page: PageId) {
        self.last_used.remove(&page);
    }

    fn victim(&mut self, resident: &[PageId], _upcoming: &[PageId]) -> usize {
        resident
            .iter()
            .enumerate()
            .min_by_key(|(_, page)| self.last_used.get(page).copied().unwrap_or(0))
            .map(|(slot, _)| slot)
            .unwrap_or(0)
    }
}
