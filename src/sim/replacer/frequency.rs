//! Frequency-based replacement policies: LFU and MFU.
//!
//! Both count every reference to a page, hit or fault, and never forget a
//! count when the page is evicted. They differ only in which end of the
//! count ordering they evict from.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::replacer::{Placement, Policy, Replacer};

#[derive(Debug, Default)]
struct ReferenceCounts(HashMap<PageId, u64>);

impl ReferenceCounts {
    fn bump(&mut self, page: PageId) {
        *self.0.entry(page).or_insert(0) += 1;
    }

    fn get(&self, page: &PageId) -> u64 {
        self.0.get(page).copied().unwrap_or(0)
    }

    /// First slot whose count wins under `better(candidate, best)`.
    fn pick(&self, resident: &[PageId], better: impl Fn(u64, u64) -> bool) -> usize {
        let mut chosen = 0;
        let mut best = None;
        for (slot, page) in resident.iter().enumerate() {
            let count = self.get(page);
            if best.map_or(true, |b| better(count, b)) {
                best = Some(count);
                chosen = slot;
            }
        }
        chosen
    }
}

/// Evicts the resident page referenced the fewest times.
#[derive(Debug, Default)]
pub struct LfuReplacer {
    counts: ReferenceCounts,
}

impl LfuReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for LfuReplacer {
    fn policy(&self) -> Policy {
        Policy::Lfu
    }

    fn placement(&self) -> Placement {
        Placement::InPlace
    }

    fn record_access(&mut self, page: PageId, _hit: bool) {
        self.counts.bump(page);
    }

    fn victim(&mut self, resident: &[PageId], _upcoming: &[PageId]) -> usize {
        self.counts.pick(resident, |count, best| count < best)
    }
}

/// Evicts the resident page referenced the most times.
#[derive(Debug, Default)]
pub struct MfuReplacer {
    counts: ReferenceCounts,
}

impl MfuReplacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for MfuReplacer {
    fn policy(&self) -> Policy {
        Policy::Mfu
    }

    fn placement(&self) -> Placement {
        Placement::InPlace
    }

    fn record_access(&mut self, page: PageId, _hit: bool) {
        self.counts.bump(page);
    }

    fn victim(&mut self, resident: &[PageId], _upcoming: &[PageId]) -> usize {
        self.counts.pick(resident, |count, best| count > best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: i64) -> PageId {
        PageId::new(n)
    }

    fn touch(replacer: &mut dyn Replacer, pages: &[i64]) {
        for &n in pages {
            replacer.record_access(pid(n), false);
        }
    }

    #[test]
    fn test_lfu_picks_least_counted() {
        let mut replacer = LfuReplacer::new();
        touch(&mut replacer, &[1, 1, 2, 3, 3, 3]);
        assert_eq!(replacer.victim(&[pid(1), pid(2), pid(3)], &[]), 1);
    }

    #[test]
    fn test_lfu_tie_takes_first_slot() {
        let mut replacer = LfuReplacer::new();
        touch(&mut replacer, &[1, 2, 3]);
        assert_eq!(replacer.victim(&[pid(1), pid(2), pid(3)], &[]), 0);
    }

    #[test]
    fn test_mfu_picks_most_counted() {
        let mut replacer = MfuReplacer::new();
        touch(&mut replacer, &[1, 2, 2, 3]);
        assert_eq!(replacer.victim(&[pid(1), pid(2), pid(3)], &[]), 1);
    }

    #[test]
    fn test_counts_survive_eviction() {
        let mut replacer = LfuReplacer::new();
        touch(&mut replacer, &[1, 1, 1, 2, 3]);
        replacer.record_evict(pid(1));
        touch(&mut replacer, &[4]);
        // 1 returns carrying its old count
        touch(&mut replacer, &[1]);
        assert_eq!(replacer.victim(&[pid(1), pid(3), pid(4)], &[]), 1);
    }
}
