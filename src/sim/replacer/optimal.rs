//! Optimal (Belady) replacement policy.

use crate::common::PageId;
use crate::sim::replacer::{Placement, Policy, Replacer};

/// Evicts the page that will not be needed for the longest time.
///
/// Needs the whole reference string up front, so it is only usable in a
/// simulator. A page that never appears again is evicted immediately (the
/// first such slot); otherwise the page with the farthest next use goes,
/// the earliest slot winning ties.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new optimal replacer.
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl Replacer for OptimalReplacer {
    fn policy(&self) -> Policy {
        Policy::Optimal
    }

    fn placement(&self) -> Placement {
        Placement::InPlace
    }

    fn victim(&mut self, resident: &[PageId], upcoming: &[PageId]) -> usize {
        let mut farthest = None;
        let mut chosen = 0;

        for (slot, page) in resident.iter().enumerate() {
            match upcoming.iter().position(|p| p == page) {
                None => return slot,
                Some(next_use) => {
                    if farthest.map_or(true, |f| next_use > f) {
                        farthest = Some(next_use);
                        chosen = slot;
                    }
                }
            }
        }
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(ns: &[i64]) -> Vec<PageId> {
        ns.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_never_used_again_goes_first() {
        let mut replacer = OptimalReplacer::new();
        let resident = pids(&[1, 2, 3]);
        assert_eq!(replacer.victim(&resident, &pids(&[1, 3, 1])), 1);
    }

    #[test]
    fn test_farthest_next_use() {
        let mut replacer = OptimalReplacer::new();
        let resident = pids(&[1, 2, 3]);
        assert_eq!(replacer.victim(&resident, &pids(&[2, 1, 3])), 2);
    }

    #[test]
    fn test_first_unused_slot_wins() {
        let mut replacer = OptimalReplacer::new();
        let resident = pids(&[4, 5, 6]);
        assert_eq!(replacer.victim(&resident, &[]), 0);
    }
}
