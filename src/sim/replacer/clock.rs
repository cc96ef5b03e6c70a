//! Second Chance (CLOCK) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::replacer::{Placement, Policy, Replacer};

/// FIFO with a reference bit per page.
///
/// A page's bit is set when it loads and on every hit. When a victim is
/// needed the hand sweeps the slots: a set bit is cleared and the hand moves
/// on, the first page found with a clear bit is replaced in place and the
/// hand advances past it. The hand stays at slot 0 while frames fill.
#[derive(Debug, Default)]
pub struct ClockReplacer {
    ref_bits: HashMap<PageId, bool>,
    hand: usize,
}

impl ClockReplacer {
    /// Create a new clock replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot the hand currently points at.
    pub fn hand(&self) -> usize {
        self.hand
    }
}

impl Replacer for ClockReplacer {
    fn policy(&self) -> Policy {
        Policy::SecondChance
    }

    fn placement(&self) -> Placement {
        Placement::InPlace
    }

    fn record_access(&mut self, page: PageId, hit: bool) {
        if hit {
            self.ref_bits.insert(page, true);
        }
    }

    fn record_insert(&mut self, page: PageId, _slot: usize) {
        self.ref_bits.insert(page, true);
    }

    fn record_evict(&mut self, page: PageId) {
        self.ref_bits.remove(&page);
    }

    fn victim(&mut self, resident: &[PageId], _upcoming: &[PageId]) -> usize {
        let frames = resident.len();
        self.hand %= frames;

        // Terminates within two sweeps: the first clears every bit.
        loop {
            let page = resident[self.hand];
            let bit = self.ref_bits.entry(page).or_insert(false);
            if *bit {
                *bit = false;
                self.hand = (self.hand + 1) % frames;
            } else {
                let slot = self.hand;
                self.hand = (self.hand + 1) % frames;
                return slot;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: i64) -> PageId {
        PageId::new(n)
    }

    fn loaded(pages: &[i64]) -> (ClockReplacer, Vec<PageId>) {
        let mut replacer = ClockReplacer::new();
        let resident: Vec<PageId> = pages.iter().copied().map(pid).collect();
        for (slot, page) in resident.iter().enumerate() {
            replacer.record_insert(*page, slot);
        }
        (replacer, resident)
    }

    #[test]
    fn test_all_bits_set_wraps_to_start() {
        let (mut replacer, resident) = loaded(&[1, 2, 3]);
        // Every bit is set: the sweep clears them all and lands on slot 0
        assert_eq!(replacer.victim(&resident, &[]), 0);
        assert_eq!(replacer.hand(), 1);
    }

    #[test]
    fn test_cleared_bit_is_taken() {
        let (mut replacer, mut resident) = loaded(&[1, 2, 3]);
        assert_eq!(replacer.victim(&resident, &[]), 0);
        replacer.record_evict(resident[0]);
        resident[0] = pid(4);
        replacer.record_insert(pid(4), 0);

        // Bits of 2 and 3 were cleared by the first sweep
        assert_eq!(replacer.victim(&resident, &[]), 1);
    }

    #[test]
    fn test_hit_grants_second_chance() {
        let (mut replacer, mut resident) = loaded(&[1, 2, 3]);
        assert_eq!(replacer.victim(&resident, &[]), 0);
        replacer.record_evict(resident[0]);
        resident[0] = pid(4);
        replacer.record_insert(pid(4), 0);

        replacer.record_access(pid(2), true);
        assert_eq!(replacer.victim(&resident, &[]), 2);
    }
}
