//! Eviction policy implementations (replacers).
//!
//! Every policy implements [`Replacer`]: the simulator owns the resident set
//! and asks the replacer which slot to give up when a fault hits a full set.
//!
//! Implemented:
//! - [`FifoReplacer`] - oldest insertion goes first (the default)
//! - [`LruReplacer`] - least recently referenced goes first
//! - [`OptimalReplacer`] - Belady's clairvoyant policy
//! - [`ClockReplacer`] - second chance, reference bits and a sweeping hand
//! - [`LfuReplacer`] / [`MfuReplacer`] - reference-count based

mod clock;
mod fifo;
mod frequency;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId};

pub use clock::ClockReplacer;
pub use fifo::{step, FifoReplacer};
pub use frequency::{LfuReplacer, MfuReplacer};
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// How a new page takes the place of a victim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Victim is removed and the new page appended as the newest.
    Append,
    /// New page is written into the victim's slot.
    InPlace,
}

/// An eviction policy.
///
/// The simulator calls, for each reference in order:
/// 1. [`record_access`](Replacer::record_access) with whether it was a hit
/// 2. on a fault with a full set, [`victim`](Replacer::victim), then
///    [`record_evict`](Replacer::record_evict)
/// 3. on a fault, [`record_insert`](Replacer::record_insert)
pub trait Replacer {
    /// The policy this replacer implements.
    fn policy(&self) -> Policy;

    fn placement(&self) -> Placement {
        Placement::Append
    }

    /// A reference to `page` is being processed.
    fn record_access(&mut self, _page: PageId, _hit: bool) {}

    /// `page` was loaded into `slot`.
    fn record_insert(&mut self, _page: PageId, _slot: usize) {}

    /// `page` left the resident set.
    fn record_evict(&mut self, _page: PageId) {}

    /// Pick the slot to evict from a full, non-empty `resident` set.
    ///
    /// `upcoming` holds the references after the current one, in order.
    /// Must return an index into `resident`.
    fn victim(&mut self, resident: &[PageId], upcoming: &[PageId]) -> usize;
}

/// Selectable replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    #[default]
    Fifo,
    Lru,
    Optimal,
    SecondChance,
    Lfu,
    Mfu,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 6] = [
        Policy::Fifo,
        Policy::Lru,
        Policy::Optimal,
        Policy::SecondChance,
        Policy::Lfu,
        Policy::Mfu,
    ];

    /// Human-readable policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
            Policy::SecondChance => "Second Chance",
            Policy::Lfu => "LFU",
            Policy::Mfu => "MFU",
        }
    }

    /// Build a fresh replacer for this policy.
    pub fn build(&self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
            Policy::SecondChance => Box::new(ClockReplacer::new()),
            Policy::Lfu => Box::new(LfuReplacer::new()),
            Policy::Mfu => Box::new(MfuReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" => Ok(Policy::Optimal),
            "second-chance" | "clock" => Ok(Policy::SecondChance),
            "lfu" => Ok(Policy::Lfu),
            "mfu" => Ok(Policy::Mfu),
            _ => Err(Error::invalid(format!("unknown replacement policy '{}'", s))),
        }
    }
}
