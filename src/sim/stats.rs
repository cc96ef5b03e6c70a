//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated over one simulation run.
///
/// The simulator is single-threaded and owns its stats, so plain counters
/// suffice. The struct is `Copy` and can be handed to renderers as-is.
///
/// # Example
/// ```
/// use pagesim::SimulationStats;
///
/// let mut stats = SimulationStats::new();
/// stats.record(true, false);
/// stats.record(false, false);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// References processed so far.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that also pushed a page out.
    pub evictions: u64,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one processed reference.
    pub fn record(&mut self, fault: bool, evicted: bool) {
        self.references += 1;
        if fault {
            self.faults += 1;
        } else {
            self.hits += 1;
        }
        if evicted {
            self.evictions += 1;
        }
    }

    /// Hit rate (0.0 to 1.0); zero when nothing was processed.
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Hit rate as a percentage.
    pub fn hit_ratio_percent(&self) -> f64 {
        self.hit_rate() * 100.0
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_ratio_percent()
        )
    }
}
