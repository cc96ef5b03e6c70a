//! Side-by-side comparison of every replacement policy.

use std::fmt;

use crate::common::{PageId, Result};
use crate::sim::replacer::Policy;
use crate::sim::resident_set::join_pages;
use crate::sim::{SimulationInput, Simulator};

/// Outcome of one policy over a shared input.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub policy: Policy,
    pub faults: u64,
    pub hit_ratio_percent: f64,
    pub final_frames: Vec<PageId>,
}

/// Run every policy in [`Policy::ALL`] over the same references.
///
/// # Errors
/// - `Error::InvalidInput` if the capacity is out of range
pub fn compare(references: &[PageId], capacity: usize) -> Result<Vec<ComparisonRow>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let input = SimulationInput::new(capacity, references.to_vec()).with_policy(policy);
            let log = Simulator::new(input)?.run();
            Ok(ComparisonRow {
                policy,
                faults: log.stats.faults,
                hit_ratio_percent: log.stats.hit_ratio_percent(),
                final_frames: log.final_frames().to_vec(),
            })
        })
        .collect()
}

/// Comparison rows laid out as a fixed-width text table.
///
/// # Example
/// ```
/// use pagesim::sim::{compare, ComparisonTable};
/// use pagesim::PageId;
///
/// let rows = compare(&[PageId::new(1), PageId::new(2)], 1).unwrap();
/// let table = ComparisonTable(&rows).to_string();
/// assert!(table.starts_with("Algorithm"));
/// ```
pub struct ComparisonTable<'a>(pub &'a [ComparisonRow]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<14} {:>17} {:>18}  {}",
            "Algorithm", "Total Page Faults", "Page Hit Ratio (%)", "Final Frame State"
        )?;
        for row in self.0 {
            writeln!(
                f,
                "{:<14} {:>17} {:>18.2}  [{}]",
                row.policy.name(),
                row.faults,
                row.hit_ratio_percent,
                join_pages(&row.final_frames)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(ns: &[i64]) -> Vec<PageId> {
        ns.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_compare_covers_all_policies() {
        let rows = compare(&pids(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3]), 3).unwrap();
        let policies: Vec<Policy> = rows.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[test]
    fn test_optimal_never_worse() {
        let refs = pids(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);
        let rows = compare(&refs, 3).unwrap();
        let optimal = rows.iter().find(|r| r.policy == Policy::Optimal).unwrap();
        assert_eq!(optimal.faults, 9);
        assert!(rows.iter().all(|r| r.faults >= optimal.faults));
    }

    #[test]
    fn test_compare_empty_input() {
        let rows = compare(&[], 2).unwrap();
        assert!(rows.iter().all(|r| r.faults == 0 && r.final_frames.is_empty()));
        assert!(rows.iter().all(|r| r.hit_ratio_percent == 0.0));
    }

    #[test]
    fn test_compare_rejects_zero_frames() {
        assert!(compare(&pids(&[1]), 0).is_err());
    }

    #[test]
    fn test_comparison_table() {
        let rows = compare(&pids(&[1, 2, 1]), 2).unwrap();
        let table = ComparisonTable(&rows).to_string();
        assert!(table.starts_with("Algorithm"));
        assert!(table.contains("Second Chance"));
        assert!(table.contains("33.33"));
        assert!(table.contains("[1, 2]"));
    }
}
