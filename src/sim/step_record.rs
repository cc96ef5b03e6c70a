//! Per-step records and the completed simulation log.

use crate::common::PageId;
use crate::sim::resident_set::join_pages;
use crate::sim::SimulationStats;

/// Everything a renderer needs to show one step.
///
/// Produced once per reference and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Zero-based position in the reference string.
    pub index: usize,

    /// The referenced page.
    pub page: PageId,

    /// Page pushed out by this step, if any.
    pub evicted: Option<PageId>,

    /// Whether the page had to be loaded.
    pub fault: bool,

    /// Resident pages after the step, in slot order.
    pub resident: Vec<PageId>,

    /// Number of frames.
    pub capacity: usize,
}

impl StepRecord {
    /// One-based step number for display.
    pub fn step_number(&self) -> usize {
        self.index + 1
    }

    /// Frames in use after the step.
    pub fn used(&self) -> usize {
        self.resident.len()
    }

    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// `Entered: 4, Removed: 1` / `Entered: 4, Removed: None`.
    pub fn summary_line(&self) -> String {
        let removed = match self.evicted {
            Some(page) => page.to_string(),
            None => "None".to_string(),
        };
        format!("Entered: {}, Removed: {}", self.page, removed)
    }

    /// `Step 3: 1, 2, 3 (Used: 3/3)`.
    pub fn memory_line(&self) -> String {
        format!(
            "Step {}: {} (Used: {}/{})",
            self.step_number(),
            join_pages(&self.resident),
            self.used(),
            self.capacity
        )
    }
}

/// The full result of a run, handed to the renderer on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationLog {
    /// Display label for the algorithm.
    pub label: String,
    pub capacity: usize,
    pub records: Vec<StepRecord>,
    pub stats: SimulationStats,
}

impl SimulationLog {
    /// Header lines of the step log.
    pub fn header(&self) -> [String; 2] {
        [
            format!("Algorithm Used: {}", self.label.to_uppercase()),
            "Steps:".to_string(),
        ]
    }

    /// One `Entered/Removed` line per step.
    pub fn step_lines(&self) -> Vec<String> {
        self.records.iter().map(StepRecord::summary_line).collect()
    }

    /// One occupancy line per step.
    pub fn memory_lines(&self) -> Vec<String> {
        self.records.iter().map(StepRecord::memory_line).collect()
    }

    /// Header followed by the step lines.
    pub fn step_log(&self) -> Vec<String> {
        let mut lines = self.header().to_vec();
        lines.extend(self.step_lines());
        lines
    }

    /// Resident pages after the last step; empty for an empty run.
    pub fn final_frames(&self) -> &[PageId] {
        self.records
            .last()
            .map(|r| r.resident.as_slice())
            .unwrap_or(&[])
    }

    /// Sequence of evictions, one entry per step.
    pub fn evictions(&self) -> Vec<Option<PageId>> {
        self.records.iter().map(|r| r.evicted).collect()
    }
}
