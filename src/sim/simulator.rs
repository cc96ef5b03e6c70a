//! Simulator - the step loop driving a replacer over a reference string.
//!
//! The [`Simulator`] provides:
//! - One step per reference, strictly in input order
//! - A [`StepRecord`] per step for renderers
//! - A [`SimulationLog`] once the reference string is exhausted

use log::{debug, trace};

use crate::common::config::MAX_FRAMES;
use crate::common::{Error, PageId, Result};
use crate::render::Renderer;
use crate::sim::replacer::{Placement, Policy, Replacer};
use crate::sim::{ResidentSet, SimulationLog, SimulationStats, StepRecord};

/// Validated inputs for one run.
///
/// The label is cosmetic: it is shown in the step log header and never
/// changes behavior. The policy decides eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationInput {
    pub capacity: usize,
    pub references: Vec<PageId>,
    pub policy: Policy,
    pub label: String,
}

impl SimulationInput {
    /// A FIFO run labelled with the policy name.
    pub fn new(capacity: usize, references: Vec<PageId>) -> Self {
        let policy = Policy::default();
        Self {
            capacity,
            references,
            policy,
            label: policy.name().to_string(),
        }
    }

    /// Switch policy; the label follows unless it was set explicitly.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        if self.label == self.policy.name() {
            self.label = policy.name().to_string();
        }
        self.policy = policy;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Reject capacities the simulator cannot honor.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the capacity is 0 or above [`MAX_FRAMES`]
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::invalid("frame count must be a positive integer"));
        }
        if self.capacity > MAX_FRAMES {
            return Err(Error::invalid(format!(
                "frame count {} exceeds the maximum of {}",
                self.capacity, MAX_FRAMES
            )));
        }
        Ok(())
    }
}

/// Drives a [`Replacer`] over a reference string one reference at a time.
///
/// # Usage
/// ```
/// use pagesim::{PageId, SimulationInput, Simulator};
///
/// let refs = [7, 7, 8, 7].into_iter().map(PageId::new).collect();
/// let log = Simulator::new(SimulationInput::new(1, refs)).unwrap().run();
///
/// assert_eq!(log.stats.faults, 3);
/// assert_eq!(log.final_frames(), &[PageId::new(7)]);
/// ```
pub struct Simulator {
    references: Vec<PageId>,
    resident: ResidentSet,
    replacer: Box<dyn Replacer>,
    position: usize,
    records: Vec<StepRecord>,
    stats: SimulationStats,
    label: String,
}

impl Simulator {
    /// Create a simulator using the input's policy.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if the capacity is out of range
    pub fn new(input: SimulationInput) -> Result<Self> {
        let replacer = input.policy.build();
        Self::with_replacer(input, replacer)
    }

    /// Create a simulator around a caller-supplied replacer.
    pub fn with_replacer(input: SimulationInput, replacer: Box<dyn Replacer>) -> Result<Self> {
        input.validate()?;
        debug!(
            "simulating {} references over {} frames with {} (label {:?})",
            input.references.len(),
            input.capacity,
            replacer.policy(),
            input.label
        );

        Ok(Self {
            resident: ResidentSet::new(input.capacity),
            records: Vec::with_capacity(input.references.len()),
            references: input.references,
            replacer,
            position: 0,
            stats: SimulationStats::new(),
            label: input.label,
        })
    }

    pub fn capacity(&self) -> usize {
        self.resident.capacity()
    }

    pub fn resident(&self) -> &[PageId] {
        self.resident.as_slice()
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn policy(&self) -> Policy {
        self.replacer.policy()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// True once every reference has been processed.
    pub fn is_finished(&self) -> bool {
        self.position >= self.references.len()
    }

    /// Records produced so far.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Process the next reference.
    ///
    /// Returns `None` once the reference string is exhausted.
    pub fn step(&mut self) -> Option<StepRecord> {
        let index = self.position;
        let page = *self.references.get(index)?;
        let upcoming = &self.references[index + 1..];
        self.position += 1;

        let hit = self.resident.contains(page);
        self.replacer.record_access(page, hit);

        let evicted = if hit {
            None
        } else {
            admit(&mut self.resident, self.replacer.as_mut(), page, upcoming)
        };

        self.stats.record(!hit, evicted.is_some());
        trace!(
            "step {}: page {} {} evicted {:?} -> [{}]",
            index + 1,
            page,
            if hit { "hit" } else { "fault" },
            evicted,
            self.resident
        );

        let record = StepRecord {
            index,
            page,
            evicted,
            fault: !hit,
            resident: self.resident.to_vec(),
            capacity: self.resident.capacity(),
        };
        self.records.push(record.clone());
        Some(record)
    }

    /// Run to completion without rendering.
    pub fn run(mut self) -> SimulationLog {
        while self.step().is_some() {}
        self.into_log()
    }

    /// Run to completion, handing each step and then the log to `renderer`.
    ///
    /// # Errors
    /// Propagates the renderer's errors; the simulation itself cannot fail.
    pub fn run_with<R: Renderer + ?Sized>(mut self, renderer: &mut R) -> Result<SimulationLog> {
        while let Some(record) = self.step() {
            renderer.render_step(&record)?;
        }
        let log = self.into_log();
        renderer.complete(&log)?;
        Ok(log)
    }

    /// Finish the run, keeping whatever records were produced.
    pub fn into_log(self) -> SimulationLog {
        debug!("simulation finished: {}", self.stats);
        SimulationLog {
            label: self.label,
            capacity: self.resident.capacity(),
            records: self.records,
            stats: self.stats,
        }
    }
}

impl Iterator for Simulator {
    type Item = StepRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

/// Load `page` after a fault, evicting if the set is full.
fn admit(
    resident: &mut ResidentSet,
    replacer: &mut dyn Replacer,
    page: PageId,
    upcoming: &[PageId],
) -> Option<PageId> {
    if !resident.is_full() {
        let slot = resident.push_back(page);
        replacer.record_insert(page, slot);
        return None;
    }

    let slot = replacer.victim(resident.as_slice(), upcoming);
    debug_assert!(slot < resident.len(), "victim slot {} out of range", slot);

    let (evicted, slot) = match replacer.placement() {
        Placement::Append => {
            let evicted = resident.remove(slot);
            (evicted, resident.push_back(page))
        }
        Placement::InPlace => (resident.replace(slot, page), slot),
    };
    replacer.record_evict(evicted);
    replacer.record_insert(page, slot);
    Some(evicted)
}
