//! Page replacement simulation.
//!
//! # Components
//! - [`Simulator`] - The step loop over a reference string
//! - [`ResidentSet`] - Pages currently held in frames
//! - [`StepRecord`] / [`SimulationLog`] - What renderers receive
//! - [`SimulationStats`] - Fault and hit counters
//! - [`replacer`] - Eviction policy implementations
//! - [`compare`](mod@compare) - Every policy over the same input

pub mod compare;
pub mod replacer;
pub(crate) mod resident_set;
mod simulator;
mod stats;
mod step_record;

pub use compare::{compare, ComparisonRow, ComparisonTable};
pub use resident_set::ResidentSet;
pub use simulator::{SimulationInput, Simulator};
pub use stats::SimulationStats;
pub use step_record::{SimulationLog, StepRecord};
