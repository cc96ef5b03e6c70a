//! Presentation of simulation steps.
//!
//! The simulator never waits or draws; it hands each [`StepRecord`] to a
//! [`Renderer`] and, once the reference string is exhausted, the full
//! [`SimulationLog`]. Pacing belongs to the renderer.

mod text;

pub use text::TextRenderer;

use crate::common::Result;
use crate::sim::{SimulationLog, StepRecord};

/// Receives computed simulation state for display.
pub trait Renderer {
    /// Show one step. Called once per reference, in order.
    fn render_step(&mut self, record: &StepRecord) -> Result<()>;

    /// Show the completed run. Called exactly once, after the last step.
    fn complete(&mut self, log: &SimulationLog) -> Result<()>;
}

/// Discards every step. Useful when only the final log matters.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render_step(&mut self, _record: &StepRecord) -> Result<()> {
        Ok(())
    }

    fn complete(&mut self, _log: &SimulationLog) -> Result<()> {
        Ok(())
    }
}
