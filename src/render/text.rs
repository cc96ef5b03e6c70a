//! Plain-text terminal renderer.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::common::Result;
use crate::render::Renderer;
use crate::sim::resident_set::join_pages;
use crate::sim::{SimulationLog, StepRecord};

/// Draws each step as a row of frame boxes, then prints the summary.
///
/// ```text
/// Step 4: Processing Page 4
/// [ 2 ] [ 3 ] [*4*]
/// Page Fault | Entering: 4 | Removed: 1 | Used: 3/3
/// ```
///
/// With `animate` off the per-step frames are skipped and only the summary
/// is written. The delay runs after every drawn step and cannot be cut
/// short; it never affects what is computed.
pub struct TextRenderer<W: Write> {
    out: W,
    delay: Duration,
    animate: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            animate: true,
        }
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Frame row with `capacity` boxes; empty slots show `-`.
    fn frame_row(record: &StepRecord) -> String {
        (0..record.capacity)
            .map(|slot| match record.resident.get(slot) {
                Some(&page) if record.fault && page == record.page => format!("[*{}*]", page),
                Some(page) => format!("[ {} ]", page),
                None => "[ - ]".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_step(&mut self, record: &StepRecord) -> Result<()> {
        if !self.animate {
            return Ok(());
        }

        let status = if record.fault { "Page Fault" } else { "Page Hit" };
        let removed = record
            .evicted
            .map(|p| p.to_string())
            .unwrap_or_else(|| "None".to_string());

        writeln!(
            self.out,
            "Step {}: Processing Page {}",
            record.step_number(),
            record.page
        )?;
        writeln!(self.out, "{}", Self::frame_row(record))?;
        writeln!(
            self.out,
            "{} | Entering: {} | Removed: {} | Used: {}/{}",
            status,
            record.page,
            removed,
            record.used(),
            record.capacity
        )?;
        writeln!(self.out)?;
        self.out.flush()?;

        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }

    fn complete(&mut self, log: &SimulationLog) -> Result<()> {
        writeln!(self.out, "Summary")?;
        for line in log.step_log() {
            writeln!(self.out, "{}", line)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Memory Usage:")?;
        for line in log.memory_lines() {
            writeln!(self.out, "{}", line)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "Total Page Faults: {}", log.stats.faults)?;
        writeln!(
            self.out,
            "Page Hit Ratio: {:.2}%",
            log.stats.hit_ratio_percent()
        )?;
        writeln!(
            self.out,
            "Final Frame State: [{}]",
            join_pages(log.final_frames())
        )?;
        self.out.flush()?;
        Ok(())
    }
}
