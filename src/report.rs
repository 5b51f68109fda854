//! Step-trace and summary rendering.
//!
//! A [`Reporter`] receives each [`StepOutcome`] as the simulator produces it,
//! then the final [`FaultStats`]. [`TextReporter`] writes the classic trace:
//!
//! ```text
//! Sequence Number: 3
//! Reference: D
//! Page Fault: true
//! Victim: A
//! Frame 1: D
//! Frame 2: B
//! Frame 3: C
//!
//! Total page faults: 4
//! ```

use std::io::Write;

use crate::common::{FrameId, PolicyKind, Result};
use crate::memory::FaultStats;
use crate::simulation::{SimulationResult, StepOutcome};

/// Sink for simulation events.
pub trait Reporter {
    /// Called once per reference, in order.
    fn on_step(&mut self, step: &StepOutcome) -> Result<()>;

    /// Called once after the last step.
    fn on_finish(&mut self, _policy: PolicyKind, _stats: &FaultStats) -> Result<()> {
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_step(&mut self, _step: &StepOutcome) -> Result<()> {
        Ok(())
    }
}

/// Writes a human-readable trace to any writer.
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
    show_steps: bool,
}

impl<W: Write> TextReporter<W> {
    /// Report every step and the total.
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_steps: true,
        }
    }

    /// Report only the total.
    pub fn summary_only(out: W) -> Self {
        Self {
            out,
            show_steps: false,
        }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn on_step(&mut self, step: &StepOutcome) -> Result<()> {
        if !self.show_steps {
            return Ok(());
        }
        writeln!(self.out, "Sequence Number: {}", step.index)?;
        writeln!(self.out, "Reference: {}", step.page)?;
        writeln!(self.out, "Page Fault: {}", step.fault)?;
        if let Some(victim) = step.evicted {
            writeln!(self.out, "Victim: {}", victim)?;
        }
        for (i, slot) in step.frames.iter().enumerate() {
            writeln!(self.out, "{}: {}", FrameId::new(i), slot)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn on_finish(&mut self, _policy: PolicyKind, stats: &FaultStats) -> Result<()> {
        writeln!(self.out, "Total page faults: {}", stats.faults)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Write a side-by-side table of several runs.
pub fn write_comparison<W: Write>(out: &mut W, results: &[SimulationResult]) -> Result<()> {
    writeln!(
        out,
        "{:<8} {:>7} {:>7} {:>9} {:>9}",
        "Policy", "Faults", "Hits", "Evictions", "Hit rate"
    )?;
    for result in results {
        let stats = &result.stats;
        writeln!(
            out,
            "{:<8} {:>7} {:>7} {:>9} {:>8.2}%",
            result.policy,
            stats.faults,
            stats.hits,
            stats.evictions,
            stats.hit_rate() * 100.0
        )?;
    }
    out.flush()?;
    Ok(())
}
