//! Step and run outcomes.

use crate::common::{Page, PolicyKind};
use crate::memory::{FaultStats, SlotState};

/// One reference and its effect on the frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Position in the reference string (0-based).
    pub index: usize,

    /// The page referenced.
    pub page: Page,

    /// Whether the reference faulted.
    pub fault: bool,

    /// Page evicted to make room, if any.
    pub evicted: Option<Page>,

    /// Frame contents after the step, in slot order.
    pub frames: Vec<SlotState>,
}

impl StepOutcome {
    /// Resident pages after the step, in slot order.
    pub fn resident(&self) -> impl Iterator<Item = Page> + '_ {
        self.frames.iter().filter_map(|slot| slot.page)
    }
}

/// The full record of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub policy: PolicyKind,
    pub capacity: usize,
    pub steps: Vec<StepOutcome>,
    pub stats: FaultStats,
}

impl SimulationResult {
    #[inline]
    pub fn total_faults(&self) -> u64 {
        self.stats.faults
    }

    /// Frame contents after the last step, or `None` for an empty run.
    pub fn final_frames(&self) -> Option<&[SlotState]> {
        self.steps.last().map(|step| step.frames.as_slice())
    }
}
