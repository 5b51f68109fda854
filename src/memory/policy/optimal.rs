//! Optimal (Belady) replacement policy.

use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common::{Error, FrameId, Page, Result};
use crate::memory::policy::Access;
use crate::memory::FrameTable;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Not realizable online: every fault looks ahead through the references
/// that have not been processed yet, which the caller passes to
/// [`access`](OptimalPolicy::access). Its fault count is the lower bound
/// the other policies are measured against.
#[derive(Debug, Clone)]
pub struct OptimalPolicy {
    frames: FrameTable,
}

impl OptimalPolicy {
    /// Create an Optimal engine with `capacity` empty frames.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
        }
    }

    pub fn frames(&self) -> &FrameTable {
        &self.frames
    }

    /// Reference `page`; `future` holds the references strictly after it.
    pub fn access(&mut self, page: Page, future: &[Page]) -> Result<Access> {
        if let Some(slot) = self.frames.slot_of(page) {
            trace!("optimal hit: {} in {}", page, slot);
            return Ok(Access::hit(slot));
        }

        let slot = match self.frames.first_empty() {
            Some(slot) => slot,
            None => self.victim(future)?,
        };
        let evicted = self.frames.place(slot, page)?;

        debug!("optimal fault: {} -> {} (evicted {:?})", page, slot, evicted);
        Ok(Access::fault(slot, evicted))
    }

    /// Pick the slot to replace when every frame is occupied.
    ///
    /// Scans slots in order. The first page that never recurs wins outright;
    /// otherwise the farthest next use wins, ties going to the lower slot.
    fn victim(&self, future: &[Page]) -> Result<FrameId> {
        let mut farthest: Option<(FrameId, usize)> = None;

        for (slot, resident) in self.frames.iter() {
            let Some(resident) = resident else {
                continue;
            };
            match future.iter().position(|&p| p == resident) {
                None => return Ok(slot),
                Some(distance) => {
                    if farthest.map_or(true, |(_, best)| distance > best) {
                        farthest = Some((slot, distance));
                    }
                }
            }
        }

        farthest
            .map(|(slot, _)| slot)
            .ok_or_else(|| Error::InvariantViolation("optimal found no resident page".into()))
    }
}
