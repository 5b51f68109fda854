//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common::{Error, Page, Result};
use crate::memory::policy::{Access, ReplacementPolicy};
use crate::memory::FrameTable;

/// Evicts pages in the order they were brought in.
///
/// Hits never reorder the queue, so a page that is used constantly is
/// still evicted once it becomes the oldest resident.
#[derive(Debug, Clone)]
pub struct FifoPolicy {
    frames: FrameTable,

    /// Resident pages in insertion order (front = oldest).
    queue: VecDeque<Page>,
}

impl FifoPolicy {
    /// Create a FIFO engine with `capacity` empty frames.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            queue: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Resident pages, oldest first.
    pub fn queue(&self) -> impl Iterator<Item = Page> + '_ {
        self.queue.iter().copied()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn access(&mut self, page: Page) -> Result<Access> {
        if let Some(slot) = self.frames.slot_of(page) {
            trace!("fifo hit: {} in {}", page, slot);
            return Ok(Access::hit(slot));
        }

        let (slot, evicted) = match self.frames.first_empty() {
            Some(slot) => (slot, None),
            None => {
                let victim = self.queue.pop_front().ok_or_else(|| {
                    Error::InvariantViolation("fifo queue empty with full frames".into())
                })?;
                let slot = self.frames.slot_of(victim).ok_or_else(|| {
                    Error::InvariantViolation(format!("fifo victim {} not resident", victim))
                })?;
                (slot, Some(victim))
            }
        };

        self.frames.place(slot, page)?;
        self.queue.push_back(page);
        debug!("fifo fault: {} -> {} (evicted {:?})", page, slot, evicted);
        Ok(Access::fault(slot, evicted))
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
