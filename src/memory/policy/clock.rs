//! CLOCK (Second-Chance) replacement policy.
//!
//! Frames form a ring with a single hand. A hit sets the frame's reference
//! flag. On a fault the hand sweeps forward, clearing set flags, and stops
//! at the first frame whose flag is clear; that frame takes the new page.
//!
//! ```text
//!        hand
//!         ↓
//!   [A*] [B ] [C*]      fault on D: A* has its flag set, clear it
//!   [A ] [B ] [C*]      B is clear: evict B, install D*, hand → slot 2
//!   [A ] [D*] [C*]
//! ```

use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common::config::CLOCK_SCAN_LIMIT_FACTOR;
use crate::common::{Error, FrameId, Page, Result};
use crate::memory::policy::{Access, ReplacementPolicy};
use crate::memory::{FrameTable, SlotState};

/// Second-Chance policy with one reference flag per frame.
#[derive(Debug, Clone)]
pub struct ClockPolicy {
    frames: FrameTable,

    /// Reference flag per slot. Empty slots are always clear.
    referenced: Vec<bool>,

    /// Next slot to examine on a fault.
    hand: FrameId,
}

impl ClockPolicy {
    /// Create a Clock engine with `capacity` empty frames and the hand at slot 0.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            referenced: vec![false; capacity.get()],
            hand: FrameId::new(0),
        }
    }

    #[inline]
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Reference flag of `slot`, or `None` if out of range.
    pub fn is_referenced(&self, slot: FrameId) -> Option<bool> {
        self.referenced.get(slot.0).copied()
    }

    /// Sweep from the hand to the first frame with a clear flag.
    ///
    /// Leaves the hand on the returned slot.
    fn sweep(&mut self) -> Result<FrameId> {
        let capacity = self.frames.capacity();
        if self.hand.0 >= capacity {
            return Err(Error::InvariantViolation(format!(
                "clock hand {} outside {} frames",
                self.hand.0, capacity
            )));
        }

        for _ in 0..capacity * CLOCK_SCAN_LIMIT_FACTOR {
            let slot = self.hand;
            if !self.referenced[slot.0] {
                return Ok(slot);
            }
            self.referenced[slot.0] = false;
            trace!("clock: second chance for {}", slot);
            self.hand = slot.next(capacity);
        }

        Err(Error::InvariantViolation(format!(
            "clock sweep did not stop within {} steps",
            capacity * CLOCK_SCAN_LIMIT_FACTOR
        )))
    }
}

impl ReplacementPolicy for ClockPolicy {
    fn access(&mut self, page: Page) -> Result<Access> {
        if let Some(slot) = self.frames.slot_of(page) {
            self.referenced[slot.0] = true;
            trace!("clock hit: {} in {}", page, slot);
            return Ok(Access::hit(slot));
        }

        let slot = self.sweep()?;
        let evicted = self.frames.place(slot, page)?;
        self.referenced[slot.0] = true;
        self.hand = slot.next(self.frames.capacity());

        debug!(
            "clock fault: {} -> {} (evicted {:?}), hand now {}",
            page, slot, evicted, self.hand
        );
        Ok(Access::fault(slot, evicted))
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }

    fn snapshot(&self) -> Vec<SlotState> {
        self.frames
            .pages()
            .iter()
            .zip(&self.referenced)
            .map(|(page, &flag)| SlotState::with_flag(*page, flag))
            .collect()
    }
}
