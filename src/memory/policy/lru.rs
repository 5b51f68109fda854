//! LRU (Least-Recently-Used) replacement policy.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::common::{Error, Page, Result};
use crate::memory::policy::{Access, ReplacementPolicy};
use crate::memory::FrameTable;

/// Evicts the page whose last reference is oldest.
///
/// Every reference, hit or fault, moves the page to the front of the
/// recency list, so the order is total and no tie-break is needed.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    frames: FrameTable,

    /// Resident pages, most recently used at the front.
    recency: VecDeque<Page>,
}

impl LruPolicy {
    /// Create an LRU engine with `capacity` empty frames.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            frames: FrameTable::new(capacity),
            recency: VecDeque::with_capacity(capacity.get()),
        }
    }

    /// Resident pages, most recently used first.
    pub fn recency(&self) -> impl Iterator<Item = Page> + '_ {
        self.recency.iter().copied()
    }

    fn touch(&mut self, page: Page) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page) {
            self.recency.remove(pos);
        }
        self.recency.push_front(page);
    }
}

impl ReplacementPolicy for LruPolicy {
    fn access(&mut self, page: Page) -> Result<Access> {
        if let Some(slot) = self.frames.slot_of(page) {
            self.touch(page);
            trace!("lru hit: {} in {}", page, slot);
            return Ok(Access::hit(slot));
        }

        let (slot, evicted) = if self.frames.is_full() {
            let victim = self.recency.pop_back().ok_or_else(|| {
                Error::InvariantViolation("lru recency list empty with full frames".into())
            })?;
            let slot = self.frames.slot_of(victim).ok_or_else(|| {
                Error::InvariantViolation(format!("lru victim {} not resident", victim))
            })?;
            (slot, Some(victim))
        } else {
            let slot = self.frames.first_empty().ok_or_else(|| {
                Error::InvariantViolation("lru found no empty slot below capacity".into())
            })?;
            (slot, None)
        };

        self.frames.place(slot, page)?;
        self.recency.push_front(page);
        debug!("lru fault: {} -> {} (evicted {:?})", page, slot, evicted);
        Ok(Access::fault(slot, evicted))
    }

    fn frames(&self) -> &FrameTable {
        &self.frames
    }
}
