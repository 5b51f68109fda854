//! Page replacement policies.
//!
//! Implements:
//! - [`FifoPolicy`] - First-In-First-Out
//! - [`LruPolicy`] - Least-Recently-Used
//! - [`ClockPolicy`] - Second-Chance with a circular hand
//! - [`OptimalPolicy`] - Belady's algorithm, needs the future reference string
//!
//! The three online policies share the [`ReplacementPolicy`] trait. Optimal
//! cannot, because its step needs the references that have not happened yet,
//! so [`Engine`] is the one type that drives all four.

mod clock;
mod fifo;
mod lru;
mod optimal;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use std::num::NonZeroUsize;

use crate::common::{Error, FrameId, Page, PolicyKind, Result, SimConfig};
use crate::memory::{FrameTable, SlotState};

/// Result of one reference against one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    /// Whether the page had to be brought in.
    pub fault: bool,

    /// Page displaced to make room, if any.
    pub evicted: Option<Page>,

    /// Slot that holds the referenced page after the step.
    pub slot: FrameId,
}

impl Access {
    #[inline]
    pub fn hit(slot: FrameId) -> Self {
        Self {
            fault: false,
            evicted: None,
            slot,
        }
    }

    #[inline]
    pub fn fault(slot: FrameId, evicted: Option<Page>) -> Self {
        Self {
            fault: true,
            evicted,
            slot,
        }
    }
}

/// A policy that decides using only the past and the current reference.
pub trait ReplacementPolicy {
    /// Reference `page`, updating frames and policy state.
    fn access(&mut self, page: Page) -> Result<Access>;

    /// Current frame contents.
    fn frames(&self) -> &FrameTable;

    /// Frame contents for reporting.
    fn snapshot(&self) -> Vec<SlotState> {
        self.frames().snapshot()
    }
}

/// One engine per policy, owned by a single simulation run.
#[derive(Debug, Clone)]
pub enum Engine {
    Fifo(FifoPolicy),
    Lru(LruPolicy),
    Clock(ClockPolicy),
    Optimal(OptimalPolicy),
}

impl Engine {
    /// Create a fresh engine with `capacity` empty frames.
    pub fn new(kind: PolicyKind, capacity: NonZeroUsize) -> Self {
        match kind {
            PolicyKind::Fifo => Engine::Fifo(FifoPolicy::new(capacity)),
            PolicyKind::Lru => Engine::Lru(LruPolicy::new(capacity)),
            PolicyKind::Clock => Engine::Clock(ClockPolicy::new(capacity)),
            PolicyKind::Optimal => Engine::Optimal(OptimalPolicy::new(capacity)),
        }
    }

    /// Create the engine a validated config asks for.
    pub fn from_config(config: SimConfig) -> Self {
        Self::new(config.policy(), config.frames())
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Engine::Fifo(_) => PolicyKind::Fifo,
            Engine::Lru(_) => PolicyKind::Lru,
            Engine::Clock(_) => PolicyKind::Clock,
            Engine::Optimal(_) => PolicyKind::Optimal,
        }
    }

    /// Process `references[position]`.
    ///
    /// Only Optimal looks at `references[position + 1..]`.
    pub fn step(&mut self, position: usize, references: &[Page]) -> Result<Access> {
        let page = *references.get(position).ok_or_else(|| {
            Error::InvariantViolation(format!(
                "step {} past end of {} references",
                position,
                references.len()
            ))
        })?;

        match self {
            Engine::Fifo(policy) => policy.access(page),
            Engine::Lru(policy) => policy.access(page),
            Engine::Clock(policy) => policy.access(page),
            Engine::Optimal(policy) => policy.access(page, &references[position + 1..]),
        }
    }

    pub fn frames(&self) -> &FrameTable {
        match self {
            Engine::Fifo(policy) => policy.frames(),
            Engine::Lru(policy) => policy.frames(),
            Engine::Clock(policy) => policy.frames(),
            Engine::Optimal(policy) => policy.frames(),
        }
    }

    pub fn snapshot(&self) -> Vec<SlotState> {
        match self {
            Engine::Fifo(policy) => policy.snapshot(),
            Engine::Lru(policy) => policy.snapshot(),
            Engine::Clock(policy) => policy.snapshot(),
            Engine::Optimal(policy) => policy.frames().snapshot(),
        }
    }
}
