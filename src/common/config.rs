//! Configuration constants and validated run settings for pagesim.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::common::{Error, Result};

/// Smallest frame table a simulation accepts.
pub const MIN_CAPACITY: usize = 1;

/// Label printed for a slot that holds no page.
pub const EMPTY_SLOT_LABEL: &str = "null";

/// Suffix printed after a Clock slot whose reference flag is set.
pub const REFERENCED_MARKER: char = '*';

/// Upper bound on Clock hand moves per fault, as a multiple of capacity.
///
/// One pass can clear every flag; the second pass must then stop on the
/// first slot it visits.
pub const CLOCK_SCAN_LIMIT_FACTOR: usize = 2;

/// The four replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-In-First-Out.
    Fifo,
    /// Least-Recently-Used.
    Lru,
    /// Second-Chance / Clock.
    Clock,
    /// Belady's optimal policy (requires lookahead).
    Optimal,
}

impl PolicyKind {
    /// Every policy, in the order `compare` reports them.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Clock,
        PolicyKind::Optimal,
    ];

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Clock => "clock",
            PolicyKind::Optimal => "optimal",
        }
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Accepts policy names and the legacy numeric selectors
    /// (`1` FIFO, `2` LRU, `3` Optimal, `4` Clock).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "fifo" => Ok(PolicyKind::Fifo),
            "2" | "lru" => Ok(PolicyKind::Lru),
            "3" | "optimal" | "opt" | "belady" => Ok(PolicyKind::Optimal),
            "4" | "clock" | "second-chance" | "second_chance" => Ok(PolicyKind::Clock),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Clock => "Clock",
            PolicyKind::Optimal => "Optimal",
        };
        f.pad(label)
    }
}

/// Validated settings for one simulation run.
///
/// # Example
/// ```
/// use pagesim::{PolicyKind, SimConfig};
///
/// let config = SimConfig::new(PolicyKind::Lru, 3).unwrap();
/// assert_eq!(config.capacity(), 3);
/// assert!(SimConfig::new(PolicyKind::Lru, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    policy: PolicyKind,
    capacity: NonZeroUsize,
}

impl SimConfig {
    /// Validate a policy and a frame capacity.
    ///
    /// Capacity is taken as a signed value so non-positive input from the
    /// command line is reported rather than wrapped.
    pub fn new(policy: PolicyKind, capacity: i64) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        Ok(Self { policy, capacity })
    }

    /// Parse both settings from their textual form.
    pub fn parse(policy: &str, capacity: i64) -> Result<Self> {
        let policy = policy.parse()?;
        Self::new(policy, capacity)
    }

    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.policy
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Capacity in the form the engine constructors take.
    #[inline]
    pub fn frames(&self) -> NonZeroUsize {
        self.capacity
    }
}

/// Check that `capacity` is at least [`MIN_CAPACITY`].
pub fn validate_capacity(capacity: i64) -> Result<NonZeroUsize> {
    usize::try_from(capacity)
        .ok()
        .filter(|&c| c >= MIN_CAPACITY)
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| {
            log::debug!("rejecting frame capacity {}", capacity);
            Error::InvalidCapacity(capacity)
        })
}
