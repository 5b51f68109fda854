//! Fault statistics for a simulation run.

use std::fmt;

use crate::memory::policy::Access;

/// Counters accumulated over one run.
///
/// A run is single-threaded, so these are plain integers updated by the
/// driver after every step.
///
/// # Example
/// ```
/// use pagesim::FaultStats;
///
/// let stats = FaultStats::new();
/// assert_eq!(stats.faults, 0);
/// assert_eq!(stats.hit_rate(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStats {
    /// Number of references processed.
    pub references: u64,

    /// References whose page was not resident.
    pub faults: u64,

    /// References whose page was already resident.
    pub hits: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl FaultStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one step.
    pub fn record(&mut self, access: &Access) {
        self.references += 1;
        if access.fault {
            self.faults += 1;
            if access.evicted.is_some() {
                self.evictions += 1;
            }
        } else {
            self.hits += 1;
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.references)
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        ratio(self.faults, self.references)
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

impl fmt::Display for FaultStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
