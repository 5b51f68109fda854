//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Two families live here:
/// - Configuration errors, raised before any simulation step runs.
/// - Invariant violations, which signal a bug in an engine and abort the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame capacity was zero or negative.
    #[error("Invalid frame capacity: {0} (must be at least 1)")]
    InvalidCapacity(i64),

    /// The policy selector did not name one of the four policies.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// A page reference token was not a single symbol.
    #[error("Invalid page reference: {0:?}")]
    InvalidPage(String),

    /// A slot index fell outside `[0, capacity)`.
    ///
    /// This indicates a bug in an engine, never bad user input.
    #[error("Slot {slot} out of bounds for {capacity} frames")]
    SlotOutOfBounds { slot: usize, capacity: usize },

    /// Engine state no longer satisfies its own invariants.
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),

    /// I/O error while writing a trace.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was caused by user-supplied configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCapacity(_) | Error::UnknownPolicy(_) | Error::InvalidPage(_)
        )
    }
}
