//! pagesim - A step-by-step simulator for virtual-memory page replacement.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │         CLI (main.rs) + Reporter (report.rs)            │   │
//! │  │     arguments → SimConfig        steps → text trace     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Simulation Driver (simulation/)              │   │
//! │  │      Simulator::run → Vec<StepOutcome> + FaultStats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Replacement Engines (memory/policy/)         │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     FIFO  |  LRU  |  CLOCK  |  Optimal (Belady)  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │          FrameTable (one per engine, per run)            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Page, FrameId, Error, config)
//! - [`memory`] - Frame table, statistics, and the replacement policies
//! - [`simulation`] - Runs a reference string through an engine
//! - [`report`] - Renders step traces and comparison tables
//!
//! # Quick Start
//! ```
//! use pagesim::{Page, PolicyKind, SimConfig, Simulator};
//!
//! let config = SimConfig::new(PolicyKind::Lru, 3).unwrap();
//! let refs = Page::parse_sequence("ABCABDABCD");
//!
//! let result = Simulator::new(config).run(&refs).unwrap();
//! assert_eq!(result.total_faults(), 6);
//! ```

pub mod common;
pub mod memory;
pub mod report;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, Page, PolicyKind, Result, SimConfig};

pub use memory::policy::{
    Access, ClockPolicy, Engine, FifoPolicy, LruPolicy, OptimalPolicy, ReplacementPolicy,
};
pub use memory::{FaultStats, FrameTable, SlotState};
pub use report::{NullReporter, Reporter, TextReporter};
pub use simulation::{compare, run, SimulationResult, Simulator, StepOutcome};
