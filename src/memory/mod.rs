//! Simulated physical memory and its replacement policies.
//!
//! # Components
//! - [`FrameTable`] - Fixed set of frame slots, each holding at most one page
//! - [`SlotState`] - What a slot looked like after a step (for reporting)
//! - [`FaultStats`] - Hit/fault/eviction counters for one run
//! - [`policy`] - The FIFO, LRU, Clock and Optimal engines

mod frame_table;
pub mod policy;
mod stats;

pub use frame_table::{FrameTable, SlotState};
pub use stats::FaultStats;
