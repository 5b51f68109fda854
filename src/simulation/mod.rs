//! Simulation driver.
//!
//! # Components
//! - [`Simulator`] - Feeds a reference string through one engine
//! - [`StepOutcome`] - What happened on a single reference
//! - [`SimulationResult`] - Every step of a run plus its totals

mod driver;
mod outcome;

pub use driver::{compare, run, Simulator};
pub use outcome::{SimulationResult, StepOutcome};
