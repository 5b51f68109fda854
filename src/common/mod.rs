//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and the validated [`SimConfig`]
//! - Error types
//! - Identifiers ([`Page`], [`FrameId`])

pub mod config;
pub mod error;
mod frame_id;
mod page;

pub use config::{PolicyKind, SimConfig};
pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page::Page;
