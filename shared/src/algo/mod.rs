//! Numeric helpers for sampled fields
//!
//! Grid construction mirrors the `linspace`/`meshgrid` conventions used
//! throughout the simulator: arrays are indexed `[row, col] = [y, x]`.

pub mod grid;
pub mod stats;

pub use grid::{linspace, meshgrid};
pub use stats::{masked_stats, MaskedStats};
