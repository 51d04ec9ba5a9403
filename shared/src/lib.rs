//! Shared components and utilities for the sunspot lab crates.
//!
//! This crate holds the pieces that are not specific to solar physics:
//! sampling grids, masked statistics over 2D fields, conversion of intensity
//! arrays into images, seeded noise fields and command-line range parsing.

pub mod algo;
pub mod image_proc;
pub mod range_arg;
