//! Noise fields for procedural image generation
//!
//! - **generate**: seeded Gaussian fields used for surface texture

pub mod generate;

pub use generate::{gaussian_field, simple_normal_array};
