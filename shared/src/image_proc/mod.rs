//! Image handling for rendered intensity fields.
//!
//! # Module Organization
//!
//! - **colormap**: scalar-to-RGB lookup for false-colour rendering
//! - **image**: conversions between ndarray fields and image crate buffers
//! - **io**: PNG output
//! - **noise**: seeded Gaussian noise fields
//!
//! Intensity fields are `Array2<f64>` with values in `[0, 1]`, indexed
//! `[row, col] = [y, x]`.

pub mod colormap;
pub mod image;
pub mod io;
pub mod noise;

pub use colormap::Colormap;
pub use image::{array2_to_gray_image, array2_to_rgb_image, unit_to_u8};
pub use io::{save_rgb_image, save_u8_image, ImageIoError};
pub use noise::{gaussian_field, simple_normal_array};
