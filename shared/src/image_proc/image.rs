//! Conversions between ndarray intensity fields and image crate buffers.
//!
//! - **ndarray**: matrix indexing `[row, col] = [y, x]` with `(height, width)` dimensions
//! - **image crate**: graphics indexing `(x, y)` with `(width, height)` dimensions

use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;

use super::colormap::Colormap;

/// Quantise a unit intensity field to 8 bits.
///
/// Values are clamped to `[0, 1]` before scaling; NaN becomes 0.
pub fn unit_to_u8(field: &Array2<f64>) -> Array2<u8> {
    field.mapv(|v| {
        if v.is_nan() {
            0
        } else {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
    })
}

/// Convert an 8-bit array into a `GrayImage`.
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([arr[[y as usize, x as usize]]])
    })
}

/// Render a unit intensity field to RGB through a colormap.
pub fn array2_to_rgb_image(field: &Array2<f64>, colormap: Colormap) -> RgbImage {
    let (height, width) = field.dim();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        Rgb(colormap.rgb(field[[y as usize, x as usize]]))
    })
}
