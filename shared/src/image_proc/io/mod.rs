//! Image file output.
//!
//! Writes rendered fields to standard image formats. The format is chosen
//! by the image crate from the file extension; missing parent directories
//! are created so binaries can point at `plots/...` without preparation.

use std::path::Path;

use image::RgbImage;
use ndarray::Array2;
use thiserror::Error;

use super::image::array2_to_gray_image;

/// Errors raised while writing images
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("Failed to create output directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

fn ensure_parent_dir(path: &Path) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Save an 8-bit grayscale array to disk.
///
/// # Arguments
/// * `image` - 2D array of u8 pixel values
/// * `path` - Output file path; the extension selects the format
pub fn save_u8_image<P: AsRef<Path>>(image: &Array2<u8>, path: P) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    array2_to_gray_image(image).save(path)?;
    log::debug!("Wrote {}x{} grayscale image to {}", image.ncols(), image.nrows(), path.display());
    Ok(())
}

/// Save an RGB image to disk, creating parent directories as needed.
pub fn save_rgb_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    image.save(path)?;
    log::debug!("Wrote {}x{} RGB image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_save_u8_image_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("disk.png");

        save_u8_image(&array![[0u8, 255], [128, 64]], &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(reloaded.dimensions(), (2, 2));
        assert_eq!(reloaded.get_pixel(1, 0)[0], 255);
        assert_eq!(reloaded.get_pixel(0, 1)[0], 128);
    }

    #[test]
    fn test_save_rgb_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        let img = RgbImage::from_pixel(3, 1, image::Rgb([255, 10, 0]));
        save_rgb_image(&img, &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.get_pixel(2, 0).0, [255, 10, 0]);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("disk.unknownext");

        let result = save_u8_image(&array![[1u8]], &path);
        assert!(matches!(result, Err(ImageIoError::Encode(_))));
    }
}
