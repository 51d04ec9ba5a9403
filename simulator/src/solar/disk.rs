//! Synthetic solar disk rendering.
//!
//! The disk is sampled on a square grid over `[-1, 1]²` with the solar limb
//! at radius 1. Rendering proceeds in fixed order:
//!
//! 1. Photosphere brightness `1 − k·r²` (limb darkening), plus an optional
//!    periodic texture and Gaussian granulation, clamped to `[0, 1]`
//! 2. Everything beyond the limb set to 0
//! 3. Each sunspot multiplies the field by its umbra/penumbra profile, in
//!    index order, so overlapping spots compound
//! 4. Final clamp to `[0, 1]`

use image::RgbImage;
use ndarray::{Array1, Array2, Zip};
use serde::{Deserialize, Serialize};
use shared::algo::{linspace, masked_stats, meshgrid, MaskedStats};
use shared::image_proc::{array2_to_rgb_image, gaussian_field, unit_to_u8, Colormap};

use super::params::SimulationParameters;
use super::sunspot::{layout_sunspots, SpotRegion, SpotShading, Sunspot};

/// Rendering options that do not change the physics of the spots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Samples per axis
    pub resolution: usize,
    /// Limb darkening coefficient k in `1 − k·r²`
    pub limb_darkening: f64,
    /// Amplitude of the `sin(f·x)·cos(f·y)` surface texture
    pub texture_amplitude: f64,
    /// Spatial frequency f of the surface texture (radians per solar radius)
    pub texture_frequency: f64,
    /// Standard deviation of the additive granulation noise
    pub granulation_std_dev: f64,
    /// Seed for the granulation noise; `None` draws a fresh pattern
    pub seed: Option<u64>,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            resolution: 300,
            limb_darkening: 0.5,
            texture_amplitude: 0.0,
            texture_frequency: 20.0,
            granulation_std_dev: 0.0,
            seed: None,
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0
fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Rendered disk together with the spot layout that shaped it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarDiskImage {
    intensity: Array2<f64>,
    coordinates: Array1<f64>,
    spots: Vec<Sunspot>,
}

impl SolarDiskImage {
    /// Intensity samples in `[0, 1]`, indexed `[row, col] = [y, x]`
    pub fn intensity(&self) -> &Array2<f64> {
        &self.intensity
    }

    /// Consume the image, keeping only the intensity field
    pub fn into_intensity(self) -> Array2<f64> {
        self.intensity
    }

    /// Sample coordinate along either axis
    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    /// Samples per axis
    pub fn resolution(&self) -> usize {
        self.coordinates.len()
    }

    /// Spots in the order they were applied
    pub fn spots(&self) -> &[Sunspot] {
        &self.spots
    }

    fn mask_where<F>(&self, predicate: F) -> Array2<bool>
    where
        F: Fn(f64, f64) -> bool,
    {
        let c = &self.coordinates;
        Array2::from_shape_fn(self.intensity.dim(), |(row, col)| predicate(c[col], c[row]))
    }

    /// Samples on or inside the limb
    pub fn disk_mask(&self) -> Array2<bool> {
        self.mask_where(|x, y| x.hypot(y) <= 1.0)
    }

    /// On-disk samples inside the umbra of `spot`
    pub fn umbra_mask(&self, spot: &Sunspot) -> Array2<bool> {
        self.mask_where(|x, y| x.hypot(y) <= 1.0 && spot.region(x, y) == SpotRegion::Umbra)
    }

    /// On-disk samples inside the penumbra ring of `spot`
    pub fn penumbra_mask(&self, spot: &Sunspot) -> Array2<bool> {
        self.mask_where(|x, y| x.hypot(y) <= 1.0 && spot.region(x, y) == SpotRegion::Penumbra)
    }

    /// On-disk samples untouched by any spot
    pub fn photosphere_mask(&self) -> Array2<bool> {
        self.mask_where(|x, y| {
            x.hypot(y) <= 1.0
                && self
                    .spots
                    .iter()
                    .all(|spot| spot.region(x, y) == SpotRegion::Outside)
        })
    }

    /// Statistics of the intensity over `mask`
    pub fn stats(&self, mask: &Array2<bool>) -> Option<MaskedStats> {
        masked_stats(self.intensity.view(), mask.view())
    }

    /// 8-bit grayscale rendering
    pub fn to_u8(&self) -> Array2<u8> {
        unit_to_u8(&self.intensity)
    }

    /// False-colour rendering
    pub fn to_rgb(&self, colormap: Colormap) -> RgbImage {
        array2_to_rgb_image(&self.intensity, colormap)
    }
}

/// Renders solar disks with a fixed [`DiskConfig`].
#[derive(Debug, Clone, Default)]
pub struct SolarDiskGenerator {
    config: DiskConfig,
}

impl SolarDiskGenerator {
    pub fn new(config: DiskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiskConfig {
        &self.config
    }

    /// Render the disk for `params`.
    ///
    /// Never fails; out-of-domain parameters are clamped and logged.
    pub fn generate(&self, params: &SimulationParameters) -> SolarDiskImage {
        if let Err(e) = params.validate() {
            log::warn!("{}; rendering with clamped values", e);
        }

        let config = &self.config;
        let n = config.resolution;
        let coordinates = linspace(-1.0, 1.0, n);
        let (xx, yy) = meshgrid(&coordinates, &coordinates);

        let mut intensity = Array2::<f64>::zeros((n, n));
        Zip::from(&mut intensity)
            .and(&xx)
            .and(&yy)
            .for_each(|pixel, &x, &y| {
                let r = x.hypot(y);
                let texture = config.texture_amplitude
                    * (config.texture_frequency * x).sin()
                    * (config.texture_frequency * y).cos();
                *pixel = unit_clamp(1.0 - config.limb_darkening * r * r + texture);
            });

        if config.granulation_std_dev > 0.0 {
            let granulation = gaussian_field((n, n), config.granulation_std_dev, config.seed);
            Zip::from(&mut intensity)
                .and(&granulation)
                .for_each(|pixel, &noise| *pixel = unit_clamp(*pixel + noise));
        }

        // Background beyond the limb
        Zip::from(&mut intensity)
            .and(&xx)
            .and(&yy)
            .for_each(|pixel, &x, &y| {
                if x.hypot(y) > 1.0 {
                    *pixel = 0.0;
                }
            });

        let spots = layout_sunspots(params.spot_count, params.spot_size_percent);
        let shading = SpotShading::from_intensity_percent(params.spot_intensity_percent);
        log::debug!(
            "Rendering {}x{} disk with {} spot(s), umbra x{:.3}, penumbra up to x{:.3}",
            n,
            n,
            spots.len(),
            shading.umbra,
            shading.penumbra_outer
        );

        for spot in &spots {
            log::debug!(
                "  spot {} at ({:.3}, {:.3}) umbra r={:.3} penumbra r={:.3}",
                spot.index,
                spot.center_x,
                spot.center_y,
                spot.umbra_radius,
                spot.penumbra_radius
            );
            Zip::from(&mut intensity)
                .and(&xx)
                .and(&yy)
                .for_each(|pixel, &x, &y| *pixel *= spot.attenuation(x, y, &shading));
        }

        intensity.mapv_inplace(unit_clamp);

        SolarDiskImage {
            intensity,
            coordinates,
            spots,
        }
    }
}

/// Render a disk with the default [`DiskConfig`].
///
/// # Arguments
/// * `spot_count` - Number of sunspots
/// * `spot_intensity_percent` - Umbra brightness relative to the photosphere
/// * `spot_size_percent` - Umbra radius as a percentage of the solar radius
pub fn generate_solar_disk(
    spot_count: usize,
    spot_intensity_percent: f64,
    spot_size_percent: f64,
) -> SolarDiskImage {
    let params = SimulationParameters {
        spot_count,
        spot_intensity_percent,
        spot_size_percent,
    };
    SolarDiskGenerator::default().generate(&params)
}
