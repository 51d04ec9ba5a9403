//! Sunspot placement and umbra/penumbra shading.
//!
//! Spots are laid out on a spiral: spot `i` of `n` sits at angle `2πi/n`
//! and at a distance from disk centre that grows linearly with the index,
//! so several spots spread out instead of stacking. All lengths are in
//! units of the solar radius.

use std::f64::consts::PI;

use super::params::percent_to_unit;

/// Distance of the first spot from disk centre
pub const BASE_DISTANCE: f64 = 0.3;

/// Extra distance reached by the last spot
pub const DISTANCE_SPREAD: f64 = 0.4;

/// Outer penumbra radius as a multiple of the umbra radius
pub const PENUMBRA_SCALE: f64 = 1.5;

/// How much brighter (in percentage points) the outer penumbra edge is than the umbra
pub const PENUMBRA_LIFT_PERCENT: f64 = 20.0;

/// A single sunspot on the unit disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sunspot {
    /// Position in the layout, starting at 0
    pub index: usize,
    /// Centre x coordinate
    pub center_x: f64,
    /// Centre y coordinate
    pub center_y: f64,
    /// Radius of the dark core
    pub umbra_radius: f64,
    /// Outer radius of the lighter ring around the core
    pub penumbra_radius: f64,
}

/// Which part of a spot a point falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotRegion {
    Umbra,
    Penumbra,
    Outside,
}

/// Brightness multipliers derived from the spot intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotShading {
    /// Multiplier applied across the umbra
    pub umbra: f64,
    /// Multiplier reached at the outer penumbra edge
    pub penumbra_outer: f64,
}

impl SpotShading {
    /// Shading for a spot of `intensity_percent` relative brightness.
    ///
    /// The umbra is scaled by the intensity itself; the penumbra brightens
    /// from there to 20 percentage points more, capped at 1.
    pub fn from_intensity_percent(intensity_percent: f64) -> Self {
        let umbra = percent_to_unit(intensity_percent);
        let penumbra_outer = percent_to_unit(intensity_percent + PENUMBRA_LIFT_PERCENT).max(umbra);
        Self {
            umbra,
            penumbra_outer,
        }
    }
}

impl Sunspot {
    /// Distance from the spot centre to `(x, y)`
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (x - self.center_x).hypot(y - self.center_y)
    }

    /// Classify `(x, y)` relative to this spot
    pub fn region(&self, x: f64, y: f64) -> SpotRegion {
        let d = self.distance_to(x, y);
        if d < self.umbra_radius {
            SpotRegion::Umbra
        } else if d < self.penumbra_radius {
            SpotRegion::Penumbra
        } else {
            SpotRegion::Outside
        }
    }

    /// Multiplier this spot applies to the photosphere at `(x, y)`.
    ///
    /// Constant `shading.umbra` inside the umbra, a linear ramp from
    /// `shading.umbra` to `shading.penumbra_outer` across the penumbra and
    /// 1 elsewhere.
    pub fn attenuation(&self, x: f64, y: f64, shading: &SpotShading) -> f64 {
        let d = self.distance_to(x, y);
        if d < self.umbra_radius {
            shading.umbra
        } else if d < self.penumbra_radius {
            let width = self.penumbra_radius - self.umbra_radius;
            let t = (d - self.umbra_radius) / width;
            shading.umbra + (shading.penumbra_outer - shading.umbra) * t
        } else {
            1.0
        }
    }
}

/// Place `spot_count` spots of `spot_size_percent` radius on the disk.
///
/// A single spot never divides by zero: the spread denominator is clamped to
/// at least 1. Negative or non-finite sizes collapse to zero-radius spots
/// that shade nothing.
pub fn layout_sunspots(spot_count: usize, spot_size_percent: f64) -> Vec<Sunspot> {
    let umbra_radius = if spot_size_percent.is_finite() {
        (spot_size_percent / 100.0).max(0.0)
    } else {
        0.0
    };
    let penumbra_radius = umbra_radius * PENUMBRA_SCALE;
    let spread_denominator = spot_count.saturating_sub(1).max(1) as f64;

    (0..spot_count)
        .map(|index| {
            let angle = 2.0 * PI * index as f64 / spot_count as f64;
            let distance = BASE_DISTANCE + DISTANCE_SPREAD * (index as f64 / spread_denominator);
            Sunspot {
                index,
                center_x: distance * angle.cos(),
                center_y: distance * angle.sin(),
                umbra_radius,
                penumbra_radius,
            }
        })
        .collect()
}
