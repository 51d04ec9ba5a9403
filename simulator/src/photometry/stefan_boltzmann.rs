//! Stefan-Boltzmann law
//!
//! Total radiated power scales as σT⁴. Comparing a sunspot with the
//! surrounding photosphere, the constant cancels and the intensity ratio
//! fixes the temperature ratio: T_spot = T_sun · (I_spot/I_sun)^¼.

use super::constants::{SI, SUN_TEMPERATURE_K};

/// Temperature of a sunspot whose brightness is `intensity_percent` of the photosphere.
///
/// # Arguments
///
/// * `intensity_percent` - Spot intensity relative to the photosphere, in percent
///
/// # Returns
///
/// Spot temperature in Kelvin. Returns 0 for non-positive or NaN input, equals
/// [`SUN_TEMPERATURE_K`] at exactly 100 % and is below it for anything less.
pub fn spot_temperature_from_intensity(intensity_percent: f64) -> f64 {
    // NaN fails the comparison and lands here too
    if !(intensity_percent > 0.0) {
        return 0.0;
    }
    let intensity_ratio = intensity_percent / 100.0;
    SUN_TEMPERATURE_K * intensity_ratio.powf(0.25)
}

/// Power radiated per unit area by a black body, σT⁴ in W/m².
///
/// Non-positive or NaN temperatures radiate nothing.
pub fn radiant_exitance(temperature_k: f64) -> f64 {
    if !(temperature_k > 0.0) {
        return 0.0;
    }
    SI::STEFAN_BOLTZMANN * temperature_k.powi(4)
}

/// Intensity ratio (t / t_ref)⁴, the inverse of [`spot_temperature_from_intensity`].
///
/// Returns 0 when `reference_k` is not positive or `temperature_k` is negative.
pub fn intensity_ratio_from_temperatures(temperature_k: f64, reference_k: f64) -> f64 {
    if !(reference_k > 0.0) || !(temperature_k >= 0.0) {
        return 0.0;
    }
    (temperature_k / reference_k).powi(4)
}
