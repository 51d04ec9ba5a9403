//! Planck's law for black-body spectral radiance
//!
//! B(λ,T) = (2hc²/λ⁵) · 1/(exp(hc/(λkT)) − 1)
//!
//! The exponential overflows long before radiance becomes interesting, so
//! evaluation is cut off at [`MAX_EXPONENT`] and any degenerate input
//! returns 0 instead of NaN or infinity.

use ndarray::{Array1, ArrayView1};

use super::constants::SI;

/// Largest exponent hc/(λkT) that is evaluated; beyond it radiance is 0.
pub const MAX_EXPONENT: f64 = 700.0;

/// Spectral radiance of a black body.
///
/// # Arguments
///
/// * `wavelength_m` - Wavelength in meters
/// * `temperature_k` - Temperature in Kelvin
///
/// # Returns
///
/// Spectral radiance in W⋅sr⁻¹⋅m⁻³. Non-negative for every input; 0 when
/// either argument is non-positive or non-finite, or when the exponent
/// exceeds [`MAX_EXPONENT`].
pub fn planck_spectral_radiance(wavelength_m: f64, temperature_k: f64) -> f64 {
    if !(wavelength_m > 0.0 && temperature_k > 0.0)
        || !wavelength_m.is_finite()
        || !temperature_k.is_finite()
    {
        return 0.0;
    }

    let exponent = (SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT)
        / (wavelength_m * SI::BOLTZMANN_CONSTANT * temperature_k);
    if !exponent.is_finite() || exponent > MAX_EXPONENT {
        return 0.0;
    }

    let numerator = 2.0 * SI::PLANCK_CONSTANT * SI::SPEED_OF_LIGHT * SI::SPEED_OF_LIGHT;
    // exp_m1 keeps precision in the Rayleigh-Jeans tail where the exponent is tiny
    let denominator = wavelength_m.powi(5) * exponent.exp_m1();
    let radiance = numerator / denominator;

    if radiance.is_finite() && radiance > 0.0 {
        radiance
    } else {
        0.0
    }
}

/// Evaluate [`planck_spectral_radiance`] over many wavelengths at one temperature.
pub fn planck_spectral_radiance_array(
    wavelengths_m: ArrayView1<f64>,
    temperature_k: f64,
) -> Array1<f64> {
    wavelengths_m.mapv(|wavelength| planck_spectral_radiance(wavelength, temperature_k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photometry::constants::SUN_TEMPERATURE_K;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_known_solar_value() {
        // 500 nm at 5778 K: exponent ≈ 4.98, B ≈ 2.6e13 W sr⁻¹ m⁻³
        let b = planck_spectral_radiance(500e-9, SUN_TEMPERATURE_K);
        let x: f64 = 6.626e-34 * 3.0e8 / (500e-9 * 1.381e-23 * 5778.0);
        let expected = 2.0 * 6.626e-34 * 9.0e16 / (500e-9_f64.powi(5) * (x.exp() - 1.0));

        assert_relative_eq!(b, expected, max_relative = 1e-10);
        assert!(b > 2.0e13 && b < 3.0e13, "unexpected radiance {}", b);
    }

    #[test]
    fn test_huge_exponent_is_zero() {
        // 1 nm at 5778 K gives an exponent near 2500
        assert_eq!(planck_spectral_radiance(1e-9, SUN_TEMPERATURE_K), 0.0);
        // Very cold body in the visible
        assert_eq!(planck_spectral_radiance(500e-9, 1.0), 0.0);
    }

    #[test]
    fn test_degenerate_inputs_are_zero() {
        assert_eq!(planck_spectral_radiance(0.0, 5778.0), 0.0);
        assert_eq!(planck_spectral_radiance(1e-300, 5778.0), 0.0);
        assert_eq!(planck_spectral_radiance(-500e-9, 5778.0), 0.0);
        assert_eq!(planck_spectral_radiance(500e-9, 0.0), 0.0);
        assert_eq!(planck_spectral_radiance(500e-9, -10.0), 0.0);
        assert_eq!(planck_spectral_radiance(f64::NAN, 5778.0), 0.0);
        assert_eq!(planck_spectral_radiance(500e-9, f64::INFINITY), 0.0);
        assert_eq!(planck_spectral_radiance(f64::INFINITY, 5778.0), 0.0);
    }

    #[test]
    fn test_non_negative_over_grid() {
        let wavelengths = [1e-12, 1e-9, 1e-7, 5e-7, 1e-6, 1e-3, 1.0, 1e3];
        let temperatures = [1e-3, 1.0, 300.0, 4444.0, 5778.0, 3e4, 1e7];

        for &wl in &wavelengths {
            for &t in &temperatures {
                let b = planck_spectral_radiance(wl, t);
                assert!(b.is_finite() && b >= 0.0, "B({}, {}) = {}", wl, t, b);
            }
        }
    }

    #[test]
    fn test_hotter_is_brighter_everywhere() {
        for wl in [300e-9, 500e-9, 800e-9, 1100e-9] {
            assert!(planck_spectral_radiance(wl, 5778.0) > planck_spectral_radiance(wl, 4000.0));
        }
    }

    #[test]
    fn test_array_matches_scalar() {
        let wavelengths = array![0.0, 1e-9, 300e-9, 700e-9, 1100e-9];
        let radiance = planck_spectral_radiance_array(wavelengths.view(), 5778.0);

        assert_eq!(radiance.len(), wavelengths.len());
        assert_eq!(radiance[0], 0.0);
        assert_eq!(radiance[1], 0.0);
        for (wl, b) in wavelengths.iter().zip(radiance.iter()) {
            assert_eq!(*b, planck_spectral_radiance(*wl, 5778.0));
        }
    }
}
