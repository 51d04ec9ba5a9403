//! Wien's displacement law: λ_max · T = b

use super::constants::{NM_PER_M, SI};

/// Peak emission wavelength of a black body, in nanometers.
///
/// Returns 0.0 as a sentinel when the temperature is not a positive finite
/// number, where the law is undefined.
pub fn wien_peak_wavelength_nm(temperature_k: f64) -> f64 {
    if !(temperature_k > 0.0) || !temperature_k.is_finite() {
        return 0.0;
    }
    (SI::WIEN_CONSTANT / temperature_k) * NM_PER_M
}

/// Shift of the peak wavelength going from `from_k` to `to_k` (nm).
///
/// Positive when `to_k` is cooler, i.e. a shift towards the red.
pub fn wien_shift_nm(from_k: f64, to_k: f64) -> f64 {
    wien_peak_wavelength_nm(to_k) - wien_peak_wavelength_nm(from_k)
}
