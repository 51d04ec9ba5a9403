//! Black-body photometry: Planck spectra and the Stefan-Boltzmann and Wien laws

pub mod blackbody;
pub mod constants;
pub mod spectrum;
pub mod stefan_boltzmann;
pub mod wien;

pub use blackbody::{planck_spectral_radiance, planck_spectral_radiance_array};
pub use constants::{SI, SUN_TEMPERATURE_K};
pub use spectrum::{compute_spectrum, normalize_spectrum, SpectralCurve, SpectrumError, WavelengthRange};
pub use stefan_boltzmann::{
    intensity_ratio_from_temperatures, radiant_exitance, spot_temperature_from_intensity,
};
pub use wien::{wien_peak_wavelength_nm, wien_shift_nm};
