//! Sampled, normalized black-body spectra.
//!
//! A [`SpectralCurve`] is what the plotting and report tools draw: Planck
//! radiance sampled over a wavelength interval and scaled so its peak is 1.
//! Wavelengths are carried in nanometers for convenience and converted to
//! meters only at the point of evaluation.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use shared::algo::linspace;
use thiserror::Error;

use super::blackbody::planck_spectral_radiance_array;
use super::constants::NM_PER_M;

/// Errors raised when validating spectrum inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Wavelength bounds must be finite and positive, got {start_nm}..{end_nm} nm")]
    InvalidBounds { start_nm: f64, end_nm: f64 },

    #[error("Wavelength range must ascend, got {start_nm}..{end_nm} nm")]
    Reversed { start_nm: f64, end_nm: f64 },

    #[error("At least two wavelength samples are required, got {0}")]
    TooFewSamples(usize),
}

/// Evenly sampled wavelength interval in nanometers.
///
/// Any value is accepted by [`compute_spectrum`]; [`WavelengthRange::validate`]
/// is for callers that want to reject meaningless ranges up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WavelengthRange {
    /// First sampled wavelength (nm)
    pub start_nm: f64,
    /// Last sampled wavelength (nm)
    pub end_nm: f64,
    /// Number of samples including both ends
    pub samples: usize,
}

impl Default for WavelengthRange {
    /// Near-UV to near-IR, 300-1100 nm in 200 samples
    fn default() -> Self {
        Self {
            start_nm: 300.0,
            end_nm: 1100.0,
            samples: 200,
        }
    }
}

impl WavelengthRange {
    /// Create a validated range.
    pub fn new(start_nm: f64, end_nm: f64, samples: usize) -> Result<Self, SpectrumError> {
        let range = Self {
            start_nm,
            end_nm,
            samples,
        };
        range.validate()?;
        Ok(range)
    }

    /// Check the bounds are finite, positive and ascending with at least two samples.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        if !finite_positive(self.start_nm) || !finite_positive(self.end_nm) {
            return Err(SpectrumError::InvalidBounds {
                start_nm: self.start_nm,
                end_nm: self.end_nm,
            });
        }
        if self.start_nm >= self.end_nm {
            return Err(SpectrumError::Reversed {
                start_nm: self.start_nm,
                end_nm: self.end_nm,
            });
        }
        if self.samples < 2 {
            return Err(SpectrumError::TooFewSamples(self.samples));
        }
        Ok(())
    }

    /// Sampled wavelengths in nanometers
    pub fn wavelengths_nm(&self) -> Array1<f64> {
        linspace(self.start_nm, self.end_nm, self.samples)
    }
}

/// Black-body spectrum normalized to a peak of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralCurve {
    temperature_k: f64,
    wavelengths_nm: Array1<f64>,
    relative_radiance: Array1<f64>,
}

impl SpectralCurve {
    /// Temperature the curve was computed for (K)
    pub fn temperature_k(&self) -> f64 {
        self.temperature_k
    }

    /// Sampled wavelengths (nm)
    pub fn wavelengths_nm(&self) -> &Array1<f64> {
        &self.wavelengths_nm
    }

    /// Radiance relative to the sampled peak, in `[0, 1]`
    pub fn relative_radiance(&self) -> &Array1<f64> {
        &self.relative_radiance
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.wavelengths_nm.len()
    }

    /// True if the curve holds no samples
    pub fn is_empty(&self) -> bool {
        self.wavelengths_nm.is_empty()
    }

    /// `(wavelength_nm, relative_radiance)` pairs in wavelength order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.wavelengths_nm
            .iter()
            .copied()
            .zip(self.relative_radiance.iter().copied())
    }

    /// Wavelength of the brightest sample, or `None` for an all-zero curve.
    ///
    /// This is limited by the sampling; use
    /// [`wien_peak_wavelength_nm`](super::wien::wien_peak_wavelength_nm) for the
    /// analytic peak.
    pub fn sampled_peak_nm(&self) -> Option<f64> {
        self.points()
            .filter(|(_, radiance)| *radiance > 0.0)
            .fold(None, |best: Option<(f64, f64)>, point| match best {
                Some(b) if b.1 >= point.1 => Some(b),
                _ => Some(point),
            })
            .map(|(wavelength, _)| wavelength)
    }
}

/// Scale values so the maximum becomes 1.
///
/// When the maximum is not positive (for example an all-zero spectrum) the
/// values are divided by 1 instead, leaving them unchanged.
pub fn normalize_spectrum(values: Array1<f64>) -> Array1<f64> {
    let max_val = values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(0.0_f64, f64::max);

    let divisor = if max_val > 0.0 && max_val.is_finite() {
        max_val
    } else {
        1.0
    };

    values.mapv(|v| v / divisor)
}

/// Compute the normalized black-body spectrum of `temperature_k` over `range`.
///
/// Never fails: degenerate temperatures or wavelengths produce zero radiance,
/// which normalizes to an all-zero curve.
pub fn compute_spectrum(temperature_k: f64, range: &WavelengthRange) -> SpectralCurve {
    let wavelengths_nm = range.wavelengths_nm();
    let wavelengths_m = wavelengths_nm.mapv(|nm| nm / NM_PER_M);
    let radiance = planck_spectral_radiance_array(wavelengths_m.view(), temperature_k);

    SpectralCurve {
        temperature_k,
        wavelengths_nm,
        relative_radiance: normalize_spectrum(radiance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photometry::constants::SUN_TEMPERATURE_K;
    use crate::photometry::wien::wien_peak_wavelength_nm;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_normalize_peak_is_exactly_one() {
        let normalized = normalize_spectrum(array![0.5, 2.0, 1.0]);
        assert_eq!(normalized.iter().copied().fold(f64::MIN, f64::max), 1.0);
        assert_relative_eq!(normalized[0], 0.25);
    }

    #[test]
    fn test_normalize_all_zero_is_identity() {
        let normalized = normalize_spectrum(Array1::zeros(5));
        assert!(normalized.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_spectrum(Array1::zeros(0)).is_empty());
    }

    #[test]
    fn test_solar_spectrum_shape() {
        let curve = compute_spectrum(SUN_TEMPERATURE_K, &WavelengthRange::default());

        assert_eq!(curve.len(), 200);
        assert_eq!(curve.wavelengths_nm()[0], 300.0);
        assert_eq!(curve.wavelengths_nm()[199], 1100.0);
        assert!(curve
            .relative_radiance()
            .iter()
            .all(|&r| (0.0..=1.0).contains(&r)));
        assert_eq!(
            curve.relative_radiance().iter().copied().fold(0.0, f64::max),
            1.0
        );

        // Sampled peak sits within one sample step of Wien's law
        let step = 800.0 / 199.0;
        let peak = curve.sampled_peak_nm().unwrap();
        assert!((peak - wien_peak_wavelength_nm(SUN_TEMPERATURE_K)).abs() <= step);
    }

    #[test]
    fn test_cooler_spectrum_peaks_redder() {
        let range = WavelengthRange::default();
        let sun = compute_spectrum(5778.0, &range);
        let spot = compute_spectrum(4000.0, &range);

        assert!(spot.sampled_peak_nm().unwrap() > sun.sampled_peak_nm().unwrap());
    }

    #[test]
    fn test_zero_temperature_gives_flat_zero_curve() {
        let curve = compute_spectrum(0.0, &WavelengthRange::default());
        assert_eq!(curve.len(), 200);
        assert!(curve.relative_radiance().iter().all(|&r| r == 0.0));
        assert!(curve.sampled_peak_nm().is_none());
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let empty = WavelengthRange {
            start_nm: 300.0,
            end_nm: 1100.0,
            samples: 0,
        };
        assert!(compute_spectrum(5778.0, &empty).is_empty());

        let negative = WavelengthRange {
            start_nm: -100.0,
            end_nm: 0.0,
            samples: 10,
        };
        let curve = compute_spectrum(5778.0, &negative);
        assert!(curve.relative_radiance().iter().all(|&r| r == 0.0));
    }

    #[test]
    fn test_range_validation() {
        assert!(WavelengthRange::new(300.0, 1100.0, 200).is_ok());
        assert_eq!(
            WavelengthRange::new(1100.0, 300.0, 200),
            Err(SpectrumError::Reversed {
                start_nm: 1100.0,
                end_nm: 300.0
            })
        );
        assert!(matches!(
            WavelengthRange::new(0.0, 300.0, 10),
            Err(SpectrumError::InvalidBounds { .. })
        ));
        assert_eq!(
            WavelengthRange::new(300.0, 1100.0, 1),
            Err(SpectrumError::TooFewSamples(1))
        );
    }

    #[test]
    fn test_points_pairs_in_order() {
        let curve = compute_spectrum(5778.0, &WavelengthRange::new(400.0, 700.0, 4).unwrap());
        let points: Vec<(f64, f64)> = curve.points().collect();

        assert_eq!(points.len(), 4);
        assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
