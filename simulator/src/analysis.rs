//! Worked sunspot calculations for reports.
//!
//! Bundles the numbers a student derives by hand from a spot's relative
//! intensity: its temperature via Stefan-Boltzmann, the peak wavelengths of
//! spot and photosphere via Wien, and the resulting shift. The `Display`
//! implementation prints the calculation step by step.

use std::fmt;

use crate::photometry::constants::{SI, SUN_TEMPERATURE_K};
use crate::photometry::stefan_boltzmann::spot_temperature_from_intensity;
use crate::photometry::wien::{wien_peak_wavelength_nm, wien_shift_nm};
use crate::solar::params::{percent_to_unit, SimulationParameters};

/// Wavelength interval visible to the human eye (nm)
pub const VISIBLE_BAND_NM: (f64, f64) = (380.0, 750.0);

/// Relative dimming applied to each successive spot in the intensity chart
pub const SPOT_DIMMING_STEP: f64 = 0.1;

/// Rough colour name for a wavelength in nanometers.
pub fn describe_wavelength(wavelength_nm: f64) -> &'static str {
    match wavelength_nm {
        w if !(w > 0.0) => "undefined",
        w if w < VISIBLE_BAND_NM.0 => "ultraviolet",
        w if w < 450.0 => "violet",
        w if w < 495.0 => "blue",
        w if w < 570.0 => "green",
        w if w < 590.0 => "yellow",
        w if w < 620.0 => "orange",
        w if w <= VISIBLE_BAND_NM.1 => "red",
        _ => "infrared",
    }
}

/// Derived quantities for one spot intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunspotAnalysis {
    /// Spot intensity relative to the photosphere (%)
    pub intensity_percent: f64,
    /// Same intensity as a fraction in `[0, 1]`
    pub intensity_ratio: f64,
    /// Fourth root of the intensity ratio, i.e. T_spot / T_sun
    pub fourth_root: f64,
    /// Spot temperature (K)
    pub spot_temperature_k: f64,
    /// How much cooler the spot is than the photosphere (K)
    pub temperature_deficit_k: f64,
    /// Wien peak of the photosphere (nm)
    pub photosphere_peak_nm: f64,
    /// Wien peak of the spot (nm), 0 when the spot temperature is 0
    pub spot_peak_nm: f64,
    /// Spot peak minus photosphere peak (nm); 0 when undefined
    pub peak_shift_nm: f64,
}

impl SunspotAnalysis {
    /// Analyse a spot of `intensity_percent` relative brightness.
    pub fn from_intensity_percent(intensity_percent: f64) -> Self {
        let intensity_ratio = percent_to_unit(intensity_percent);
        let spot_temperature_k = spot_temperature_from_intensity(intensity_ratio * 100.0);
        let spot_peak_nm = wien_peak_wavelength_nm(spot_temperature_k);
        let peak_shift_nm = if spot_peak_nm > 0.0 {
            wien_shift_nm(SUN_TEMPERATURE_K, spot_temperature_k)
        } else {
            0.0
        };

        Self {
            intensity_percent,
            intensity_ratio,
            fourth_root: intensity_ratio.powf(0.25),
            spot_temperature_k,
            temperature_deficit_k: SUN_TEMPERATURE_K - spot_temperature_k,
            photosphere_peak_nm: wien_peak_wavelength_nm(SUN_TEMPERATURE_K),
            spot_peak_nm,
            peak_shift_nm,
        }
    }

    /// Analyse the spots described by `params`.
    pub fn new(params: &SimulationParameters) -> Self {
        Self::from_intensity_percent(params.spot_intensity_percent)
    }
}

impl fmt::Display for SunspotAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stefan-Boltzmann method")?;
        writeln!(f, "  Formula: T_spot = T_photosphere x (I_spot / I_photosphere)^(1/4)")?;
        writeln!(f, "  T_photosphere = {:.0} K", SUN_TEMPERATURE_K)?;
        writeln!(f, "  I_spot / I_photosphere = {:.3}", self.intensity_ratio)?;
        writeln!(
            f,
            "  T_spot = {:.0} x ({:.3})^(1/4) = {:.0} x {:.3} = {:.0} K",
            SUN_TEMPERATURE_K,
            self.intensity_ratio,
            SUN_TEMPERATURE_K,
            self.fourth_root,
            self.spot_temperature_k
        )?;
        writeln!(
            f,
            "  Result: {:.0} K ({:.0} K cooler than the photosphere)",
            self.spot_temperature_k, self.temperature_deficit_k
        )?;
        writeln!(f)?;
        writeln!(f, "Wien's displacement law")?;
        writeln!(f, "  Formula: lambda_max x T = {:.3e} m K", SI::WIEN_CONSTANT)?;
        writeln!(
            f,
            "  Photosphere: lambda_max = {:.3e} / {:.0} = {:.0} nm ({})",
            SI::WIEN_CONSTANT,
            SUN_TEMPERATURE_K,
            self.photosphere_peak_nm,
            describe_wavelength(self.photosphere_peak_nm)
        )?;
        if self.spot_peak_nm > 0.0 {
            writeln!(
                f,
                "  Spot:        lambda_max = {:.3e} / {:.0} = {:.0} nm ({})",
                SI::WIEN_CONSTANT,
                self.spot_temperature_k,
                self.spot_peak_nm,
                describe_wavelength(self.spot_peak_nm)
            )?;
            write!(f, "  Shift: {:.0} nm towards the red", self.peak_shift_nm)
        } else {
            write!(f, "  Spot:        lambda_max undefined at 0 K")
        }
    }
}

/// Relative intensities shown in the region chart, in percent.
///
/// The photosphere is 100 %; spot `i` is drawn at `intensity · (1 − 0.1·i)`
/// so successive spots are told apart, never going below 0.
pub fn region_intensities(params: &SimulationParameters) -> Vec<(String, f64)> {
    let intensity = params.intensity_ratio() * 100.0;
    std::iter::once(("Photosphere".to_string(), 100.0))
        .chain((0..params.spot_count).map(|i| {
            let value = (intensity * (1.0 - SPOT_DIMMING_STEP * i as f64)).max(0.0);
            (format!("Spot {}", i + 1), value)
        }))
        .collect()
}

/// Photosphere and spot temperatures (K) for the comparison chart.
pub fn temperature_comparison(params: &SimulationParameters) -> Vec<(String, f64)> {
    let analysis = SunspotAnalysis::new(params);
    vec![
        ("Photosphere".to_string(), SUN_TEMPERATURE_K),
        ("Spots".to_string(), analysis.spot_temperature_k),
    ]
}

/// One row of an intensity sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub intensity_percent: f64,
    pub temperature_k: f64,
    pub peak_nm: f64,
}

/// Spot temperature and peak wavelength for each intensity.
pub fn temperature_sweep(intensities_percent: &[f64]) -> Vec<SweepRow> {
    intensities_percent
        .iter()
        .map(|&intensity_percent| {
            let temperature_k = spot_temperature_from_intensity(intensity_percent);
            SweepRow {
                intensity_percent,
                temperature_k,
                peak_nm: wien_peak_wavelength_nm(temperature_k),
            }
        })
        .collect()
}
