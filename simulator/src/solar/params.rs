//! Simulation parameters supplied by the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when validating simulation parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// At least one sunspot is required.
    #[error("spot count must be at least 1, got {0}")]
    SpotCount(usize),

    /// Spot intensity outside 0-100 %.
    #[error("spot intensity must be within 0-100 %, got {0}")]
    Intensity(f64),

    /// Spot size must be a positive fraction of the solar radius.
    #[error("spot size must be a positive finite percentage, got {0}")]
    Size(f64),
}

/// Inputs of one simulation run.
///
/// The generators accept any values and clamp internally; [`SimulationParameters::new`]
/// and [`SimulationParameters::validate`] enforce the documented domain for
/// callers that want to reject bad input before it reaches them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Number of sunspots drawn on the disk
    pub spot_count: usize,
    /// Umbra brightness relative to the photosphere, in percent
    pub spot_intensity_percent: f64,
    /// Umbra radius as a percentage of the solar radius
    pub spot_size_percent: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            spot_count: 2,
            spot_intensity_percent: 35.0,
            spot_size_percent: 8.0,
        }
    }
}

impl SimulationParameters {
    /// Create validated parameters.
    pub fn new(
        spot_count: usize,
        spot_intensity_percent: f64,
        spot_size_percent: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            spot_count,
            spot_intensity_percent,
            spot_size_percent,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameters lie in their declared domain.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.spot_count < 1 {
            return Err(ParameterError::SpotCount(self.spot_count));
        }
        if !(0.0..=100.0).contains(&self.spot_intensity_percent) {
            return Err(ParameterError::Intensity(self.spot_intensity_percent));
        }
        if !(self.spot_size_percent.is_finite() && self.spot_size_percent > 0.0) {
            return Err(ParameterError::Size(self.spot_size_percent));
        }
        Ok(())
    }

    /// Spot intensity as a fraction of the photosphere, clamped to `[0, 1]`
    pub fn intensity_ratio(&self) -> f64 {
        percent_to_unit(self.spot_intensity_percent)
    }
}

/// Convert a percentage to a fraction clamped to `[0, 1]`; NaN maps to 0.
pub fn percent_to_unit(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        (percent / 100.0).clamp(0.0, 1.0)
    }
}
