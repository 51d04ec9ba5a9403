//! JSON lab configuration.
//!
//! A [`LabConfig`] bundles everything a run needs. Every section and every
//! field is optional in the file; missing entries take their defaults.
//!
//! ```json
//! {
//!   "parameters": { "spot_count": 3, "spot_intensity_percent": 40.0 },
//!   "disk": { "resolution": 512, "granulation_std_dev": 0.02, "seed": 7 },
//!   "spectrum": { "start_nm": 300.0, "end_nm": 1100.0, "samples": 200 }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::photometry::spectrum::{SpectrumError, WavelengthRange};
use crate::solar::disk::DiskConfig;
use crate::solar::params::{ParameterError, SimulationParameters};

/// Errors raised while loading or checking a lab configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid simulation parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("invalid wavelength range: {0}")]
    Spectrum(#[from] SpectrumError),

    #[error("disk resolution must be at least 1")]
    Resolution,
}

/// Full configuration of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    pub parameters: SimulationParameters,
    pub disk: DiskConfig,
    pub spectrum: WavelengthRange,
}

impl LabConfig {
    /// Parse a configuration from JSON text without validating it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file without validating it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading lab config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON, suitable for writing back to a file.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every section against its domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parameters.validate()?;
        self.spectrum.validate()?;
        if self.disk.resolution == 0 {
            return Err(ConfigError::Resolution);
        }
        Ok(())
    }
}
