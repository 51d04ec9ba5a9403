//! Sunspot black-body simulation
//!
//! This crate models why sunspots look dark: a spot is cooler than the
//! surrounding photosphere, so by the Stefan-Boltzmann law it radiates less
//! and by Wien's law its emission peak moves towards the red. It provides
//! black-body spectra, the temperature/intensity relations and a synthetic
//! limb-darkened solar disk with umbra/penumbra sunspots.

pub mod analysis;
pub mod config;
pub mod photometry;
pub mod shared_args;
pub mod solar;

// Re-exports for easier access
pub use analysis::SunspotAnalysis;
pub use config::{ConfigError, LabConfig};
pub use photometry::spectrum::{compute_spectrum, SpectralCurve, WavelengthRange};
pub use photometry::stefan_boltzmann::spot_temperature_from_intensity as compute_spot_temperature;
pub use photometry::wien::wien_peak_wavelength_nm;
pub use solar::disk::{generate_solar_disk, DiskConfig, SolarDiskGenerator, SolarDiskImage};
pub use solar::params::SimulationParameters;
