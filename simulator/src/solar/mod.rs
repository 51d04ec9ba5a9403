//! Synthetic sun with sunspots
//!
//! - **params**: the caller-supplied spot count, intensity and size
//! - **sunspot**: spot layout and umbra/penumbra shading profile
//! - **disk**: rendering of the limb-darkened disk with its spots

pub mod disk;
pub mod params;
pub mod sunspot;

pub use disk::{generate_solar_disk, DiskConfig, SolarDiskGenerator, SolarDiskImage};
pub use params::{ParameterError, SimulationParameters};
pub use sunspot::{layout_sunspots, SpotRegion, SpotShading, Sunspot};
