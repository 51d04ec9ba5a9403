use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, LabConfig};

/// Common arguments shared across the simulation binaries.
///
/// Values given on the command line override those read from `--config`,
/// which in turn override the built-in defaults.
#[derive(Parser, Debug, Clone, Default)]
pub struct SharedSimulationArgs {
    /// JSON lab configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of sunspots
    #[arg(long)]
    pub spots: Option<usize>,

    /// Umbra intensity relative to the photosphere, in percent
    #[arg(long)]
    pub intensity: Option<f64>,

    /// Umbra radius as a percentage of the solar radius
    #[arg(long)]
    pub size: Option<f64>,

    /// Disk samples per axis
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Limb darkening coefficient
    #[arg(long)]
    pub limb_darkening: Option<f64>,

    /// Amplitude of the periodic surface texture
    #[arg(long)]
    pub texture: Option<f64>,

    /// Standard deviation of the granulation noise
    #[arg(long)]
    pub granulation: Option<f64>,

    /// Seed for the granulation noise
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SharedSimulationArgs {
    /// Resolve the configuration file and overrides into a validated [`LabConfig`].
    pub fn to_lab_config(&self) -> Result<LabConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => LabConfig::from_json_file(path)?,
            None => LabConfig::default(),
        };

        let params = &mut config.parameters;
        if let Some(spots) = self.spots {
            params.spot_count = spots;
        }
        if let Some(intensity) = self.intensity {
            params.spot_intensity_percent = intensity;
        }
        if let Some(size) = self.size {
            params.spot_size_percent = size;
        }

        let disk = &mut config.disk;
        if let Some(resolution) = self.resolution {
            disk.resolution = resolution;
        }
        if let Some(k) = self.limb_darkening {
            disk.limb_darkening = k;
        }
        if let Some(amplitude) = self.texture {
            disk.texture_amplitude = amplitude;
        }
        if let Some(std_dev) = self.granulation {
            disk.granulation_std_dev = std_dev;
        }
        if self.seed.is_some() {
            disk.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_give_defaults() {
        let args = SharedSimulationArgs::try_parse_from(["test"]).unwrap();
        assert_eq!(args.to_lab_config().unwrap(), LabConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = SharedSimulationArgs::try_parse_from([
            "test",
            "--spots",
            "4",
            "--intensity",
            "20",
            "--resolution",
            "128",
            "--granulation",
            "0.05",
            "--seed",
            "9",
        ])
        .unwrap();
        let config = args.to_lab_config().unwrap();

        assert_eq!(config.parameters.spot_count, 4);
        assert_eq!(config.parameters.spot_intensity_percent, 20.0);
        assert_eq!(config.parameters.spot_size_percent, 8.0);
        assert_eq!(config.disk.resolution, 128);
        assert_eq!(config.disk.granulation_std_dev, 0.05);
        assert_eq!(config.disk.seed, Some(9));
    }

    #[test]
    fn test_command_line_beats_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "parameters": {{ "spot_count": 3, "spot_size_percent": 12.0 }} }}"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args =
            SharedSimulationArgs::try_parse_from(["test", "--config", &path, "--spots", "1"])
                .unwrap();
        let config = args.to_lab_config().unwrap();

        assert_eq!(config.parameters.spot_count, 1);
        assert_eq!(config.parameters.spot_size_percent, 12.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let args = SharedSimulationArgs::try_parse_from(["test", "--intensity", "120"]).unwrap();
        assert!(matches!(
            args.to_lab_config(),
            Err(ConfigError::Parameters(_))
        ));
    }
}
