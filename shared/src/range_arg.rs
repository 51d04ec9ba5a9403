//! Sampled range argument for command-line tools.
//!
//! Spectra are evaluated on an evenly sampled interval, so tools take the
//! interval as `start:stop:samples` rather than a step size.

use std::fmt;
use std::str::FromStr;

use ndarray::Array1;

use crate::algo::linspace;

/// Parse a `start:stop:samples` string.
///
/// # Validation Rules
/// - Exactly three colon-separated components
/// - `start` and `stop` are finite numbers with `start < stop`
/// - `samples` is an integer of at least 2
///
/// # Examples
/// - `"300:1100:200"` - 200 samples from 300 to 1100 inclusive
/// - `"1100:300:200"` - rejected, the interval must ascend
pub fn parse_sampled_range(s: &str) -> Result<(f64, f64, usize), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err("Range must be in format 'start:stop:samples'".to_string());
    }

    let start = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid start value '{}'", parts[0]))?;
    let stop = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid stop value '{}'", parts[1]))?;
    let samples = parts[2]
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid sample count '{}'", parts[2]))?;

    if !start.is_finite() || !stop.is_finite() {
        return Err("Range bounds must be finite".to_string());
    }
    if start >= stop {
        return Err(format!("Start must be less than stop, got {start}..{stop}"));
    }
    if samples < 2 {
        return Err("At least two samples are required".to_string());
    }

    Ok((start, stop, samples))
}

/// Evenly sampled closed interval, parsed from `start:stop:samples`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledRange {
    /// First sample
    pub start: f64,
    /// Last sample
    pub stop: f64,
    /// Number of samples including both ends
    pub samples: usize,
}

impl SampledRange {
    /// Sample positions of the range
    pub fn values(&self) -> Array1<f64> {
        linspace(self.start, self.stop, self.samples)
    }
}

impl FromStr for SampledRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, stop, samples) = parse_sampled_range(s)?;
        Ok(Self {
            start,
            stop,
            samples,
        })
    }
}

impl fmt::Display for SampledRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.samples)
    }
}
