//! False-colour maps for unit intensity fields.

use std::fmt;
use std::str::FromStr;

/// Colour lookup used when rendering a `[0, 1]` field to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Linear grey ramp
    Gray,
    /// Black through red and yellow to white, the classic solar heat map
    #[default]
    Hot,
}

// Break points of the hot ramp: red saturates first, then green, then blue.
const HOT_RED_END: f64 = 0.365;
const HOT_GREEN_END: f64 = 0.746;

fn ramp(value: f64, start: f64, end: f64) -> f64 {
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl Colormap {
    /// Map a value to an RGB triple.
    ///
    /// Values outside `[0, 1]` are clamped and NaN maps to black.
    pub fn rgb(&self, value: f64) -> [u8; 3] {
        let v = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };

        match self {
            Colormap::Gray => {
                let g = to_byte(v);
                [g, g, g]
            }
            Colormap::Hot => [
                to_byte(ramp(v, 0.0, HOT_RED_END)),
                to_byte(ramp(v, HOT_RED_END, HOT_GREEN_END)),
                to_byte(ramp(v, HOT_GREEN_END, 1.0)),
            ],
        }
    }
}

impl FromStr for Colormap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gray" | "grey" => Ok(Colormap::Gray),
            "hot" => Ok(Colormap::Hot),
            other => Err(format!("Unknown colormap '{other}', expected 'hot' or 'gray'")),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colormap::Gray => write!(f, "gray"),
            Colormap::Hot => write!(f, "hot"),
        }
    }
}
