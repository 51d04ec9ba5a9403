//! Terminal visualization for sunspot lab reports.
//!
//! Everything here renders to plain text so reports work over SSH, in CI
//! logs and in redirected output without a graphical backend.
//!
//! # Core Modules
//!
//! ## Bar Charts (`bar_chart`)
//! Labelled horizontal bars for comparing a handful of quantities, such as
//! the relative intensity of the photosphere against each sunspot or the
//! photosphere and spot temperatures:
//! ```rust
//! use viz::bar_chart::{BarChart, BarChartConfig};
//!
//! let chart = BarChart::new(
//!     vec![("Photosphere".to_string(), 5778.0), ("Spot".to_string(), 4444.0)],
//!     BarChartConfig {
//!         title: Some("Temperatures".to_string()),
//!         unit: "K".to_string(),
//!         ..Default::default()
//!     },
//! )?;
//! println!("{}", chart.format()?);
//! # Ok::<(), viz::VizError>(())
//! ```

use std::fmt;
use thiserror::Error;

/// Error types for visualization operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// Chart data was empty or contained values that cannot be drawn.
    #[error("Chart error: {0}")]
    ChartError(String),

    /// Text formatting error.
    #[error("Formatting error: {0}")]
    FmtError(#[from] fmt::Error),
}

/// Result type for all visualization operations.
pub type Result<T> = std::result::Result<T, VizError>;

pub mod bar_chart;
