//! Horizontal bar charts
//!
//! This module renders labelled, non-negative values as ASCII bars scaled
//! against the largest value.

use crate::{Result, VizError};
use std::fmt::Write;

/// Configuration for bar chart display
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Title for the chart
    pub title: Option<String>,
    /// Character to use for bars
    pub bar_char: char,
    /// Width of the longest bar in characters
    pub max_bar_width: usize,
    /// Unit suffix appended to each value
    pub unit: String,
    /// Decimal places used when printing values
    pub precision: usize,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            title: None,
            bar_char: '#',
            max_bar_width: 40,
            unit: String::new(),
            precision: 1,
        }
    }
}

/// Labelled values rendered as horizontal bars
#[derive(Debug, Clone)]
pub struct BarChart {
    entries: Vec<(String, f64)>,
    config: BarChartConfig,
}

impl BarChart {
    /// Create a chart from `(label, value)` pairs.
    ///
    /// Fails if there are no entries or any value is negative or non-finite.
    pub fn new(entries: Vec<(String, f64)>, config: BarChartConfig) -> Result<Self> {
        if entries.is_empty() {
            return Err(VizError::ChartError(
                "Bar chart requires at least one entry".to_string(),
            ));
        }

        if let Some((label, value)) = entries
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(VizError::ChartError(format!(
                "Value for '{}' must be finite and non-negative, got {}",
                label, value
            )));
        }

        Ok(Self { entries, config })
    }

    /// Entries in display order
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Length in characters of the bar drawn for `value`
    fn bar_length(&self, value: f64, max_value: f64) -> usize {
        if max_value <= 0.0 {
            return 0;
        }
        ((value / max_value) * self.config.max_bar_width as f64).round() as usize
    }

    /// Format the chart as a string
    pub fn format(&self) -> Result<String> {
        let mut output = String::new();

        if let Some(title) = &self.config.title {
            writeln!(output, "{}", title)?;
            writeln!(output, "{}", "=".repeat(title.chars().count()))?;
        }

        let max_value = self
            .entries
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max);

        let label_width = self
            .entries
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        let precision = self.config.precision;
        let value_texts: Vec<String> = self
            .entries
            .iter()
            .map(|(_, value)| {
                if self.config.unit.is_empty() {
                    format!("{:.*}", precision, value)
                } else {
                    format!("{:.*} {}", precision, value, self.config.unit)
                }
            })
            .collect();
        let value_width = value_texts.iter().map(|t| t.len()).max().unwrap_or(0);

        for ((label, value), value_text) in self.entries.iter().zip(value_texts.iter()) {
            let bar = self
                .config
                .bar_char
                .to_string()
                .repeat(self.bar_length(*value, max_value));
            writeln!(
                output,
                "{:<label_width$} | {:>value_width$} | {}",
                label,
                value_text,
                bar,
                label_width = label_width,
                value_width = value_width
            )?;
        }

        Ok(output)
    }

    /// Print the chart to stdout
    pub fn print(&self) -> Result<()> {
        println!("{}", self.format()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<(String, f64)> {
        vec![
            ("Photosphere".to_string(), 100.0),
            ("Spot 1".to_string(), 35.0),
            ("Spot 2".to_string(), 0.0),
        ]
    }

    #[test]
    fn test_bar_lengths_scale_to_max() {
        let chart = BarChart::new(
            entries(),
            BarChartConfig {
                max_bar_width: 20,
                ..Default::default()
            },
        )
        .unwrap();

        let text = chart.format().unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('#').count(), 20);
        assert_eq!(lines[1].matches('#').count(), 7);
        assert_eq!(lines[2].matches('#').count(), 0);
    }

    #[test]
    fn test_title_and_unit() {
        let chart = BarChart::new(
            vec![("Spot".to_string(), 4444.2)],
            BarChartConfig {
                title: Some("Temperatures".to_string()),
                unit: "K".to_string(),
                precision: 0,
                ..Default::default()
            },
        )
        .unwrap();

        let text = chart.format().unwrap();
        assert!(text.starts_with("Temperatures\n============\n"));
        assert!(text.contains("4444 K"));
    }

    #[test]
    fn test_labels_are_aligned() {
        let chart = BarChart::new(entries(), BarChartConfig::default()).unwrap();
        let text = chart.format().unwrap();

        let separators: Vec<usize> = text.lines().map(|l| l.find('|').unwrap()).collect();
        assert!(separators.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_all_zero_values() {
        let chart = BarChart::new(
            vec![("a".to_string(), 0.0), ("b".to_string(), 0.0)],
            BarChartConfig::default(),
        )
        .unwrap();
        assert!(!chart.format().unwrap().contains('#'));
    }

    #[test]
    fn test_rejects_invalid_entries() {
        assert!(BarChart::new(vec![], BarChartConfig::default()).is_err());
        assert!(BarChart::new(vec![("x".to_string(), -1.0)], BarChartConfig::default()).is_err());
        assert!(
            BarChart::new(vec![("x".to_string(), f64::NAN)], BarChartConfig::default()).is_err()
        );
    }
}
