//! Summary statistics over masked regions of a 2D field.
//!
//! Used to characterise regions of a rendered image (for example the pixels
//! inside a sunspot umbra) without copying them out first. NaN samples are
//! ignored, matching how the rest of the workspace treats invalid data.

use std::fmt;

use ndarray::ArrayView2;

/// Minimum, maximum and mean of the selected samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskedStats {
    /// Smallest selected value
    pub min: f64,
    /// Largest selected value
    pub max: f64,
    /// Arithmetic mean of the selected values
    pub mean: f64,
    /// Number of samples that contributed
    pub count: usize,
}

impl fmt::Display for MaskedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.4} max={:.4} mean={:.4} (n={})",
            self.min, self.max, self.mean, self.count
        )
    }
}

/// Compute statistics of `values` over the samples where `mask` is true.
///
/// # Arguments
/// * `values` - Field to summarise
/// * `mask` - Selection mask with the same shape as `values`
///
/// # Returns
/// `None` when the shapes differ or no finite sample is selected.
pub fn masked_stats(values: ArrayView2<f64>, mask: ArrayView2<bool>) -> Option<MaskedStats> {
    if values.dim() != mask.dim() {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for (&value, &selected) in values.iter().zip(mask.iter()) {
        if !selected || value.is_nan() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
        sum += value;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(MaskedStats {
        min,
        max,
        mean: sum / count as f64,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_masked_stats_selects_region() {
        let values = array![[1.0, 2.0], [3.0, 4.0]];
        let mask = array![[false, true], [true, false]];

        let stats = masked_stats(values.view(), mask.view()).unwrap();

        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 3.0);
        assert_relative_eq!(stats.mean, 2.5);
        assert_eq!(stats.count, 2);
    }

    #[test]
    fn test_masked_stats_skips_nan() {
        let values = array![[f64::NAN, 5.0], [1.0, 2.0]];
        let mask = Array2::from_elem((2, 2), true);

        let stats = masked_stats(values.view(), mask.view()).unwrap();

        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
    }

    #[test]
    fn test_masked_stats_empty_selection() {
        let values = array![[1.0, 2.0]];
        let mask = array![[false, false]];
        assert!(masked_stats(values.view(), mask.view()).is_none());
    }

    #[test]
    fn test_masked_stats_shape_mismatch() {
        let values = Array2::<f64>::zeros((2, 2));
        let mask = Array2::from_elem((3, 2), true);
        assert!(masked_stats(values.view(), mask.view()).is_none());
    }
}
