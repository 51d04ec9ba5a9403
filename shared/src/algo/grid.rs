//! Evenly spaced sampling grids.

use ndarray::{Array1, Array2};

/// Return `samples` evenly spaced values over the closed interval `[start, stop]`.
///
/// Matches the usual `linspace` semantics: both end points are included,
/// a single sample yields `[start]` and zero samples yields an empty array.
/// Reversed intervals produce a descending sequence.
///
/// # Arguments
/// * `start` - First value of the sequence
/// * `stop` - Last value of the sequence
/// * `samples` - Number of values to generate
pub fn linspace(start: f64, stop: f64, samples: usize) -> Array1<f64> {
    match samples {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        n => {
            let step = (stop - start) / (n - 1) as f64;
            Array1::from_shape_fn(n, |i| {
                // Pin the last sample so rounding never drifts past `stop`
                if i == n - 1 {
                    stop
                } else {
                    start + step * i as f64
                }
            })
        }
    }
}

/// Build coordinate matrices from two coordinate vectors.
///
/// The returned `(xx, yy)` pair has shape `(ys.len(), xs.len())`, with
/// `xx[[row, col]] = xs[col]` and `yy[[row, col]] = ys[row]`.
pub fn meshgrid(xs: &Array1<f64>, ys: &Array1<f64>) -> (Array2<f64>, Array2<f64>) {
    let shape = (ys.len(), xs.len());
    let xx = Array2::from_shape_fn(shape, |(_, col)| xs[col]);
    let yy = Array2::from_shape_fn(shape, |(row, _)| ys[row]);
    (xx, yy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(-1.0, 1.0, 300);

        assert_eq!(values.len(), 300);
        assert_eq!(values[0], -1.0);
        assert_eq!(values[299], 1.0);
        assert_relative_eq!(values[1] - values[0], 2.0 / 299.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1).to_vec(), vec![3.0]);
        assert_eq!(linspace(3.0, 7.0, 2).to_vec(), vec![3.0, 7.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let values = linspace(10.0, 0.0, 11);
        for (i, v) in values.iter().enumerate() {
            assert_relative_eq!(*v, 10.0 - i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_meshgrid_orientation() {
        let xs = linspace(0.0, 2.0, 3);
        let ys = linspace(10.0, 11.0, 2);
        let (xx, yy) = meshgrid(&xs, &ys);

        assert_eq!(xx.dim(), (2, 3));
        assert_eq!(yy.dim(), (2, 3));
        assert_eq!(xx[[1, 2]], 2.0);
        assert_eq!(yy[[1, 2]], 11.0);
        assert_eq!(xx[[0, 0]], 0.0);
        assert_eq!(yy[[0, 1]], 10.0);
    }
}
