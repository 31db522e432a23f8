use ndarray::{Array, Array1, Ix1};
use std::ops::Index;

use static_assertions::const_assert;

/// Number of angular samples across the pattern.
pub const SAMPLE_COUNT: usize = 200;
/// Half-width of the sampled angular window, in radians.
pub const MAX_ANGLE: f64 = 0.1;

// the centre sample has to land exactly on zero
const_assert!(SAMPLE_COUNT % 2 == 0);

/// Relative intensity sampled over a symmetric angular window, ordered from negative to positive angle.
pub struct IntensityCurve {
    angles: Array1<f64>,
    intensities: Array1<f64>,
}

impl IntensityCurve {
    /// Samples `f` at every angle of the grid.
    pub fn from_function(f: impl Fn(f64) -> f64) -> Self {
        let angles = angular_grid();
        let intensities = angles.mapv(f);
        IntensityCurve {
            angles,
            intensities,
        }
    }

    pub fn values(&self) -> &[f64] {
        self.intensities.as_slice().unwrap_or_default()
    }

    pub fn angles(&self) -> &[f64] {
        self.angles.as_slice().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    /// Index of the sample at zero angle.
    pub fn centre(&self) -> usize {
        SAMPLE_COUNT / 2
    }

    pub fn angle_at(&self, idx: usize) -> f64 {
        self.angles[idx]
    }

    pub fn max(&self) -> f64 {
        self.intensities.fold(0.0, |acc, &i| acc.max(i))
    }
}

impl Index<usize> for IntensityCurve {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.intensities[index]
    }
}

/// θ_i = MAX_ANGLE · (i − N/2) / (N/2). The grid starts at −MAX_ANGLE and stops one step short of +MAX_ANGLE.
fn angular_grid() -> Array1<f64> {
    let half = (SAMPLE_COUNT / 2) as f64;
    let mut angles = Array::zeros(Ix1(SAMPLE_COUNT));
    for (i, theta) in angles.iter_mut().enumerate() {
        *theta = MAX_ANGLE * (i as f64 - half) / half;
    }
    angles
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn grid_has_fixed_length() {
        let curve = IntensityCurve::from_function(|_| 0.5);
        assert_eq!(curve.len(), SAMPLE_COUNT);
        assert_eq!(curve.values().len(), SAMPLE_COUNT);
        assert_eq!(curve.angles().len(), SAMPLE_COUNT);
    }

    #[test]
    fn centre_sample_is_zero_angle() {
        let curve = IntensityCurve::from_function(|theta| theta);
        assert_eq!(curve.centre(), 100);
        assert_eq!(curve.angle_at(curve.centre()), 0.0);
    }

    #[test]
    fn grid_spans_window() {
        let curve = IntensityCurve::from_function(|theta| theta);
        assert!((curve.angle_at(0) + MAX_ANGLE).abs() < EPS);
        let step = MAX_ANGLE / (SAMPLE_COUNT / 2) as f64;
        assert!((curve.angle_at(SAMPLE_COUNT - 1) - (MAX_ANGLE - step)).abs() < EPS);
        assert!(curve.angles().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn grid_mirrors_about_centre() {
        let curve = IntensityCurve::from_function(|theta| theta);
        for i in 1..SAMPLE_COUNT {
            assert_eq!(curve.angle_at(i), -curve.angle_at(SAMPLE_COUNT - i));
        }
    }

    #[test]
    fn index_matches_values() {
        let curve = IntensityCurve::from_function(|theta| theta * theta);
        assert_eq!(curve[37], curve.values()[37]);
        assert!((curve.max() - MAX_ANGLE * MAX_ANGLE).abs() < EPS);
    }
}
