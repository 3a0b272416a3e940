//! Euclidean distances under open and periodic-XY boundaries.

use crate::domain::Boundary;
use nufeb_core::PointTable;

/// Squared Euclidean distance.
pub fn squared_distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

/// Shortest separation along a wrapped axis of length `len`.
pub fn wrapped_delta(d: f64, len: f64) -> f64 {
    let d = d.abs() % len;
    d.min(len - d)
}

impl Boundary {
    /// Squared distance using the minimum image on wrapped axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use nufeb_spatial::Boundary;
    ///
    /// let torus = Boundary::PeriodicXY { xlen: 5.0, ylen: 9.0 };
    /// let a = [0.5, 0.0, 0.0];
    /// let b = [4.5, 0.0, 0.0];
    /// assert_eq!(Boundary::Open.squared_distance(a, b), 16.0);
    /// assert_eq!(torus.squared_distance(a, b), 1.0);
    /// ```
    pub fn squared_distance(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        match *self {
            Self::Open => squared_distance(a, b),
            Self::PeriodicXY { xlen, ylen } => {
                let dx = wrapped_delta(a[0] - b[0], xlen);
                let dy = wrapped_delta(a[1] - b[1], ylen);
                let dz = a[2] - b[2];
                dx * dx + dy * dy + dz * dz
            }
        }
    }

    /// Euclidean distance using the minimum image on wrapped axes.
    pub fn distance(&self, a: [f64; 3], b: [f64; 3]) -> f64 {
        self.squared_distance(a, b).sqrt()
    }
}

/// Dense row-major matrix of squared pairwise distances.
///
/// Memory is `n²` floats; intended for snapshots of a few thousand agents.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Squared distances between every pair of rows in `points`.
    pub fn squared(points: &PointTable, boundary: &Boundary) -> Self {
        let coords: Vec<[f64; 3]> = points.iter().map(|p| p.coords()).collect();
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d2 = boundary.squared_distance(coords[i], coords[j]);
                data[i * n + j] = d2;
                data[j * n + i] = d2;
            }
        }
        Self { n, data }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    /// `true` for a 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nufeb_core::Point;
    use proptest::prelude::*;

    #[test]
    fn wrapped_delta_takes_short_way() {
        assert_eq!(wrapped_delta(4.0, 5.0), 1.0);
        assert_eq!(wrapped_delta(-4.0, 5.0), 1.0);
        assert_eq!(wrapped_delta(2.0, 5.0), 2.0);
        assert_eq!(wrapped_delta(0.0, 5.0), 0.0);
        assert_eq!(wrapped_delta(5.0, 5.0), 0.0);
    }

    #[test]
    fn wrapped_delta_reduces_beyond_one_period() {
        assert!((wrapped_delta(6.0, 5.0) - 1.0).abs() < 1e-12);
        assert!((wrapped_delta(-9.5, 5.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn z_never_wraps() {
        let torus = Boundary::PeriodicXY {
            xlen: 5.0,
            ylen: 5.0,
        };
        assert_eq!(torus.squared_distance([0.0, 0.0, 0.0], [0.0, 0.0, 4.0]), 16.0);
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let points = PointTable::new(vec![
            Point::new(1, 1, [0.0, 0.0, 0.0]),
            Point::new(2, 2, [1.0, 1.0, 0.0]),
            Point::new(3, 1, [3.0, 2.0, 0.0]),
            Point::new(4, 3, [0.0, 4.0, 5.0]),
        ])
        .unwrap();
        let m = DistanceMatrix::squared(&points, &Boundary::Open);
        assert_eq!(m.len(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 2), 5.0);
        assert_eq!(m.row(0), &[0.0, 2.0, 13.0, 41.0]);
    }

    proptest! {
        #[test]
        fn periodic_never_exceeds_open(
            ax in 0.0f64..10.0, ay in 0.0f64..6.0, az in 0.0f64..3.0,
            bx in 0.0f64..10.0, by in 0.0f64..6.0, bz in 0.0f64..3.0,
        ) {
            let torus = Boundary::PeriodicXY { xlen: 10.0, ylen: 6.0 };
            let a = [ax, ay, az];
            let b = [bx, by, bz];
            let open = Boundary::Open.squared_distance(a, b);
            let wrapped = torus.squared_distance(a, b);
            prop_assert!(wrapped <= open + 1e-9);
            prop_assert!((wrapped - torus.squared_distance(b, a)).abs() < 1e-12);
            // Minimum image never exceeds half a period per axis.
            prop_assert!(wrapped <= 25.0 + 9.0 + (az - bz).powi(2) + 1e-9);
        }
    }
}
