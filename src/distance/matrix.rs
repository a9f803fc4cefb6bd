//! Dense distance matrix.

use super::DistanceMetric;
use crate::models::Coordinate;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per optimization so the permutation search reads leg lengths
/// instead of re-evaluating the metric `n!·(n−1)` times. Entries are exactly
/// the values the metric returns.
///
/// # Examples
///
/// ```
/// use u_delivery::distance::{DistanceMatrix, Haversine};
/// use u_delivery::models::Coordinate;
///
/// let coords = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 1.0).unwrap(),
///     Coordinate::new(1.0, 0.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_coordinates(&coords, &Haversine::default());
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert_eq!(dm.get(0, 1), dm.get(1, 0));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes pairwise distances between coordinates with `metric`.
    ///
    /// The metric is evaluated once per unordered pair and mirrored.
    pub fn from_coordinates<M: DistanceMetric + ?Sized>(coords: &[Coordinate], metric: &M) -> Self {
        let n = coords.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(coords[i], coords[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total length of an open path visiting `order` (no return leg).
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order
            .windows(2)
            .map(|leg| self.get(leg[0], leg[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{haversine, Haversine};

    fn sample_coords() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0).expect("valid"),
            Coordinate::new(0.0, 1.0).expect("valid"),
            Coordinate::new(1.0, 0.0).expect("valid"),
        ]
    }

    #[test]
    fn test_from_coordinates() {
        let coords = sample_coords();
        let dm = DistanceMatrix::from_coordinates(&coords, &Haversine::default());
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), haversine(coords[0], coords[1]));
        assert_eq!(dm.get(1, 2), haversine(coords[1], coords[2]));
        assert_eq!(dm.get(2, 2), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_coordinates(&sample_coords(), &Haversine::default());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_path_length() {
        let coords = sample_coords();
        let dm = DistanceMatrix::from_coordinates(&coords, &Haversine::default());
        let expected = dm.get(2, 0) + dm.get(0, 1);
        assert_eq!(dm.path_length(&[2, 0, 1]), expected);
        assert_eq!(dm.path_length(&[1]), 0.0);
        assert_eq!(dm.path_length(&[]), 0.0);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_coordinates(&[], &Haversine::default());
        assert_eq!(dm.size(), 0);
    }
}
