//! Dense distance matrix.

use crate::models::City;

/// A dense `(n+1)×(n+1)` distance matrix stored in row-major order.
///
/// Row and column 0 are unused padding: cities are addressed by their
/// 1-based ids, the same scheme tours use, so lookups never need an index
/// shift. Entries are rounded Euclidean distances computed once via
/// [`City::distance_to`], after which the matrix is immutable.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::City;
/// use tsp_stitch::distance::DistanceMatrix;
///
/// let cities = vec![City::new(1, 0, 0), City::new(2, 3, 4)];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(dm.get(1, 2), 5);
/// assert_eq!(dm.city_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the full matrix from city coordinates in O(n²).
    ///
    /// `cities[k]` must be the city with id `k + 1` (load order).
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let size = n + 1;
        let mut data = vec![0i64; size * size];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                data[(i + 1) * size + (j + 1)] = d;
                data[(j + 1) * size + (i + 1)] = d;
            }
        }
        Self { data, size }
    }

    /// Returns the distance between cities `from` and `to` (1-based ids).
    ///
    /// # Panics
    ///
    /// Panics if either id is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of cities covered by this matrix.
    pub fn city_count(&self) -> usize {
        self.size - 1
    }

    /// Returns `true` if the matrix is symmetric with a zero diagonal.
    pub fn is_symmetric(&self) -> bool {
        for i in 1..self.size {
            if self.get(i, i) != 0 {
                return false;
            }
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}
