//! Cyclic tour cost against a distance matrix.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Computes the total cost of a tour: the sum of consecutive edge distances
/// plus the wrap edge from the last city back to the first.
///
/// Pure function of the tour and the matrix, O(n) per call. This is the
/// hottest operation in the crate — the annealing inner loop evaluates it
/// for every neighbor it considers.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::{City, Tour};
/// use tsp_stitch::distance::DistanceMatrix;
/// use tsp_stitch::evaluation::tour_cost;
///
/// let cities = vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 10),
///     City::new(3, 10, 10),
///     City::new(4, 10, 0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(tour_cost(&Tour::identity(4), &dm), 40);
/// ```
pub fn tour_cost(tour: &Tour, distances: &DistanceMatrix) -> i64 {
    let order = tour.cities();
    if order.is_empty() {
        return 0;
    }
    let mut cost = 0;
    for w in order.windows(2) {
        cost += distances.get(w[0], w[1]);
    }
    cost += distances.get(order[order.len() - 1], order[0]);
    cost
}
