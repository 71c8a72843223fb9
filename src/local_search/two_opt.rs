//! 2-opt edge exchange.
//!
//! # Algorithm
//!
//! For each candidate pair of positions `(i, j)`, compare the two edges
//! `(tour[i], tour[i+1])` and `(tour[j-1], tour[j])` against the reconnection
//! `(tour[i], tour[j-1])` and `(tour[i+1], tour[j])`. When the reconnection
//! is shorter, the edges cross; reversing the segment between them
//! straightens the tour. Passes repeat until one completes with no reversal.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::leg;
use crate::models::{City, Tour};

/// Applies 2-opt refinement to the tour in place until no improving
/// reversal remains.
///
/// Candidate positions scan `i` in `0..len-4` and `j` in `i+3..len-4`, so
/// the last three tour positions are never chosen as an endpoint; they only
/// improve indirectly when a reversal upstream shifts them. Tours too short
/// to form any candidate pair (fewer than 8 cities) are returned unchanged.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::{City, Tour};
/// use tsp_stitch::local_search::two_opt;
///
/// let cities: Vec<City> = (0..10)
///     .map(|i| City::new(i + 1, i as i64 * 3, (i as i64 % 2) * 4))
///     .collect();
/// let mut tour = Tour::identity(10);
/// two_opt(&mut tour, &cities);
/// assert!(tour.is_permutation());
/// ```
pub fn two_opt(tour: &mut Tour, cities: &[City]) {
    let bound = tour.len().saturating_sub(4);
    let mut changed = true;

    while changed {
        changed = false;
        for i in 0..bound {
            for j in (i + 3)..bound {
                let order = tour.cities();
                let d1 = leg(cities, order[i], order[i + 1]);
                let d2 = leg(cities, order[j - 1], order[j]);
                let d3 = leg(cities, order[i], order[j - 1]);
                let d4 = leg(cities, order[i + 1], order[j]);

                if d1 + d2 > d3 + d4 {
                    tour.cities_mut()[i + 1..j].reverse();
                    changed = true;
                }
            }
        }
    }
}
