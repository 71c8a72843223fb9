//! 2.5-opt single-node relocation.
//!
//! # Algorithm
//!
//! Where 2-opt exchanges two edges, this move rewires three: it pulls one
//! node out of the tour and splices it back in next to a non-adjacent edge.
//! Each candidate pair `(i, j)` is checked in both directions — moving the
//! node after `i` to just before `j`, and moving the node before `j` to just
//! after `i` — and every strictly improving relocation is applied. Passes
//! repeat until one completes with no relocation.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::leg;
use crate::models::{City, Tour};

/// Applies 2.5-opt refinement to the tour in place until no improving
/// relocation remains.
///
/// Scans the same `(i, j)` candidate window as
/// [`two_opt`](super::two_opt): `i` in `0..len-4`, `j` in `i+3..len-4`, with
/// the same untouched three-position tail. Both direction checks run
/// independently in each inner step; either, both, or neither may fire.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::{City, Tour};
/// use tsp_stitch::local_search::or_opt;
///
/// let cities: Vec<City> = (0..10)
///     .map(|i| City::new(i + 1, i as i64 * 5, (i as i64 % 3) * 2))
///     .collect();
/// let mut tour = Tour::identity(10);
/// or_opt(&mut tour, &cities);
/// assert!(tour.is_permutation());
/// ```
pub fn or_opt(tour: &mut Tour, cities: &[City]) {
    let bound = tour.len().saturating_sub(4);
    let mut changed = true;

    while changed {
        changed = false;
        for i in 0..bound {
            for j in (i + 3)..bound {
                // Forward: move the node at i+1 to just before j.
                let order = tour.cities();
                let current = leg(cities, order[i], order[i + 1])
                    + leg(cities, order[i + 1], order[i + 2])
                    + leg(cities, order[j - 1], order[j]);
                let relocated = leg(cities, order[i], order[i + 2])
                    + leg(cities, order[j - 1], order[i + 1])
                    + leg(cities, order[i + 1], order[j]);

                if relocated < current {
                    tour.cities_mut()[i + 1..j].rotate_left(1);
                    changed = true;
                }

                // Backward: move the node at j-1 to just after i.
                let order = tour.cities();
                let current = leg(cities, order[i], order[i + 1])
                    + leg(cities, order[j - 2], order[j - 1])
                    + leg(cities, order[j - 1], order[j]);
                let relocated = leg(cities, order[i], order[j - 1])
                    + leg(cities, order[j - 1], order[i + 1])
                    + leg(cities, order[j - 2], order[j]);

                if relocated < current {
                    tour.cities_mut()[i + 1..j].rotate_right(1);
                    changed = true;
                }
            }
        }
    }
}
