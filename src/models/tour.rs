//! Tour permutation type.

use rand::seq::SliceRandom;
use rand::Rng;

/// A tour: a permutation of the 1-based city ids `1..=n`, visited in order
/// and closed by the wrap edge from the last position back to the first.
///
/// Every mutating operation preserves the permutation property — no city is
/// ever duplicated or dropped.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::Tour;
///
/// let tour = Tour::identity(4);
/// assert_eq!(tour.cities(), &[1, 2, 3, 4]);
/// assert!(tour.is_permutation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates a tour from an explicit visiting order.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// Creates the identity tour `1, 2, ..., n`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (1..=n).collect(),
        }
    }

    /// Returns the visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Returns a mutable view of the visiting order.
    pub fn cities_mut(&mut self) -> &mut [usize] {
        &mut self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns a copy of this tour with two uniformly random positions
    /// swapped.
    ///
    /// The two positions are drawn independently, so they may coincide and
    /// the swap may be a no-op. This single move doubles as the initial
    /// randomizer and the neighbor generator of the annealing search.
    pub fn swap_random<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut next = self.clone();
        let n = next.cities.len();
        if n > 0 {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            next.cities.swap(a, b);
        }
        next
    }

    /// Fully shuffles the visiting order in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cities.shuffle(rng);
    }

    /// Returns true if the tour visits each of `1..=n` exactly once.
    pub fn is_permutation(&self) -> bool {
        let n = self.cities.len();
        let mut seen = vec![false; n + 1];
        for &id in &self.cities {
            if id == 0 || id > n || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }
}
