//! Property tests for the tour operators and refiners.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tsp_stitch::distance::DistanceMatrix;
use tsp_stitch::evaluation::tour_cost;
use tsp_stitch::local_search::{or_opt, two_opt};
use tsp_stitch::models::{City, Tour};

fn cities_from(coords: &[(i64, i64)]) -> Vec<City> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| City::new(i + 1, x, y))
        .collect()
}

fn shuffled_tour(n: usize, seed: u64) -> Tour {
    let mut tour = Tour::identity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    tour.shuffle(&mut rng);
    tour
}

fn coord_vec() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..500, 0i64..500), 2..25)
}

proptest! {
    #[test]
    fn distance_is_symmetric_with_zero_diagonal(coords in coord_vec()) {
        let cities = cities_from(&coords);
        let dm = DistanceMatrix::from_cities(&cities);
        prop_assert!(dm.is_symmetric());
        for (i, a) in cities.iter().enumerate() {
            for b in &cities[i..] {
                prop_assert_eq!(a.distance_to(b), b.distance_to(a));
                prop_assert!(a.distance_to(b) >= 0);
            }
        }
    }

    #[test]
    fn matrix_agrees_with_coordinate_path(coords in coord_vec()) {
        let cities = cities_from(&coords);
        let dm = DistanceMatrix::from_cities(&cities);
        for i in 0..cities.len() {
            for j in 0..cities.len() {
                prop_assert_eq!(dm.get(i + 1, j + 1), cities[i].distance_to(&cities[j]));
            }
        }
    }

    #[test]
    fn cost_is_deterministic(coords in coord_vec(), seed in any::<u64>()) {
        let cities = cities_from(&coords);
        let dm = DistanceMatrix::from_cities(&cities);
        let tour = shuffled_tour(cities.len(), seed);
        prop_assert_eq!(tour_cost(&tour, &dm), tour_cost(&tour, &dm));
    }

    #[test]
    fn swap_random_preserves_permutation(n in 1usize..60, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tour = Tour::identity(n);
        for _ in 0..20 {
            tour = tour.swap_random(&mut rng);
            prop_assert!(tour.is_permutation());
        }
    }

    #[test]
    fn two_opt_never_worsens_and_preserves_permutation(
        coords in coord_vec(),
        seed in any::<u64>(),
    ) {
        let cities = cities_from(&coords);
        let dm = DistanceMatrix::from_cities(&cities);
        let mut tour = shuffled_tour(cities.len(), seed);
        let before = tour_cost(&tour, &dm);

        two_opt(&mut tour, &cities);

        prop_assert!(tour.is_permutation());
        prop_assert!(tour_cost(&tour, &dm) <= before);
    }

    #[test]
    fn two_opt_reaches_a_fixpoint(coords in coord_vec(), seed in any::<u64>()) {
        let cities = cities_from(&coords);
        let mut tour = shuffled_tour(cities.len(), seed);
        two_opt(&mut tour, &cities);
        let settled = tour.clone();
        two_opt(&mut tour, &cities);
        prop_assert_eq!(tour, settled);
    }

    #[test]
    fn or_opt_never_worsens_and_preserves_permutation(
        coords in coord_vec(),
        seed in any::<u64>(),
    ) {
        let cities = cities_from(&coords);
        let dm = DistanceMatrix::from_cities(&cities);
        let mut tour = shuffled_tour(cities.len(), seed);
        let before = tour_cost(&tour, &dm);

        or_opt(&mut tour, &cities);

        prop_assert!(tour.is_permutation());
        prop_assert!(tour_cost(&tour, &dm) <= before);
    }

    #[test]
    fn or_opt_reaches_a_fixpoint(coords in coord_vec(), seed in any::<u64>()) {
        let cities = cities_from(&coords);
        let mut tour = shuffled_tour(cities.len(), seed);
        or_opt(&mut tour, &cities);
        let settled = tour.clone();
        or_opt(&mut tour, &cities);
        prop_assert_eq!(tour, settled);
    }

    // Known limitation: the refiners scan i in 0..len-4 and j in i+3..len-4,
    // so the last three tour positions are never candidate endpoints and the
    // tail of the tour is only ever improved indirectly. This pins the
    // behavior down so a change to the bound shows up as a test failure.
    #[test]
    fn refiners_leave_tail_positions_in_place_on_settled_tours(
        coords in prop::collection::vec((0i64..500, 0i64..500), 8..20),
        seed in any::<u64>(),
    ) {
        let cities = cities_from(&coords);
        let mut tour = shuffled_tour(cities.len(), seed);
        two_opt(&mut tour, &cities);

        // A settled tour re-entered with any suffix-only disturbance stays
        // disturbed: no candidate pair can see the last three positions.
        let n = tour.len();
        let mut perturbed = tour.clone();
        perturbed.cities_mut().swap(n - 1, n - 2);
        let expected = perturbed.clone();
        // (i, j) pairs never index beyond len-5, so the swap is invisible
        // to another pass unless it changed an edge inside the window.
        two_opt(&mut perturbed, &cities);
        prop_assert_eq!(&perturbed.cities()[n - 2..], &expected.cities()[n - 2..]);
    }
}
