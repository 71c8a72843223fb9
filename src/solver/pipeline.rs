//! Pipeline orchestration.

use tracing::info;

use crate::annealing::{AnnealConfig, AnnealingSearch};
use crate::distance::DistanceMatrix;
use crate::local_search::{or_opt, two_opt};
use crate::models::{City, Tour};
use crate::profiles::Profile;

/// Final result of a pipeline run.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// The refined tour.
    pub tour: Tour,

    /// Its total cyclic cost, recomputed from coordinates after the last
    /// refinement stage.
    pub cost: i64,
}

/// Runs the full pipeline over the given cities.
///
/// Builds the distance matrix once, runs the annealing search with the
/// profile's budget, refines with 2-opt, then with 2.5-opt unless the
/// profile skips it, and recomputes the final cost directly from the edge
/// distances rather than trusting any value cached along the way.
///
/// Pass a seed for reproducible runs; `None` draws fresh entropy.
///
/// # Examples
///
/// ```
/// use tsp_stitch::models::City;
/// use tsp_stitch::profiles::Profile;
/// use tsp_stitch::solver::solve;
///
/// let cities = vec![
///     City::new(1, 0, 0),
///     City::new(2, 0, 10),
///     City::new(3, 10, 10),
///     City::new(4, 10, 0),
/// ];
/// let mut profile = Profile::standard();
/// profile.initial_temperature = 100.0;
/// profile.iterations_per_temperature = 100;
/// let outcome = solve(&cities, &profile, Some(42));
/// assert_eq!(outcome.cost, 40);
/// ```
pub fn solve(cities: &[City], profile: &Profile, seed: Option<u64>) -> SolveOutcome {
    let distances = DistanceMatrix::from_cities(cities);

    let mut config = AnnealConfig::default()
        .with_initial_temperature(profile.initial_temperature)
        .with_iterations_per_temperature(profile.iterations_per_temperature);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let annealed = AnnealingSearch::run(&distances, &config);
    info!(cost = annealed.best_cost, "annealing finished, applying 2-opt");

    let mut tour = annealed.best;
    two_opt(&mut tour, cities);

    if profile.skip_or_opt {
        info!("skipping 2.5-opt for this profile");
    } else {
        info!("applying 2.5-opt");
        or_opt(&mut tour, cities);
    }

    let cost = cycle_cost(&tour, cities);
    info!(cost, "pipeline complete");

    SolveOutcome { tour, cost }
}

/// Sums every edge of the cycle straight from the coordinates.
fn cycle_cost(tour: &Tour, cities: &[City]) -> i64 {
    let order = tour.cities();
    if order.is_empty() {
        return 0;
    }
    let mut cost = 0;
    for w in order.windows(2) {
        cost += cities[w[0] - 1].distance_to(&cities[w[1] - 1]);
    }
    cost += cities[order[order.len() - 1] - 1].distance_to(&cities[order[0] - 1]);
    cost
}
