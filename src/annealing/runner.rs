//! Annealing execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::config::AnnealConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_cost;
use crate::models::Tour;

/// Result of a simulated-annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best tour found.
    pub best: Tour,

    /// Cost of the best tour.
    pub best_cost: i64,

    /// Total number of neighbor evaluations in the descent phase.
    pub iterations: usize,

    /// Number of accepted moves (including worsening ones).
    pub accepted_moves: usize,

    /// Temperature when the descent stopped.
    pub final_temperature: f64,
}

/// Executes the simulated-annealing search.
pub struct AnnealingSearch;

impl AnnealingSearch {
    /// Runs the search over all cities covered by `distances`.
    ///
    /// Three phases, in order:
    ///
    /// 1. Start from the identity ordering with one random swap applied.
    /// 2. Warm-up: fully reshuffle the working tour `warmup_shuffles` times,
    ///    keeping the cheapest shuffle seen, then restart from it. No
    ///    temperature is involved; this is pure random restart.
    /// 3. Descent: halve the temperature each outer step until it reaches
    ///    `min_temperature`. At each level, evaluate
    ///    `iterations_per_temperature` swap neighbors and accept each with
    ///    probability `1 / (1 + exp(-deltaE / T))`, where `deltaE` is the
    ///    cost decrease. This logistic acceptance (rather than the classical
    ///    `exp(deltaE/T)` Metropolis rule) accepts improving moves with
    ///    probability above one half and worsening moves below it, never
    ///    with certainty in either direction.
    ///
    /// The incumbent follows every accepted move, worsening or not; the
    /// returned best is only ever replaced on strict improvement.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails [`AnnealConfig::validate`].
    pub fn run(distances: &DistanceMatrix, config: &AnnealConfig) -> AnnealResult {
        config.validate().expect("invalid AnnealConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let n = distances.city_count();
        let mut current = Tour::identity(n).swap_random(&mut rng);
        let mut best = current.clone();
        let mut best_cost = tour_cost(&best, distances);

        for _ in 0..config.warmup_shuffles {
            current.shuffle(&mut rng);
            let cost = tour_cost(&current, distances);
            if cost < best_cost {
                best_cost = cost;
                best = current.clone();
            }
        }
        current = best.clone();
        debug!(cost = best_cost, "warm-up complete");

        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut temperature = config.initial_temperature;

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = current.swap_random(&mut rng);
                let delta_e =
                    (tour_cost(&current, distances) - tour_cost(&neighbor, distances)) as f64;
                let p = 1.0 / (1.0 + (-delta_e / temperature).exp());

                if rng.random_range(0.0..1.0) < p {
                    current = neighbor;
                    accepted_moves += 1;
                    let cost = tour_cost(&current, distances);
                    if cost < best_cost {
                        best = current.clone();
                        best_cost = cost;
                    }
                }
                iterations += 1;
            }
            temperature *= 0.5;
        }

        debug!(cost = best_cost, iterations, "descent complete");

        AnnealResult {
            best,
            best_cost,
            iterations,
            accepted_moves,
            final_temperature: temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn small_config() -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(100.0)
            .with_iterations_per_temperature(200)
            .with_warmup_shuffles(100)
            .with_seed(42)
    }

    fn square_cities() -> Vec<City> {
        vec![
            City::new(1, 0, 0),
            City::new(2, 0, 10),
            City::new(3, 10, 10),
            City::new(4, 10, 0),
        ]
    }

    #[test]
    fn test_finds_square_optimum() {
        // Only three tour shapes exist on four cities; the warm-up alone
        // all but guarantees the 40-cost perimeter is found.
        let dm = DistanceMatrix::from_cities(&square_cities());
        let result = AnnealingSearch::run(&dm, &small_config());
        assert_eq!(result.best_cost, 40);
        assert!(result.best.is_permutation());
    }

    #[test]
    fn test_result_cost_matches_tour() {
        let dm = DistanceMatrix::from_cities(&square_cities());
        let result = AnnealingSearch::run(&dm, &small_config());
        assert_eq!(result.best_cost, tour_cost(&result.best, &dm));
    }

    #[test]
    fn test_descent_runs_expected_iterations() {
        // 100 → 50 → ... → 0.01: temperature halves until it crosses the floor
        let dm = DistanceMatrix::from_cities(&square_cities());
        let result = AnnealingSearch::run(&dm, &small_config());
        let outer_steps = result.iterations / 200;
        assert!(outer_steps > 10, "expected many outer steps, got {outer_steps}");
        assert!(result.final_temperature <= 0.01);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let dm = DistanceMatrix::from_cities(&square_cities());
        let a = AnnealingSearch::run(&dm, &small_config());
        let b = AnnealingSearch::run(&dm, &small_config());
        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_two_city_instance() {
        let cities = vec![City::new(1, 0, 0), City::new(2, 3, 4)];
        let dm = DistanceMatrix::from_cities(&cities);
        let result = AnnealingSearch::run(&dm, &small_config());
        assert_eq!(result.best_cost, 10);
        assert!(result.best.is_permutation());
    }

    #[test]
    #[should_panic(expected = "invalid AnnealConfig")]
    fn test_invalid_config_panics() {
        let dm = DistanceMatrix::from_cities(&square_cities());
        let config = AnnealConfig::default().with_initial_temperature(-5.0);
        AnnealingSearch::run(&dm, &config);
    }

    #[test]
    fn test_accepts_some_worsening_moves() {
        // With a high floor the temperature stays hot and the logistic rule
        // should accept far more moves than the handful of strict improvements.
        let cities: Vec<City> = (0..10)
            .map(|i| City::new(i + 1, (i as i64 % 5) * 7, (i as i64 / 5) * 9))
            .collect();
        let dm = DistanceMatrix::from_cities(&cities);
        let config = AnnealConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_iterations_per_temperature(500)
            .with_warmup_shuffles(10)
            .with_seed(7);
        let result = AnnealingSearch::run(&dm, &config);
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.4, "expected hot acceptance, got {ratio}");
    }
}
