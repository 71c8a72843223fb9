//! Simulated-annealing tour search.
//!
//! A single-solution trajectory search over tour permutations. A warm-up
//! phase of pure random restarts seeds the incumbent, then a
//! temperature-halving descent explores swap neighbors, accepting moves with
//! a logistic probability that tightens as the temperature falls.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, AnnealingSearch};
