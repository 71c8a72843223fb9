//! Domain model types for the TSP pipeline.
//!
//! Provides the two core abstractions: cities as immutable integer-coordinate
//! points, and tours as permutations of city ids with the perturbation moves
//! the annealing search is built on.

mod city;
mod tour;

pub use city::City;
pub use tour::Tour;
