//! The full three-stage pipeline.

mod pipeline;

pub use pipeline::{solve, SolveOutcome};
