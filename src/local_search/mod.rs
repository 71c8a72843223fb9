//! Local search refiners for annealed tours.
//!
//! - [`two_opt`] — 2-opt edge exchange via segment reversal
//! - [`or_opt`] — 2.5-opt single-node relocation

mod or_opt;
mod two_opt;

pub use or_opt::or_opt;
pub use two_opt::two_opt;

use crate::models::City;

/// Distance between two cities addressed by their 1-based tour ids.
///
/// The refiners recompute distances from coordinates rather than going
/// through the matrix; [`City::distance_to`] applies the same rounding rule,
/// so both paths agree exactly. This is the one place the 1-based id scheme
/// meets the 0-based city slice.
fn leg(cities: &[City], from: usize, to: usize) -> i64 {
    cities[from - 1].distance_to(&cities[to - 1])
}
