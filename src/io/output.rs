//! Result artifacts.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::models::Tour;

/// Writes the tour artifact: the total cost on the first line, then one
/// city per line in visiting order.
///
/// Cities are written 0-based (internal id minus one) to match the external
/// convention; this is the only place the conversion happens.
pub fn write_tour(path: &Path, cost: i64, tour: &Tour) -> Result<()> {
    let mut out = String::with_capacity(tour.len() * 8 + 16);
    out.push_str(&cost.to_string());
    out.push('\n');
    for &id in tour.cities() {
        out.push_str(&(id - 1).to_string());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Writes the elapsed-time artifact: wall-clock seconds for the whole run.
///
/// Purely observational; nothing reads it back.
pub fn write_elapsed(path: &Path, seconds: f64) -> Result<()> {
    let mut file = fs::File::create(path)?;
    write!(file, "{seconds}")?;
    Ok(())
}
