//! Coordinate file parsing.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::City;

/// Reads a coordinate file into cities.
///
/// Returns [`Error::Io`] if the file cannot be opened and
/// [`Error::EmptyInput`] if no city line parses.
pub fn read_cities(path: &Path) -> Result<Vec<City>> {
    let text = fs::read_to_string(path)?;
    let cities = parse_cities(&text);
    if cities.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(cities)
}

/// Parses whitespace-separated `id x y` integer triples, one city per line.
///
/// Parsing of a line stops at its first unparsable token; lines that yield
/// fewer than three integers are skipped rather than aborting the run.
/// Tokens after the third are ignored. Cities are numbered 1, 2, ... in
/// load order — the declared id is accepted as the first integer of the
/// triple but positions in the tour always refer to load order, which
/// matches the declared ids in well-formed inputs.
///
/// # Examples
///
/// ```
/// use tsp_stitch::io::parse_cities;
///
/// let cities = parse_cities("1 0 0\n2 3 4\n");
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].x(), 3);
/// ```
pub fn parse_cities(text: &str) -> Vec<City> {
    let mut cities = Vec::new();
    for line in text.lines() {
        let mut values = [0i64; 3];
        let mut count = 0;
        for token in line.split_whitespace() {
            match token.parse::<i64>() {
                Ok(v) => {
                    if count < 3 {
                        values[count] = v;
                    }
                    count += 1;
                }
                Err(_) => break,
            }
        }
        if count >= 3 {
            cities.push(City::new(cities.len() + 1, values[1], values[2]));
        }
    }
    cities
}
