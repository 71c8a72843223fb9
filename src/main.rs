use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{arg, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tsp_stitch::io::{read_cities, write_elapsed, write_tour};
use tsp_stitch::profiles::{InstanceClass, ProfilePolicy};
use tsp_stitch::solver::solve;

fn cli() -> Command {
    Command::new("tsp-stitch")
        .about("Approximate Euclidean TSP solver: simulated annealing refined by 2-opt and Or-opt")
        .arg(
            arg!(<INPUT> "Path to a whitespace-separated `id x y` coordinate file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--profiles [FILE] "JSON profile policy overriding the built-in tuning table")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--seed [SEED] "Random seed for a reproducible run")
                .value_parser(clap::value_parser!(u64)),
        )
}

/// `<input>.tour` / `<input>.time`, keeping the input's own extension.
fn artifact_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(format!(".{suffix}"));
    PathBuf::from(name)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = cli().get_matches();
    let input = matches
        .get_one::<PathBuf>("INPUT")
        .expect("INPUT is required");
    let seed = matches.get_one::<u64>("seed").copied();

    let policy = match matches.get_one::<PathBuf>("profiles") {
        Some(path) => ProfilePolicy::from_json_file(path)
            .with_context(|| format!("loading profile policy from {}", path.display()))?,
        None => ProfilePolicy::default(),
    };

    let started = Instant::now();

    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let class = InstanceClass::from_file_name(file_name);
    let profile = policy.profile_for(&class);

    let cities =
        read_cities(input).with_context(|| format!("reading cities from {}", input.display()))?;
    info!(cities = cities.len(), "instance loaded");

    let outcome = solve(&cities, &profile, seed);

    let tour_path = artifact_path(input, "tour");
    write_tour(&tour_path, outcome.cost, &outcome.tour)
        .with_context(|| format!("writing tour to {}", tour_path.display()))?;

    let elapsed = started.elapsed().as_secs_f64();
    let time_path = artifact_path(input, "time");
    write_elapsed(&time_path, elapsed)
        .with_context(|| format!("writing elapsed time to {}", time_path.display()))?;

    info!(cost = outcome.cost, elapsed, "run complete");
    Ok(())
}
