// Rating CLI entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays clean for output)
// 2. Load config (config/rating.toml if present, built-in defaults otherwise)
// 3. Import stat lines from the given CSV
// 4. Rate every line; report invalid ones inline
// 5. Print a ranked table, or JSON with --json

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use hooprate::config;
use hooprate::import;
use hooprate::rating::{validate_and_compute, PlayerRating, PlayerStats};

/// One successfully rated line, in output order.
#[derive(Debug, Serialize)]
struct RatedLine {
    name: String,
    team: Option<String>,
    season: Option<String>,
    rating: PlayerRating,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // 1. Initialize tracing
    init_tracing();

    // Argument parsing: a CSV path plus an optional output switch.
    let mut csv_path: Option<PathBuf> = None;
    let mut json_output = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                println!("usage: hooprate <stats.csv> [--json]");
                return Ok(ExitCode::SUCCESS);
            }
            other if csv_path.is_none() => csv_path = Some(PathBuf::from(other)),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }
    let Some(csv_path) = csv_path else {
        eprintln!("usage: hooprate <stats.csv> [--json]");
        return Ok(ExitCode::FAILURE);
    };

    // 2. Load config
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = config::load_config_or_default(&cwd).context("failed to load configuration")?;
    info!(
        "Config loaded: pace_factor={}, average_rating={}",
        config.league.pace_factor, config.league.average_rating
    );

    // 3. Import stat lines
    let lines = import::load_stats(&csv_path).context("failed to load stat lines")?;
    info!("Loaded {} stat lines from {}", lines.len(), csv_path.display());

    // 4. Rate every line. Invalid rows are reported, not fatal.
    let mut rated: Vec<RatedLine> = Vec::with_capacity(lines.len());
    let mut rejected = 0usize;
    for stats in lines {
        match validate_and_compute(&stats, &config.league, &config.weights) {
            Ok(rating) => rated.push(to_rated_line(stats, rating)),
            Err(e) => {
                rejected += 1;
                warn!("'{}' rejected: {}", stats.name, e);
                eprintln!("'{}' rejected: {}", stats.name, e);
            }
        }
    }

    rated.sort_by(|a, b| {
        b.rating
            .adjusted_value
            .partial_cmp(&a.rating.adjusted_value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // 5. Output
    if json_output {
        println!("{}", serde_json::to_string_pretty(&rated)?);
    } else {
        print_table(&rated);
    }

    if rejected > 0 {
        info!("{} of {} lines rejected", rejected, rejected + rated.len());
    }

    Ok(ExitCode::SUCCESS)
}

fn to_rated_line(stats: PlayerStats, rating: PlayerRating) -> RatedLine {
    RatedLine {
        name: stats.name,
        team: stats.team,
        season: stats.season,
        rating,
    }
}

fn print_table(rated: &[RatedLine]) {
    println!(
        "{:>3}  {:<24} {:<5} {:>7} {:>7}  {}",
        "#", "NAME", "TEAM", "RATING", "RAW", "TIER"
    );
    for (i, line) in rated.iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:<5} {:>7.2} {:>7.2}  {}",
            i + 1,
            line.name,
            line.team.as_deref().unwrap_or("-"),
            line.rating.adjusted_value,
            line.rating.raw_value,
            line.rating.tier,
        );
    }
}

/// Initialize tracing to stderr; stdout is reserved for the table/JSON.
fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hooprate=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();

    // A second init (e.g. under test harnesses) is harmless.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
