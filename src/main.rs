//! # Surf Score Application Entry Point
//!
//! This binary scores one conditions snapshot for the configured spot and prints
//! the result, either as an ASCII scorecard (default) or as JSON for other tools.
//!
//! ```text
//! surf-score [--json] [CONDITIONS_PATH]
//! ```
//!
//! `CONDITIONS_PATH` defaults to `conditions.json`. Spot settings come from
//! `surf-config.toml` in the working directory, or built-in defaults.

use anyhow::Context;
use std::env;
use surf_metrics_lib::{conditions::Conditions, config::Config, renderer, report::SurfReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Conditions file used when none is given on the command line
const DEFAULT_CONDITIONS_PATH: &str = "conditions.json";

/// Command line options
struct Args {
    json: bool,
    conditions_path: String,
}

fn parse_args() -> Args {
    let mut json = false;
    let mut conditions_path = None;

    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if conditions_path.is_none() {
            conditions_path = Some(arg);
        }
    }

    Args {
        json,
        conditions_path: conditions_path.unwrap_or_else(|| DEFAULT_CONDITIONS_PATH.to_string()),
    }
}

/// Log to stderr so stdout stays clean for the report itself.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = parse_args();

    let config = Config::load();

    let conditions = Conditions::load_from_path(&args.conditions_path)
        .with_context(|| format!("reading conditions from {}", args.conditions_path))?;

    let report = SurfReport::build(&conditions, &config.spot)
        .context("conditions contain invalid measurements")?;

    info!(
        spot = %report.spot,
        overall = report.score.overall_score,
        "scored conditions"
    );

    if args.json || config.display.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        renderer::draw_ascii(&report, &config.display);
    }

    Ok(())
}
