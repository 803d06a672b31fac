//! Command-line renderer that writes exoplanet surface textures as PNG files.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p exo-render -- --catalog planets.ron` to render a catalog,
//! or `cargo run -p exo-render -- --name "Kepler-22 b" --density 1.2 --temperature 262`
//! for a single planet.

mod render;

use std::process::ExitCode;

use clap::Parser;
use exo_config::{CliArgs, Config};
use exo_texture::{Catalog, PlanetParams};
use tracing::{error, info};

use crate::render::{RenderError, Renderer};

/// Planets selected by the command line: a catalog, or one planet from flags.
fn planets_from_args(args: &CliArgs) -> Result<Vec<PlanetParams>, RenderError> {
    match &args.catalog {
        Some(path) => {
            let catalog = Catalog::load(path)?;
            Ok(catalog.unique().into_iter().cloned().collect())
        }
        None => Ok(vec![PlanetParams {
            name: args.name.clone(),
            density: args.density,
            temperature: args.temperature,
            atmosphere: args.atmosphere,
        }]),
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<bool, RenderError> {
    let planets = planets_from_args(args)?;
    let renderer = Renderer::new(config);
    info!(
        planets = planets.len(),
        width = config.texture.width,
        height = config.texture.height,
        seed = renderer.base_seed(),
        output = %config.output.directory.display(),
        "rendering textures"
    );

    let summary = renderer.render_all(&planets);
    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );
    Ok(summary.failed == 0)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => match exo_config::default_config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    exo_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&args, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
