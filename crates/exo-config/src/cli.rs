//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Exoplanet texture renderer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`. Either `--catalog`
/// or the single-planet flags (`--name`, `--density`, ...) select what to render.
#[derive(Parser, Debug)]
#[command(name = "exo-render", about = "Procedural exoplanet surface textures")]
pub struct CliArgs {
    /// Texture width in pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Texture height in pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for reproducible textures.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for PNG files.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RON catalog listing the planets to render.
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Planet name for single-planet mode.
    #[arg(long, default_value = "planet")]
    pub name: String,

    /// Planet density in g/cm³.
    #[arg(long)]
    pub density: Option<f64>,

    /// Equilibrium temperature in Kelvin.
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Planet has a known atmosphere.
    #[arg(long)]
    pub atmosphere: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.texture.width = w;
        }
        if let Some(h) = args.height {
            self.texture.height = h;
        }
        if let Some(seed) = args.seed {
            self.texture.seed = Some(seed);
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
