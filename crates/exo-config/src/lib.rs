//! Configuration system for the exoplanet texture tools.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Unknown or missing fields fall back to defaults so older and
//! newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, OutputConfig, TextureConfig, default_config_dir};
pub use error::ConfigError;
