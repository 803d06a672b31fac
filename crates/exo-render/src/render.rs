//! Rendering planets to PNG files on disk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use exo_config::Config;
use exo_texture::{PixelBuffer, PlanetParams, SynthError, seed::planet_rng, synthesize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while rendering textures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("catalog error: {0}")]
    Catalog(#[from] exo_texture::CatalogError),

    #[error("failed to synthesize {planet}: {source}")]
    Synth {
        planet: String,
        #[source]
        source: SynthError,
    },

    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pixel buffer of {width}x{height} does not match its data length")]
    BufferSize { width: u32, height: u32 },
}

/// What happened to a single planet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

/// Turn a planet name into a safe file stem.
///
/// Anything other than ASCII letters, digits, `-` and `_` becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        "planet".to_string()
    } else {
        stem
    }
}

fn png_path(directory: &Path, stem: &str) -> PathBuf {
    directory.join(format!("{stem}.png"))
}

/// Hands out file stems for one batch, suffixing `-2`, `-3`, ... when two
/// planet names sanitize to the same stem.
#[derive(Debug, Default)]
pub struct StemAllocator {
    taken: HashSet<String>,
}

impl StemAllocator {
    pub fn allocate(&mut self, name: &str) -> String {
        let stem = sanitize_file_name(name);
        if self.taken.insert(stem.clone()) {
            return stem;
        }
        let unique = (2u32..)
            .map(|n| format!("{stem}-{n}"))
            .find(|candidate| !self.taken.contains(candidate))
            .unwrap_or_else(|| format!("{stem}-{}", self.taken.len()));
        warn!(planet = name, stem = %unique, "file name collides with an earlier planet");
        self.taken.insert(unique.clone());
        unique
    }
}

/// Encode a pixel buffer as PNG at `path`.
pub fn save_png(pixels: PixelBuffer, path: &Path) -> Result<(), RenderError> {
    let (width, height) = pixels.dimensions();
    let image = image::RgbaImage::from_raw(width, height, pixels.into_raw())
        .ok_or(RenderError::BufferSize { width, height })?;
    image.save(path)?;
    Ok(())
}

/// Renders planets with the settings from one [`Config`].
pub struct Renderer<'a> {
    config: &'a Config,
    base_seed: u64,
}

impl<'a> Renderer<'a> {
    /// Uses the configured seed, or a fresh random one when none is set.
    pub fn new(config: &'a Config) -> Self {
        let base_seed = config.texture.seed.unwrap_or_else(rand::random);
        Self { config, base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Render one planet into `<output>/<stem>.png`.
    pub fn render_to(&self, planet: &PlanetParams, stem: &str) -> Result<RenderOutcome, RenderError> {
        let directory = &self.config.output.directory;
        std::fs::create_dir_all(directory).map_err(|source| RenderError::OutputDir {
            path: directory.clone(),
            source,
        })?;

        let path = png_path(directory, stem);
        if self.config.output.skip_existing && path.exists() {
            return Ok(RenderOutcome::Skipped(path));
        }

        let mut rng = planet_rng(self.base_seed, &planet.name);
        let pixels = synthesize(
            planet,
            self.config.texture.width,
            self.config.texture.height,
            &mut rng,
        )
        .map_err(|source| RenderError::Synth {
            planet: planet.name.clone(),
            source,
        })?;
        save_png(pixels, &path)?;
        Ok(RenderOutcome::Written(path))
    }

    /// Render every planet, logging and counting failures instead of stopping.
    ///
    /// Planets whose names sanitize to the same stem get distinct files, in
    /// iteration order, so reruns map each planet to the same file.
    pub fn render_all<'p>(&self, planets: impl IntoIterator<Item = &'p PlanetParams>) -> RenderSummary {
        let mut summary = RenderSummary::default();
        let mut stems = StemAllocator::default();
        for planet in planets {
            let stem = stems.allocate(&planet.name);
            match self.render_to(planet, &stem) {
                Ok(RenderOutcome::Written(path)) => {
                    info!(planet = %planet.name, path = %path.display(), "wrote texture");
                    summary.written += 1;
                }
                Ok(RenderOutcome::Skipped(path)) => {
                    debug!(planet = %planet.name, path = %path.display(), "texture exists, skipping");
                    summary.skipped += 1;
                }
                Err(e) => {
                    warn!(planet = %planet.name, error = %e, "render failed");
                    summary.failed += 1;
                }
            }
        }
        summary
    }
}

/// Counts from a batch render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}
